//! Gameplay entities: the player's car, oncoming traffic and roadside clouds

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::consts::*;

/// One axis of player steering. Several may be applied in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The player's car
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels moved per tick along each steered axis
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::start_position(),
            size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    /// Horizontally centred, just above the bottom edge
    pub fn start_position() -> Vec2 {
        Vec2::new(
            SCREEN_WIDTH / 2.0 - CAR_WIDTH / 2.0,
            SCREEN_HEIGHT - CAR_HEIGHT - PLAYER_START_MARGIN,
        )
    }

    /// Move one step; requests past the road or screen edge are clamped
    pub fn steer(&mut self, direction: Direction) {
        let (min, max) = self.bounds();
        match direction {
            Direction::Left => self.pos.x = (self.pos.x - self.speed).max(min.x),
            Direction::Right => self.pos.x = (self.pos.x + self.speed).min(max.x),
            Direction::Up => self.pos.y = (self.pos.y - self.speed).max(min.y),
            Direction::Down => self.pos.y = (self.pos.y + self.speed).min(max.y),
        }
    }

    /// Allowed range for the top-left corner
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(ROAD_LEFT, 0.0),
            Vec2::new(ROAD_RIGHT - self.size.x, SCREEN_HEIGHT - self.size.y),
        )
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// An oncoming car
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels moved down per tick
    pub speed: f32,
}

impl Obstacle {
    /// New obstacle just above the top edge at horizontal position `x`
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, -CAR_HEIGHT),
            size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            speed: OBSTACLE_SPEED,
        }
    }

    /// New obstacle at a uniformly random lane position inside the road
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let x = rng.random_range(ROAD_LEFT..=ROAD_RIGHT - CAR_WIDTH);
        Self::new(x)
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the car has fully left the bottom of the viewport
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Which verge a cloud drifts over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A decorative cloud drifting down one verge
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    side: Side,
}

impl Cloud {
    pub fn new<R: Rng>(side: Side, rng: &mut R) -> Self {
        let size = Vec2::new(
            rng.random_range(CLOUD_MIN_WIDTH..=CLOUD_MAX_WIDTH),
            rng.random_range(CLOUD_MIN_HEIGHT..=CLOUD_MAX_HEIGHT),
        );
        let x = Self::sample_x(side, size.x, rng);
        let y = rng.random_range(-size.y..=SCREEN_HEIGHT);
        Self {
            pos: Vec2::new(x, y),
            size,
            side,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Drift down by `speed`; past the bottom edge the cloud restarts above
    /// the viewport at a fresh position on its own side
    pub fn advance<R: Rng>(&mut self, speed: f32, rng: &mut R) {
        self.pos.y += speed;
        if self.pos.y > SCREEN_HEIGHT {
            self.pos.y = -self.size.y - rng.random_range(0.0..=CLOUD_WRAP_JITTER);
            self.pos.x = Self::sample_x(self.side, self.size.x, rng);
        }
    }

    /// Horizontal range available to a cloud of `width` on `side`
    pub fn x_range(side: Side, width: f32) -> (f32, f32) {
        match side {
            Side::Left => (0.0, ROAD_LEFT - width - CLOUD_ROAD_GAP),
            Side::Right => (ROAD_RIGHT + CLOUD_ROAD_GAP, SCREEN_WIDTH - width),
        }
    }

    fn sample_x<R: Rng>(side: Side, width: f32, rng: &mut R) -> f32 {
        let (lo, hi) = Self::x_range(side, width);
        rng.random_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    #[test]
    fn test_player_starts_centred() {
        let player = Player::default();
        assert_eq!(player.pos, Vec2::new(420.0, 649.0));
        assert_eq!(player.size, Vec2::new(60.0, 99.0));
    }

    #[test]
    fn test_player_clamps_at_left_bound() {
        let mut player = Player::default();
        player.pos.x = ROAD_LEFT + 3.0;
        player.steer(Direction::Left);
        assert_eq!(player.pos.x, ROAD_LEFT);
        player.steer(Direction::Left);
        assert_eq!(player.pos.x, ROAD_LEFT);
    }

    #[test]
    fn test_player_clamps_at_bottom() {
        let mut player = Player::default();
        for _ in 0..10 {
            player.steer(Direction::Down);
        }
        assert_eq!(player.pos.y, SCREEN_HEIGHT - CAR_HEIGHT);
    }

    #[test]
    fn test_player_diagonal_moves_both_axes() {
        let mut player = Player::default();
        let start = player.pos;
        player.steer(Direction::Up);
        player.steer(Direction::Right);
        assert_eq!(player.pos, start + Vec2::new(PLAYER_SPEED, -PLAYER_SPEED));
    }

    #[test]
    fn test_obstacle_spawns_above_viewport_inside_road() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let obstacle = Obstacle::spawn(&mut rng);
            assert_eq!(obstacle.pos.y, -CAR_HEIGHT);
            assert!(obstacle.pos.x >= ROAD_LEFT);
            assert!(obstacle.pos.x <= ROAD_RIGHT - CAR_WIDTH);
        }
    }

    #[test]
    fn test_obstacle_off_screen_only_past_bottom() {
        let mut obstacle = Obstacle::new(300.0);
        obstacle.pos.y = SCREEN_HEIGHT;
        assert!(!obstacle.is_off_screen());
        obstacle.advance();
        assert!(obstacle.is_off_screen());
    }

    #[test]
    fn test_cloud_wraps_on_its_side() {
        let mut rng = Pcg32::seed_from_u64(3);
        for side in [Side::Left, Side::Right] {
            let mut cloud = Cloud::new(side, &mut rng);
            cloud.pos.y = SCREEN_HEIGHT - 1.0;
            cloud.advance(3.5, &mut rng);

            assert_eq!(cloud.side(), side);
            assert!(cloud.pos.y <= -cloud.size.y);
            assert!(cloud.pos.y >= -cloud.size.y - CLOUD_WRAP_JITTER);
            let (lo, hi) = Cloud::x_range(side, cloud.size.x);
            assert!(cloud.pos.x >= lo && cloud.pos.x <= hi);
        }
    }

    #[test]
    fn test_clouds_stay_off_the_road() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..100 {
            let left = Cloud::new(Side::Left, &mut rng);
            assert!(left.pos.x + left.size.x < ROAD_LEFT);
            let right = Cloud::new(Side::Right, &mut rng);
            assert!(right.pos.x > ROAD_RIGHT);
        }
    }

    proptest! {
        #[test]
        fn player_never_leaves_road(steps in prop::collection::vec(prop::collection::vec(direction(), 0..4), 0..300)) {
            let mut player = Player::default();
            let (min, max) = player.bounds();
            for tick in steps {
                for dir in tick {
                    player.steer(dir);
                }
                prop_assert!(player.pos.x >= min.x && player.pos.x <= max.x);
                prop_assert!(player.pos.y >= min.y && player.pos.y <= max.y);
            }
        }
    }
}
