//! Road Dodger entry point
//!
//! Handles platform initialization and runs the game loop.

use std::path::Path;

use macroquad::input::prevent_quit;
use macroquad::time::{get_frame_time, get_time};
use macroquad::window::{Conf, next_frame};

use road_dodger::Settings;
use road_dodger::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use road_dodger::platform::{Driver, FpsCounter, FrameLimiter, mq_input};
use road_dodger::renderer::{Hud, MqCanvas, MqSprite, Sprites, load_sprites, render_frame};
use road_dodger::sim::GameEvent;
use road_dodger::ui::RestartButton;

/// Game instance holding all state
struct Game {
    driver: Driver,
    sprites: Sprites<MqSprite>,
    canvas: MqCanvas,
    button: RestartButton,
    limiter: FrameLimiter,
    fps: FpsCounter,
    settings: Settings,
}

impl Game {
    fn new(seed: u64, settings: Settings, sprites: Sprites<MqSprite>) -> Self {
        Self {
            driver: Driver::new(seed),
            sprites,
            canvas: MqCanvas,
            button: RestartButton::default(),
            limiter: FrameLimiter::new(settings.fps_limit),
            fps: FpsCounter::default(),
            settings,
        }
    }

    /// One frame: sample input, run due ticks, draw. Returns false on quit.
    fn frame(&mut self) -> bool {
        let input = mq_input::poll();
        if input.quit_requested() {
            return false;
        }

        let tick_input = input.tick_input(&self.button, self.settings.animate_clouds_on_game_over);
        self.driver.update(&tick_input, get_frame_time() as f64);
        for event in self.driver.frame_events() {
            if let GameEvent::Restarted { previous_score } = event {
                log::info!("New run (previous score {})", previous_score);
            }
        }

        self.fps.record(get_time());
        let hud = Hud {
            pointer: input.pointer,
            fps: self.settings.show_fps.then(|| self.fps.fps()),
        };
        render_frame(
            &mut self.canvas,
            &self.driver.state,
            &self.sprites,
            &self.button,
            &hud,
        );
        true
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Road Dodger".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Seed from the wall clock when none is configured
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Road Dodger starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let sprites = load_sprites(Path::new(&settings.asset_dir)).await;
    for kind in sprites.missing() {
        log::info!("{:?} will be drawn with primitive shapes", kind);
    }

    let mut game = Game::new(seed, settings, sprites);

    // Window close arrives as an input event so the loop can exit cleanly
    prevent_quit();

    loop {
        let frame_start = get_time();
        if !game.frame() {
            break;
        }
        game.limiter.wait(frame_start, get_time);
        next_frame().await;
    }

    log::info!(
        "Quitting after {} ticks, score {}",
        game.driver.state.time_ticks,
        game.driver.state.session.score
    );
}
