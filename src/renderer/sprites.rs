//! Optional sprite table
//!
//! Each image is looked up by logical name. A slot stays empty when its file
//! failed to load, and the scene falls back to primitive shapes for it.

use glam::Vec2;

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    PlayerCar,
    NpcCar,
    Tree,
    /// Verge texture behind the tree rows
    Background,
}

impl SpriteKind {
    pub const COUNT: usize = 4;

    pub const ALL: [SpriteKind; Self::COUNT] = [
        SpriteKind::PlayerCar,
        SpriteKind::NpcCar,
        SpriteKind::Tree,
        SpriteKind::Background,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteKind::PlayerCar => "playerCar.png",
            SpriteKind::NpcCar => "npcCar.png",
            SpriteKind::Tree => "tree.png",
            SpriteKind::Background => "bkc.png",
        }
    }

    /// On-screen size the image is scaled to at load time
    pub fn size(&self) -> Vec2 {
        match self {
            SpriteKind::PlayerCar | SpriteKind::NpcCar => Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            SpriteKind::Tree => Vec2::new(TREE_SPRITE_WIDTH, TREE_SPRITE_HEIGHT),
            // One verge wide, a little taller than the screen
            SpriteKind::Background => Vec2::new(ROAD_LEFT, (SCREEN_HEIGHT * 1.2).round()),
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Loaded sprites by kind
#[derive(Debug, Clone)]
pub struct Sprites<S> {
    slots: [Option<S>; SpriteKind::COUNT],
}

impl<S> Default for Sprites<S> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl<S> Sprites<S> {
    /// Table with every slot empty (all fallbacks)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: SpriteKind, sprite: S) {
        self.slots[kind.index()] = Some(sprite);
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&S> {
        self.slots[kind.index()].as_ref()
    }

    pub fn missing(&self) -> impl Iterator<Item = SpriteKind> + '_ {
        SpriteKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_none())
    }
}
