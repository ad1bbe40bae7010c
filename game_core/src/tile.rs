use crate::Sprite;
use glam::Vec2;

/// What a tile represents within its strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Ground,
    Hole,
    Obstacle,
    Backdrop,
}

/// A positioned, speed-scrolling rectangular visual unit
#[derive(Debug, Clone)]
pub struct Tile {
    pub kind: TileKind,
    pub sprite: Sprite,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Tile {
    pub fn new(sprite: Sprite, pos: Vec2, size: Vec2, kind: TileKind, speed: f32) -> Self {
        Self {
            kind,
            sprite,
            pos,
            size,
            speed,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Scroll left by `speed * game_speed * dt`; false once the right edge
    /// has passed the left screen boundary.
    pub fn advance(&mut self, dt: f32, game_speed: f32) -> bool {
        self.pos.x -= self.speed * game_speed * dt;
        self.right() >= 0.0
    }
}
