use crate::{Config, Sprite, Tile, TileKind};
use glam::Vec2;
use std::collections::VecDeque;

/// A looping horizontal strip of parallax-scrolling background tiles.
/// Purely cosmetic; no win or obstacle logic.
#[derive(Debug)]
pub struct Backdrop {
    sprite: Sprite,
    tile_size: Vec2,
    speed: f32,
    tiles: VecDeque<Tile>,
}

impl Backdrop {
    pub fn new(sprite: Sprite, config: &Config) -> Self {
        let height = config.view_height;
        let width = sprite.size.x * (height / sprite.size.y);
        let tile_size = Vec2::new(width, height);
        let count = (config.view_width / width).ceil() as usize + 1;
        let speed = config.backdrop_scroll;

        let tiles = (0..count)
            .map(|i| {
                Tile::new(
                    sprite,
                    Vec2::new(i as f32 * width, 0.0),
                    tile_size,
                    TileKind::Backdrop,
                    speed,
                )
            })
            .collect();

        Self {
            sprite,
            tile_size,
            speed,
            tiles,
        }
    }

    /// Advance every tile; recycle the leading tile to the trailing edge once
    /// it has scrolled fully off-screen, keeping the loop seamless.
    pub fn update(&mut self, dt: f32, config: &Config) {
        let mut shift = false;
        for tile in &mut self.tiles {
            if !tile.advance(dt, config.game_speed) {
                shift = true;
            }
        }

        if shift {
            self.tiles.pop_front();
            if let Some(last) = self.tiles.back() {
                let x = last.right();
                self.tiles.push_back(Tile::new(
                    self.sprite,
                    Vec2::new(x, 0.0),
                    self.tile_size,
                    TileKind::Backdrop,
                    self.speed,
                ));
            }
        }
    }

    pub fn tiles(&self) -> &VecDeque<Tile> {
        &self.tiles
    }
}
