pub mod backdrop;
pub mod config;
pub mod ground;
pub mod params;
pub mod player;
pub mod resources;
pub mod sprites;
pub mod surface;
pub mod tile;

pub use backdrop::*;
pub use config::*;
pub use ground::*;
pub use params::*;
pub use player::*;
pub use resources::*;
pub use sprites::*;
pub use surface::*;
pub use tile::*;

/// Advance the runner simulation by one frame.
///
/// Data flows one way: input intent into the player, then scrolling, then
/// physics and collision against the ground's tile strips (passed in
/// explicitly), then state transitions reported through `events`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    player: &mut Player,
    ground: &mut Ground,
    backdrop: &mut Backdrop,
    input: &mut InputQueue,
    time: &Time,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    if input.take_jump() {
        player.jump(config);
    }

    backdrop.update(time.dt, config);
    ground.update(time.dt, player.score(), config, rng);
    player.update(time.dt, ground.tiles(), ground.obstacles(), config, events);
}

/// Render one frame: backdrop, ground strip, obstacles, player, score HUD
pub fn draw(surface: &mut dyn Surface, player: &Player, ground: &Ground, backdrop: &Backdrop) {
    for tile in backdrop.tiles() {
        surface.draw_sprite(tile.sprite.id, tile.pos, tile.size);
    }
    for tile in ground.tiles() {
        surface.draw_sprite(tile.sprite.id, tile.pos, tile.size);
    }
    for tile in ground.obstacles() {
        surface.draw_sprite(tile.sprite.id, tile.pos, tile.size);
    }
    surface.draw_sprite(player.sprite().id, player.pos(), player.size());

    let score = format!("Score: {}", player.score() as u32);
    surface.draw_text(&score, &Params::SCORE_STYLE, Params::SCORE_POS);
}
