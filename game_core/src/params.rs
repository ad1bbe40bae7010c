use crate::surface::TextStyle;
use glam::Vec2;

/// Fixed tuning parameters for the runner
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport
    pub const VIEW_WIDTH: f32 = 720.0;
    pub const VIEW_HEIGHT: f32 = 480.0;
    /// Y coordinate of the ground surface (top edge of the ground strip)
    pub const GROUND_LINE: f32 = Self::VIEW_HEIGHT - 40.0;

    // Physics
    pub const GRAVITY: f32 = -1.0;
    pub const GAME_SPEED: f32 = 1.5;
    pub const JUMP_FORCE: f32 = 500.0;
    pub const PLAYER_MASS: f32 = 200.0;

    // Player
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SCALE: f32 = 0.1;

    // Scrolling (pixels per millisecond, before the game-speed multiplier)
    pub const GROUND_SCROLL: f32 = 0.25;
    pub const BACKDROP_SCROLL: f32 = 0.1;

    // Scoring
    pub const WIN_SCORE: f32 = 1000.0;
    /// Score gained per millisecond per unit of game speed.
    /// Frame-rate-coupled tuning value; do not normalize.
    pub const SCORE_RATE: f32 = 0.0125;

    // Animation
    /// Frame-timer ticks accumulated per millisecond.
    /// Frame-rate-coupled tuning value; do not normalize.
    pub const FRAME_TICK_RATE: f32 = 0.06;

    // Procedural generation
    pub const OBSTACLE_DISTANCE: u32 = 6;
    pub const HOLE_LENGTH: u32 = 3;
    /// Spawn-chance denominator before the first score update
    pub const INITIAL_SPAWN_ODDS: u32 = 9;

    // HUD
    pub const SCORE_STYLE: TextStyle = TextStyle {
        font: "Roboto",
        px: 32.0,
        color: "black",
    };
    pub const SCORE_POS: Vec2 = Vec2::new(25.0, 25.0);
}
