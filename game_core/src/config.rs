use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub view_width: f32,
    pub view_height: f32,
    pub ground_line: f32,
    pub gravity: f32,
    pub game_speed: f32,
    pub jump_force: f32,
    pub player_mass: f32,
    pub win_score: f32,
    pub ground_scroll: f32,
    pub backdrop_scroll: f32,
    pub obstacle_distance: u32,
    pub hole_length: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_width: Params::VIEW_WIDTH,
            view_height: Params::VIEW_HEIGHT,
            ground_line: Params::GROUND_LINE,
            gravity: Params::GRAVITY,
            game_speed: Params::GAME_SPEED,
            jump_force: Params::JUMP_FORCE,
            player_mass: Params::PLAYER_MASS,
            win_score: Params::WIN_SCORE,
            ground_scroll: Params::GROUND_SCROLL,
            backdrop_scroll: Params::BACKDROP_SCROLL,
            obstacle_distance: Params::OBSTACLE_DISTANCE,
            hole_length: Params::HOLE_LENGTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of the ground strip below the ground line
    pub fn ground_depth(&self) -> f32 {
        self.view_height - self.ground_line
    }
}
