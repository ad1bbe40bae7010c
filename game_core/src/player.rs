use crate::{AnimState, AnimationSet, Config, Events, Params, Sprite, Tile, TileKind};
use glam::Vec2;
use std::collections::VecDeque;

/// The auto-running player: position, vertical velocity, a force accumulator,
/// and a finite state machine over the animation states.
///
/// `Dead` is absorbing: once entered, `set_state` becomes a no-op and the
/// per-frame update returns immediately, freezing score and position.
pub struct Player {
    state: AnimState,
    prev_state: AnimState,
    frame: usize,
    frame_ticks: f32,
    frame_time: f32,
    animations: AnimationSet,
    sprite: Sprite,
    scale: f32,
    pos: Vec2,
    size: Vec2,
    prev_bottom: f32,
    vel: f32,
    forces: f32,
    mass: f32,
    score: f32,
    outcome_reported: bool,
}

impl Player {
    pub fn new(animations: AnimationSet, x: f32, scale: f32, config: &Config) -> Self {
        let sprite = animations.run.frames[0];
        let frame_time = animations.run.frame_time;
        let size = sprite.size * scale;
        Self {
            state: AnimState::Run,
            prev_state: AnimState::Run,
            frame: 0,
            frame_ticks: 0.0,
            frame_time,
            animations,
            sprite,
            scale,
            pos: Vec2::new(x, config.ground_line - size.y),
            size,
            prev_bottom: config.ground_line,
            vel: 0.0,
            forces: 0.0,
            mass: config.player_mass,
            score: 0.0,
            outcome_reported: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn vel(&self) -> f32 {
        self.vel
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Switch animation state; ignored if unchanged or already dead
    pub fn set_state(&mut self, state: AnimState) {
        if state == self.state || self.state == AnimState::Dead {
            return;
        }
        self.frame = 0;
        self.frame_ticks = 0.0;
        self.state = state;
        self.frame_time = self.animations.get(state).frame_time;
        self.refresh_sprite();
    }

    pub fn add_force(&mut self, amount: f32) {
        self.forces += amount;
    }

    /// Begin an upward impulse; only meaningful while running or idle
    pub fn jump(&mut self, config: &Config) {
        if self.state == AnimState::Run || self.state == AnimState::Idle {
            self.prev_state = self.state;
            self.add_force(config.jump_force);
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        tiles: &VecDeque<Tile>,
        obstacles: &VecDeque<Tile>,
        config: &Config,
        events: &mut Events,
    ) {
        if self.state == AnimState::Dead {
            return;
        }

        self.score += Params::SCORE_RATE * dt * config.game_speed;

        self.simulate_physics(dt, tiles, config, events);
        self.check_obstacles(obstacles);

        if self.vel > 0.0 {
            self.set_state(AnimState::Jump);
        }
        if self.vel < 0.0 {
            self.set_state(AnimState::Fall);
        }

        // Fell through a hole and kept falling
        if self.pos.y > config.view_height {
            self.set_state(AnimState::Dead);
        }

        self.report_outcome(config, events);
        self.advance_animation(dt);
    }

    /// Verlet-style midpoint integration of the accumulated forces, then the
    /// ground-contact correction. The force accumulator is zeroed each step.
    fn simulate_physics(
        &mut self,
        delta: f32,
        tiles: &VecDeque<Tile>,
        config: &Config,
        events: &mut Events,
    ) {
        // With velocity freshly reset a large real delta would overshoot the
        // first step, so force a unit timestep for that frame.
        let dt = if self.vel == 0.0 { 1.0 } else { delta };
        self.add_force(config.gravity);

        self.prev_bottom = self.bottom();

        let acceleration = self.forces / self.mass;
        self.pos.y -= dt * (self.vel + dt * acceleration / 2.0);

        let next_acceleration = config.gravity / self.mass;
        self.vel += dt * (acceleration + next_acceleration) / 2.0;

        self.forces = 0.0;

        if let Some(top) = self.ground_contact(tiles) {
            if self.bottom() != top {
                self.set_state(self.prev_state);
                self.pos.y = top - self.size.y;
                if self.vel < 0.0 {
                    self.vel = 0.0;
                }
                events.landed = true;
            }
        }
    }

    /// Top edge of the first ground tile the player is landing on, if any.
    /// The previous frame's bottom edge is part of the test so thin tiles
    /// cannot be tunneled through at high fall speeds.
    fn ground_contact(&self, tiles: &VecDeque<Tile>) -> Option<f32> {
        tiles
            .iter()
            .find(|t| {
                t.kind == TileKind::Ground
                    && self.pos.x < t.right()
                    && self.right() > t.pos.x
                    && self.prev_bottom <= t.pos.y
                    && self.bottom() >= t.pos.y
                    && self.pos.y < t.pos.y
            })
            .map(|t| t.pos.y)
    }

    /// Any bounding-box overlap with an obstacle is fatal
    fn check_obstacles(&mut self, obstacles: &VecDeque<Tile>) {
        let hit = obstacles.iter().any(|t| {
            self.pos.x < t.right()
                && self.right() > t.pos.x
                && self.pos.y < t.bottom()
                && self.bottom() > t.pos.y
        });
        if hit {
            self.set_state(AnimState::Dead);
        }
    }

    /// Report the terminal outcome at most once per game
    fn report_outcome(&mut self, config: &Config, events: &mut Events) {
        if self.outcome_reported {
            return;
        }
        if self.score >= config.win_score {
            self.outcome_reported = true;
            events.won = true;
        } else if self.state == AnimState::Dead {
            self.outcome_reported = true;
            events.died = true;
        }
    }

    fn advance_animation(&mut self, delta: f32) {
        self.frame_ticks += Params::FRAME_TICK_RATE * delta;

        let anim = self.animations.get(self.state);
        let frame_count = anim.frames.len();
        let looped = anim.looped;

        if (looped || self.frame < frame_count - 1) && self.frame_ticks >= self.frame_time {
            self.frame += 1;
            self.frame_ticks = 0.0;
            if self.frame == frame_count {
                self.frame = 0;
            }
            self.refresh_sprite();
        }
    }

    /// Swap in the current frame's sprite, keeping the bottom edge fixed
    /// (frames vary in height)
    fn refresh_sprite(&mut self) {
        let bottom = self.bottom();
        self.sprite = self.animations.get(self.state).frames[self.frame];
        self.size = self.sprite.size * self.scale;
        self.pos.y = bottom - self.size.y;
    }
}
