use glam::Vec2;

/// Opaque handle into the host's decoded-image table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteId(pub u16);

/// An image reference plus its natural pixel size.
/// The host guarantees the size is queryable once loading completes.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub id: SpriteId,
    pub size: Vec2,
}

impl Sprite {
    pub fn new(id: SpriteId, width: f32, height: f32) -> Self {
        Self {
            id,
            size: Vec2::new(width, height),
        }
    }
}

/// Animation states of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Run,
    Idle,
    Jump,
    Fall,
    Dead,
}

/// A sequence of sprite frames with a shared per-frame duration
#[derive(Debug, Clone)]
pub struct Animation {
    pub frames: Vec<Sprite>,
    pub frame_time: f32,
    pub looped: bool,
}

impl Animation {
    pub fn new(frames: Vec<Sprite>, frame_time: f32, looped: bool) -> Self {
        Self {
            frames,
            frame_time,
            looped,
        }
    }
}

/// One animation per player state
#[derive(Debug, Clone)]
pub struct AnimationSet {
    pub run: Animation,
    pub idle: Animation,
    pub jump: Animation,
    pub fall: Animation,
    pub dead: Animation,
}

impl AnimationSet {
    pub fn get(&self, state: AnimState) -> &Animation {
        match state {
            AnimState::Run => &self.run,
            AnimState::Idle => &self.idle,
            AnimState::Jump => &self.jump,
            AnimState::Fall => &self.fall,
            AnimState::Dead => &self.dead,
        }
    }
}

/// Images the ground generator and backdrop draw from
#[derive(Debug, Clone)]
pub struct TileSet {
    pub ground: Sprite,
    pub hole: Sprite,
    pub backdrop: Sprite,
    pub obstacles: Vec<Sprite>,
}
