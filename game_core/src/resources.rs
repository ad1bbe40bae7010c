/// Time resource for tracking the frame clock
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Milliseconds since the previous frame
    pub now: f32, // Total elapsed milliseconds
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 16.7, now: 0.0 }
    }
}

/// Random number generator for spawn rolls
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame.
///
/// `won` and `died` are edge-triggered: the player reports each at most once
/// per game, so observers can drive one-shot UI transitions from them directly.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub won: bool,
    pub died: bool,
    pub landed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.won = false;
        self.died = false;
        self.landed = false;
    }
}

/// Keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Jump,
}

/// Pending input for the next frame: a de-duplicated set of pressed keys
/// plus a discrete jump trigger from a pointer or touch source.
/// Sampled once per frame and then cleared.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    keys: Vec<Key>,
    touch_jump: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    pub fn queue_jump(&mut self) {
        self.touch_jump = true;
    }

    /// Sample and clear; true if a jump was requested since the last frame
    pub fn take_jump(&mut self) -> bool {
        let jump = self.touch_jump || self.keys.contains(&Key::Jump);
        self.keys.clear();
        self.touch_jump = false;
        jump
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.won = true;
        events.died = true;
        events.landed = true;

        events.clear();

        assert!(!events.won);
        assert!(!events.died);
        assert!(!events.landed);
    }

    #[test]
    fn test_input_queue_deduplicates_keys() {
        let mut input = InputQueue::new();
        input.press(Key::Jump);
        input.press(Key::Jump);

        assert!(input.take_jump());
        assert!(!input.take_jump(), "Sampling must clear the key set");
    }

    #[test]
    fn test_input_queue_touch_jump() {
        let mut input = InputQueue::new();
        input.queue_jump();

        assert!(input.take_jump());
        assert!(!input.take_jump(), "Touch trigger must clear after sampling");
    }

    #[test]
    fn test_rng_deterministic_under_seed() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        let rolls_a: Vec<u32> = (0..10).map(|_| a.0.gen_range(0..=9)).collect();
        let rolls_b: Vec<u32> = (0..10).map(|_| b.0.gen_range(0..=9)).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
