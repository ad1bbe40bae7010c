//! Canvas 2D browser client.
//!
//! Thin glue around `game_core`: asset loading, input forwarding, DOM
//! overlays, and a requestAnimationFrame-driven frame callback. The host
//! page re-arms the next frame unconditionally; the dead state being
//! absorbing makes the redundant frames harmless.
#![cfg(target_arch = "wasm32")]

mod assets;
mod overlay;

use assets::ImageLoader;
use game_core::{
    draw, step, Animation, AnimationSet, Backdrop, Config, Events, GameRng, Ground, InputQueue,
    Key, Params, Player, Sprite, SpriteId, Surface, TextStyle, TileSet, Time,
};
use glam::Vec2;
use overlay::Overlay;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const RUN_FRAMES: u16 = 6;
const IDLE_FRAMES: u16 = 2;

/// Canvas-backed implementation of the core's drawing contract
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: Vec<HtmlImageElement>,
}

impl Surface for CanvasSurface {
    fn draw_sprite(&mut self, id: SpriteId, pos: Vec2, size: Vec2) {
        if let Some(img) = self.images.get(id.0 as usize) {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                pos.x as f64,
                pos.y as f64,
                size.x as f64,
                size.y as f64,
            );
        }
    }

    fn draw_text(&mut self, text: &str, style: &TextStyle, pos: Vec2) {
        self.ctx.set_font(&format!("{}px {}", style.px, style.font));
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_baseline("hanging");
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}

struct Client {
    surface: CanvasSurface,
    overlay: Overlay,
    config: Config,
    player: Player,
    ground: Ground,
    backdrop: Backdrop,
    input: InputQueue,
    events: Events,
    rng: GameRng,
    prev_frame: f64,
    running: bool,
}

fn load_frames(
    loader: &mut ImageLoader,
    path: &str,
    count: u16,
) -> Result<Vec<SpriteId>, JsValue> {
    (0..count)
        .map(|i| loader.load(&format!("{path}/{i}.png")))
        .collect()
}

impl Client {
    async fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let config = Config::new();
        canvas.set_width(config.view_width as u32);
        canvas.set_height(config.view_height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut loader = ImageLoader::new();
        let ground_id = loader.load("images/background/tile.png")?;
        let hole_id = loader.load("images/background/hole.png")?;
        let backdrop_id = loader.load("images/background/backdrop.png")?;
        let obstacle_ids = vec![
            loader.load("images/obstacles/cactus.png")?,
            loader.load("images/obstacles/spikes.png")?,
        ];
        let run_ids = load_frames(&mut loader, "images/kenny/run", RUN_FRAMES)?;
        let idle_ids = load_frames(&mut loader, "images/kenny/idle", IDLE_FRAMES)?;
        let jump_ids = load_frames(&mut loader, "images/kenny/jump", 1)?;
        let fall_ids = load_frames(&mut loader, "images/kenny/fall", 1)?;
        let dead_ids = load_frames(&mut loader, "images/kenny/hit", 1)?;

        let images = loader.load_all().await?;

        let sprite = |id| assets::sprite(&images, id);
        let frames = |ids: Vec<SpriteId>| -> Vec<Sprite> { ids.into_iter().map(sprite).collect() };
        let tiles = TileSet {
            ground: sprite(ground_id),
            hole: sprite(hole_id),
            backdrop: sprite(backdrop_id),
            obstacles: frames(obstacle_ids),
        };
        let animations = AnimationSet {
            run: Animation::new(frames(run_ids), 7.0, true),
            idle: Animation::new(frames(idle_ids), 25.0, true),
            jump: Animation::new(frames(jump_ids), 0.0, false),
            fall: Animation::new(frames(fall_ids), 0.0, false),
            dead: Animation::new(frames(dead_ids), 0.0, false),
        };

        let overlay = Overlay::new()?;
        overlay.show_intro()?;

        Ok(Self {
            surface: CanvasSurface { ctx, images },
            overlay,
            player: Player::new(animations, Params::PLAYER_X, Params::PLAYER_SCALE, &config),
            ground: Ground::new(&tiles, &config),
            backdrop: Backdrop::new(tiles.backdrop, &config),
            input: InputQueue::new(),
            events: Events::new(),
            rng: GameRng::new(js_sys::Date::now() as u64),
            prev_frame: 0.0,
            running: false,
            config,
        })
    }

    fn start(&mut self, now: f64) -> Result<(), JsValue> {
        self.prev_frame = now;
        self.running = true;
        self.overlay.hide_intro()
    }

    fn frame(&mut self, now: f64) -> Result<(), JsValue> {
        if !self.running {
            return Ok(());
        }
        let dt = (now - self.prev_frame) as f32;
        self.prev_frame = now;
        let time = Time::new(dt, now as f32);

        step(
            &mut self.player,
            &mut self.ground,
            &mut self.backdrop,
            &mut self.input,
            &time,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );

        if self.events.won {
            self.overlay.show_win()?;
        }
        if self.events.died {
            self.overlay.show_game_over(self.player.score() as u32)?;
        }

        draw(&mut self.surface, &self.player, &self.ground, &self.backdrop);
        Ok(())
    }
}

// Global client storage for WASM bindings
static mut CLIENT: Option<Client> = None;

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    unsafe {
        match CLIENT {
            Some(ref mut client) => f(client),
            None => Err(JsValue::from_str("game not initialized")),
        }
    }
}

/// Load assets, size the canvas, and show the intro overlay. The returned
/// promise resolves once every image has decoded.
#[wasm_bindgen]
pub fn init_game(canvas: HtmlCanvasElement) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::future_to_promise(async move {
        let client = Client::new(canvas).await?;
        unsafe {
            CLIENT = Some(client);
        }
        Ok(JsValue::UNDEFINED)
    })
}

/// Dismiss the intro and begin simulating from the given timestamp.
#[wasm_bindgen]
pub fn start_game(now: f64) -> Result<(), JsValue> {
    with_client(|client| client.start(now))
}

/// Advance one frame. Called from the page's requestAnimationFrame loop
/// with the callback timestamp in milliseconds.
#[wasm_bindgen]
pub fn frame(now: f64) -> Result<(), JsValue> {
    with_client(|client| client.frame(now))
}

/// Forward a keydown; only the space bar is bound.
#[wasm_bindgen]
pub fn key_down(key: &str) {
    let _ = with_client(|client| {
        if key == " " {
            client.input.press(Key::Jump);
        }
        Ok(())
    });
}

/// Forward a touchstart anywhere on the canvas as a jump.
#[wasm_bindgen]
pub fn touch_jump() {
    let _ = with_client(|client| {
        client.input.queue_jump();
        Ok(())
    });
}
