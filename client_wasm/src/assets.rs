use game_core::{Sprite, SpriteId};
use glam::Vec2;
use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Collects images and their decode promises so startup can wait on all of
/// them at once.
pub struct ImageLoader {
    images: Vec<HtmlImageElement>,
    pending: Vec<js_sys::Promise>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Begin loading an image; the returned id is usable immediately, the
    /// pixels and natural size arrive once `load_all` resolves.
    pub fn load(&mut self, src: &str) -> Result<SpriteId, JsValue> {
        let img = HtmlImageElement::new()?;
        img.set_src(src);
        self.pending.push(img.decode());
        let id = SpriteId(self.images.len() as u16);
        self.images.push(img);
        Ok(id)
    }

    /// Wait for every outstanding load. Collective join semantics: any single
    /// failure aborts startup; the error is logged and reported, not retried.
    pub async fn load_all(self) -> Result<Vec<HtmlImageElement>, JsValue> {
        let Self { images, pending } = self;
        let all: Array = pending.into_iter().map(JsValue::from).collect();
        match JsFuture::from(js_sys::Promise::all(&all)).await {
            Ok(_) => Ok(images),
            Err(err) => {
                web_sys::console::error_2(&JsValue::from_str("image failed to load:"), &err);
                Err(err)
            }
        }
    }
}

/// Sprite handle for a loaded image, carrying its natural pixel size
pub fn sprite(images: &[HtmlImageElement], id: SpriteId) -> Sprite {
    let img = &images[id.0 as usize];
    Sprite {
        id,
        size: Vec2::new(img.natural_width() as f32, img.natural_height() as f32),
    }
}
