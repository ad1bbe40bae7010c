use wasm_bindgen::JsValue;
use web_sys::Document;

/// The DOM overlay screens the game raises: intro, win, and game over.
/// The core reports each terminal outcome at most once, so these calls are
/// inherently one-shot.
pub struct Overlay {
    document: Document,
}

impl Overlay {
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self { document })
    }

    pub fn show_intro(&self) -> Result<(), JsValue> {
        self.set_class("game-intro", "show")
    }

    pub fn hide_intro(&self) -> Result<(), JsValue> {
        self.set_class("game-intro", "hide")
    }

    pub fn show_win(&self) -> Result<(), JsValue> {
        self.set_class("game-win", "show")
    }

    pub fn show_game_over(&self, score: u32) -> Result<(), JsValue> {
        let label = self
            .document
            .get_element_by_id("game-over-score")
            .ok_or_else(|| JsValue::from_str("missing #game-over-score"))?;
        label.set_text_content(Some(&format!("Score: {score}")));
        self.set_class("game-over", "show")
    }

    fn set_class(&self, id: &str, class: &str) -> Result<(), JsValue> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?;
        element.set_class_name(class);
        Ok(())
    }
}
