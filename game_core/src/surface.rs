use crate::SpriteId;
use glam::Vec2;

/// Text styling for HUD rendering
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font: &'static str,
    pub px: f32,
    pub color: &'static str,
}

/// 2D drawing primitives supplied by the host.
///
/// The simulation calls these once per frame per visible entity; it never
/// holds onto the surface between frames.
pub trait Surface {
    /// Draw the image scaled to `size` with its top-left corner at `pos`
    fn draw_sprite(&mut self, id: SpriteId, pos: Vec2, size: Vec2);

    /// Draw HUD text with a hanging baseline at `pos`
    fn draw_text(&mut self, text: &str, style: &TextStyle, pos: Vec2);
}
