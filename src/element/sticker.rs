use std::fmt::Write;

use egui::{Align2, Color32, FontId, Painter, Pos2, Vec2};

use super::escape_xml;

/// A glyph placed at a point on the canvas.
///
/// The glyph and size are captured at creation. The position follows the
/// pointer while the button is held and is fixed once released.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    glyph: String,
    position: Pos2,
    size: f32,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, position: Pos2, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            size,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Move the sticker while it is being placed (drag-to-place).
    pub fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }

    pub(crate) fn draw(&self, painter: &Painter, offset: Vec2) {
        painter.text(
            self.position + offset,
            Align2::CENTER_CENTER,
            &self.glyph,
            FontId::proportional(self.size),
            Color32::BLACK,
        );
    }

    pub(crate) fn write_svg(&self, svg: &mut String) {
        let escaped = escape_xml(&self.glyph);
        // Shift the baseline down so the glyph is optically centered on the
        // recorded position, matching the on-screen anchor.
        let baseline_y = self.position.y + self.size * 0.35;
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{baseline_y}\" font-size=\"{}\" \
             text-anchor=\"middle\" font-family=\"sans-serif\">{escaped}</text>",
            self.position.x, self.size,
        );
    }
}
