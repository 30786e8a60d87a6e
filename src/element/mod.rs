use egui::{Painter, Vec2};

pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::Sticker;
pub use stroke::Stroke;

/// A unit of renderable content with its style captured at creation time.
///
/// Dispatch is a plain `match` on the variant; there is no trait-object
/// hierarchy behind this. Every drawable can paint itself onto an egui
/// painter and write itself as an SVG fragment for export.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    /// Paint the drawable. `offset` maps canvas-local coordinates to the
    /// screen position of the canvas.
    pub fn draw(&self, painter: &Painter, offset: Vec2) {
        match self {
            Drawable::Stroke(stroke) => stroke.draw(painter, offset),
            Drawable::Sticker(sticker) => sticker.draw(painter, offset),
        }
    }

    /// Append this drawable as an SVG fragment, for the export replay.
    pub fn write_svg(&self, svg: &mut String) {
        match self {
            Drawable::Stroke(stroke) => stroke.write_svg(svg),
            Drawable::Sticker(sticker) => sticker.write_svg(svg),
        }
    }
}

/// Format a color as a CSS hex literal for SVG attributes.
pub(crate) fn css_color(color: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Escape special XML characters in glyph text.
pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
