use egui::Color32;
use serde::{Deserialize, Serialize};

/// Default stroke width in points, matching the classic pen.
pub const DEFAULT_WIDTH: f32 = 4.0;
pub const MIN_WIDTH: f32 = 1.0;
pub const MAX_WIDTH: f32 = 16.0;
const WIDTH_STEP: f32 = 1.0;

/// Sticker size is derived from the stroke width so the same "-"/"+"
/// controls size both tools. Width 4 gives a 32px glyph.
const STICKER_SCALE: f32 = 8.0;

/// Glyphs available before the user imports any.
pub const DEFAULT_STICKERS: [&str; 3] = ["😀", "🎉", "⭐"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Pen,
    Sticker,
}

/// The current tool selection and style settings.
///
/// Mutated only by the UI controls; read when a new drawable is constructed.
/// Every drawable copies the values it needs at creation time, so edits here
/// never restyle committed content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolState {
    tool: Tool,
    width: f32,
    color: Color32,
    palette: Vec<String>,
    selected_sticker: Option<usize>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            width: DEFAULT_WIDTH,
            color: Color32::BLACK,
            palette: DEFAULT_STICKERS.iter().map(|s| s.to_string()).collect(),
            selected_sticker: None,
        }
    }
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn color_mut(&mut self) -> &mut Color32 {
        &mut self.color
    }

    pub fn sticker_size(&self) -> f32 {
        self.width * STICKER_SCALE
    }

    pub fn increase_width(&mut self) {
        self.width = (self.width + WIDTH_STEP).min(MAX_WIDTH);
    }

    pub fn decrease_width(&mut self) {
        self.width = (self.width - WIDTH_STEP).max(MIN_WIDTH);
    }

    pub fn select_pen(&mut self) {
        self.tool = Tool::Pen;
    }

    /// Select a sticker from the palette; this also switches to the sticker
    /// tool. Clicking the already-active glyph deselects it (placement then
    /// becomes a no-op until another glyph is picked). Out-of-range indices
    /// are ignored.
    pub fn select_sticker(&mut self, index: usize) {
        if index >= self.palette.len() {
            return;
        }
        if self.tool == Tool::Sticker && self.selected_sticker == Some(index) {
            self.selected_sticker = None;
        } else {
            self.tool = Tool::Sticker;
            self.selected_sticker = Some(index);
        }
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn selected_sticker(&self) -> Option<usize> {
        match self.tool {
            Tool::Sticker => self.selected_sticker,
            Tool::Pen => None,
        }
    }

    /// The glyph a new sticker would use, if one is selected.
    pub fn selected_glyph(&self) -> Option<&str> {
        self.selected_sticker
            .and_then(|i| self.palette.get(i))
            .map(String::as_str)
    }

    /// Split raw text into glyph tokens and append them to the palette.
    /// Returns how many were added; empty or all-delimiter input adds none.
    pub fn import_glyphs(&mut self, input: &str) -> usize {
        let glyphs = parse_glyphs(input);
        let added = glyphs.len();
        self.palette.extend(glyphs);
        added
    }
}

/// Split raw prompt text on whitespace and punctuation into glyph tokens.
fn parse_glyphs(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
