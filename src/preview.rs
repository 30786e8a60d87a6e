use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke as EguiStroke, Vec2};

use crate::tools::{Tool, ToolState};

/// The transient drawable shown under the hovering pointer: a ring sized to
/// the current stroke width, or the selected sticker glyph at its current
/// size.
///
/// The preview is never part of history. It is recomputed on every hover
/// move and discarded the instant a draw action starts or the pointer
/// leaves the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Ring {
        position: Pos2,
        width: f32,
        color: Color32,
    },
    Glyph {
        glyph: String,
        position: Pos2,
        size: f32,
    },
}

impl Preview {
    /// Build the preview for the current tool at the hovered position.
    /// Sticker tool with nothing selected previews nothing.
    pub fn for_tool(tools: &ToolState, position: Pos2) -> Option<Self> {
        match tools.tool() {
            Tool::Pen => Some(Preview::Ring {
                position,
                width: tools.width(),
                color: tools.color(),
            }),
            Tool::Sticker => tools.selected_glyph().map(|glyph| Preview::Glyph {
                glyph: glyph.to_string(),
                position,
                size: tools.sticker_size(),
            }),
        }
    }

    pub fn draw(&self, painter: &Painter, offset: Vec2) {
        match self {
            Preview::Ring {
                position,
                width,
                color,
            } => {
                painter.circle_stroke(
                    *position + offset,
                    width / 2.0,
                    EguiStroke::new(1.0, *color),
                );
            }
            Preview::Glyph {
                glyph,
                position,
                size,
            } => {
                painter.text(
                    *position + offset,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(*size),
                    Color32::from_black_alpha(160),
                );
            }
        }
    }
}
