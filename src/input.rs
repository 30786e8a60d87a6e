use egui::Pos2;
use log::debug;

use crate::element::{Drawable, Sticker, Stroke};
use crate::history::CommandHistory;
use crate::preview::Preview;
use crate::tools::{Tool, ToolState};

/// A pointer event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Primary button pressed at the given position.
    Pressed(Pos2),
    /// Pointer moved while over the canvas.
    Moved(Pos2),
    /// Primary button released at the given position.
    Released(Pos2),
    /// Pointer left the canvas.
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Drawing,
}

/// Maps pointer events onto history mutations and preview updates.
///
/// Two states: `Idle` (hovering, preview follows the pointer) and `Drawing`
/// (a drawable was committed on press and grows or drags until release).
/// The drawable is committed the moment the button goes down so it renders
/// while still being drawn; undo can only run once the pointer is up again,
/// so the growing element is never pulled out from underneath.
#[derive(Debug, Default)]
pub struct InputController {
    phase: Phase,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.phase == Phase::Drawing
    }

    /// Feed one pointer event through the state machine. Returns `true`
    /// when history or preview changed and a repaint is needed.
    pub fn handle(
        &mut self,
        input: PointerInput,
        tools: &ToolState,
        history: &mut CommandHistory,
        preview: &mut Option<Preview>,
    ) -> bool {
        match (self.phase, input) {
            (Phase::Idle, PointerInput::Pressed(pos)) => {
                // The preview dies the instant a draw action starts.
                *preview = None;
                let Some(drawable) = new_drawable(tools, pos) else {
                    // Sticker tool with no sticker selected: defined no-op.
                    return false;
                };
                debug!("begin {} at {pos:?}", drawable.kind());
                history.commit(drawable);
                self.phase = Phase::Drawing;
                true
            }

            (Phase::Drawing, PointerInput::Moved(pos)) => match history.last_mut() {
                // A stationary pointer reports a move every frame; appending
                // those would grow the stroke with duplicate points and force
                // a repaint per frame.
                Some(Drawable::Stroke(stroke)) => {
                    if stroke.points().last() == Some(&pos) {
                        return false;
                    }
                    stroke.push_point(pos);
                    true
                }
                // Drag-to-place: the sticker follows the pointer until the
                // button is released.
                Some(Drawable::Sticker(sticker)) => {
                    if sticker.position() == pos {
                        return false;
                    }
                    sticker.set_position(pos);
                    true
                }
                None => false,
            },

            (Phase::Drawing, PointerInput::Released(pos)) => {
                self.phase = Phase::Idle;
                *preview = Preview::for_tool(tools, pos);
                true
            }

            // Leaving the canvas mid-draw finalizes the drawable.
            (Phase::Drawing, PointerInput::Left) => {
                self.phase = Phase::Idle;
                *preview = None;
                true
            }

            (Phase::Idle, PointerInput::Moved(pos)) => {
                let next = Preview::for_tool(tools, pos);
                if *preview == next {
                    return false;
                }
                *preview = next;
                true
            }

            (Phase::Idle, PointerInput::Left) => {
                if preview.is_none() {
                    return false;
                }
                *preview = None;
                true
            }

            // Stray events for the current phase (e.g. a release that began
            // outside the canvas) change nothing.
            (Phase::Idle, PointerInput::Released(_)) | (Phase::Drawing, PointerInput::Pressed(_)) => {
                false
            }
        }
    }
}

/// Construct the drawable for a press with the current tool state. Each
/// drawable captures its own width/color/size here, at creation time.
fn new_drawable(tools: &ToolState, pos: Pos2) -> Option<Drawable> {
    match tools.tool() {
        Tool::Pen => Some(Drawable::Stroke(Stroke::new(
            pos,
            tools.width(),
            tools.color(),
        ))),
        Tool::Sticker => tools
            .selected_glyph()
            .map(|glyph| Drawable::Sticker(Sticker::new(glyph, pos, tools.sticker_size()))),
    }
}
