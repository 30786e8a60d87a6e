use std::path::Path;

use egui::{Key, KeyboardShortcut, Modifiers};
use log::{error, info};

use crate::export::{self, ExportConfig, EXPORT_FILE_NAME};
use crate::history::CommandHistory;
use crate::input::{InputController, PointerInput};
use crate::panels;
use crate::preview::Preview;
use crate::tools::ToolState;
use crate::CANVAS_SIZE;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Tool preferences survive restarts through eframe storage; the drawing
/// itself is session-only.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchApp {
    tools: ToolState,
    #[serde(skip)]
    history: CommandHistory,
    #[serde(skip)]
    controller: InputController,
    #[serde(skip)]
    preview: Option<Preview>,
    #[serde(skip)]
    import_text: String,
    #[serde(skip)]
    status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            tools: ToolState::default(),
            history: CommandHistory::new(),
            controller: InputController::new(),
            preview: None,
            import_text: String::new(),
            status: None,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn import_text_mut(&mut self) -> &mut String {
        &mut self.import_text
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Feed one canvas pointer event through the input controller. Returns
    /// `true` when a repaint is needed.
    pub fn pointer_event(&mut self, input: PointerInput) -> bool {
        self.controller
            .handle(input, &self.tools, &mut self.history, &mut self.preview)
    }

    pub fn undo(&mut self) {
        if !self.controller.is_drawing() {
            self.history.undo();
        }
    }

    pub fn redo(&mut self) {
        if !self.controller.is_drawing() {
            self.history.redo();
        }
    }

    pub fn clear_canvas(&mut self) {
        if !self.controller.is_drawing() {
            self.history.clear();
        }
    }

    /// Parse the import field into sticker glyphs. Empty input adds none.
    pub fn import_glyphs(&mut self) {
        let input = std::mem::take(&mut self.import_text);
        let added = self.tools.import_glyphs(&input);
        info!("imported {added} sticker glyph(s)");
        if added > 0 {
            self.tools.select_sticker(self.tools.palette().len() - 1);
        }
    }

    /// Replay the drawing at 4x scale and write it to the working directory.
    pub fn export_png(&mut self) {
        let config = ExportConfig::new(CANVAS_SIZE);
        match export::save_png(self.history.snapshot(), &config, Path::new(EXPORT_FILE_NAME)) {
            Ok(()) => {
                let (w, h) = config.output_dimensions();
                info!("exported {EXPORT_FILE_NAME} at {w}x{h}");
                self.status = Some(format!("exported {EXPORT_FILE_NAME} ({w}x{h})"));
            }
            Err(err) => {
                error!("export failed: {err}");
                self.status = Some(format!("export failed: {err}"));
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Check redo first: its chord is a superset of the undo chord.
        if ctx.input_mut(|i| {
            i.consume_shortcut(&REDO_SHORTCUT) || i.consume_shortcut(&REDO_SHORTCUT_ALT)
        }) {
            self.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
