#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod render;
pub mod tools;

pub use app::SketchApp;
pub use element::{Drawable, Sticker, Stroke};
pub use error::ExportError;
pub use history::CommandHistory;
pub use input::{InputController, PointerInput};
pub use preview::Preview;
pub use tools::{Tool, ToolState};

/// Logical canvas size in points. The canvas is square.
pub const CANVAS_SIZE: f32 = 256.0;
