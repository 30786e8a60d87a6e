use egui::{Color32, Painter, Rect, Stroke as EguiStroke};

use crate::element::Drawable;
use crate::preview::Preview;

/// Full-redraw replay: clear the canvas, draw every committed drawable in
/// order, then the preview on top. The history is small enough that
/// replaying it every frame is fine; there is no dirty-rect tracking.
pub fn paint_scene(
    painter: &Painter,
    canvas_rect: Rect,
    drawables: &[Drawable],
    preview: Option<&Preview>,
) {
    let painter = painter.with_clip_rect(canvas_rect);
    painter.rect_filled(canvas_rect, 4.0, Color32::WHITE);

    let offset = canvas_rect.min.to_vec2();
    for drawable in drawables {
        drawable.draw(&painter, offset);
    }

    if let Some(preview) = preview {
        preview.draw(&painter, offset);
    }

    painter.rect_stroke(canvas_rect, 4.0, EguiStroke::new(1.0, Color32::DARK_GRAY));
}
