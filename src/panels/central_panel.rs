use egui::{Pos2, Rect, Response, Sense, Vec2};

use crate::input::PointerInput;
use crate::render;
use crate::{SketchApp, CANVAS_SIZE};

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketchpad");

        // Drag-only sensing starts the gesture on the press itself; sensing
        // clicks as well would hold it back until egui's drag threshold and
        // drop quick taps.
        let (response, painter) = ui.allocate_painter(Vec2::splat(CANVAS_SIZE), Sense::drag());
        let canvas_rect = response.rect;

        let mut repaint = false;
        for event in pointer_events(&response, canvas_rect) {
            repaint |= app.pointer_event(event);
        }
        if repaint {
            ctx.request_repaint();
        }

        render::paint_scene(
            &painter,
            canvas_rect,
            app.history().snapshot(),
            app.preview(),
        );

        if let Some(status) = app.status() {
            ui.label(status);
        }
    });
}

/// Translate this frame's egui pointer state into canvas-local events.
fn pointer_events(response: &Response, canvas_rect: Rect) -> Vec<PointerInput> {
    let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

    if response.drag_started() {
        return match response.interact_pointer_pos() {
            Some(pos) => vec![PointerInput::Pressed(to_local(pos))],
            None => Vec::new(),
        };
    }

    if response.dragged() {
        return match response.interact_pointer_pos() {
            Some(pos) => vec![PointerInput::Moved(to_local(pos))],
            None => Vec::new(),
        };
    }

    if response.drag_stopped() {
        return match response.interact_pointer_pos().or_else(|| response.hover_pos()) {
            Some(pos) => vec![PointerInput::Released(to_local(pos))],
            None => vec![PointerInput::Left],
        };
    }

    match response.hover_pos() {
        Some(pos) => vec![PointerInput::Moved(to_local(pos))],
        None => vec![PointerInput::Left],
    }
}
