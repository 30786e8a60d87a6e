use crate::tools::Tool;
use crate::SketchApp;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            let is_pen = app.tools().tool() == Tool::Pen;
            if ui.selectable_label(is_pen, "pen").clicked() {
                app.tools_mut().select_pen();
            }

            // One button per palette glyph; clicking selects the sticker tool.
            let selected = app.tools().selected_sticker();
            let glyphs: Vec<String> = app.tools().palette().to_vec();
            ui.horizontal_wrapped(|ui| {
                for (index, glyph) in glyphs.iter().enumerate() {
                    if ui.selectable_label(selected == Some(index), glyph).clicked() {
                        app.tools_mut().select_sticker(index);
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    app.tools_mut().color_mut(),
                    egui::color_picker::Alpha::Opaque,
                );
            });

            ui.horizontal(|ui| {
                if ui.button("-").clicked() {
                    app.tools_mut().decrease_width();
                }
                ui.label(format!("width {}", app.tools().width()));
                if ui.button("+").clicked() {
                    app.tools_mut().increase_width();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.history().can_undo();
                let can_redo = app.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("redo")).clicked() {
                    app.redo();
                }
            });

            if ui.button("clear").clicked() {
                app.clear_canvas();
            }

            ui.separator();

            ui.text_edit_singleline(app.import_text_mut());
            if ui.button("Import your emoji!").clicked() {
                app.import_glyphs();
            }

            ui.separator();

            if ui.button("export").clicked() {
                app.export_png();
            }
        });
}
