use egui::Pos2;
use sketchpad::{
    CommandHistory, Drawable, InputController, PointerInput, Preview, ToolState,
};

struct Session {
    controller: InputController,
    tools: ToolState,
    history: CommandHistory,
    preview: Option<Preview>,
}

impl Session {
    fn new() -> Self {
        Self {
            controller: InputController::new(),
            tools: ToolState::default(),
            history: CommandHistory::new(),
            preview: None,
        }
    }

    fn send(&mut self, input: PointerInput) -> bool {
        self.controller
            .handle(input, &self.tools, &mut self.history, &mut self.preview)
    }
}

fn pos(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

#[test]
fn press_commits_a_stroke_immediately() {
    let mut session = Session::new();

    assert!(session.send(PointerInput::Pressed(pos(10.0, 10.0))));
    assert!(session.controller.is_drawing());

    // Visible while still growing: the stroke is already in the snapshot.
    let [Drawable::Stroke(stroke)] = session.history.snapshot() else {
        panic!("expected one stroke");
    };
    assert_eq!(stroke.points(), &[pos(10.0, 10.0)]);
}

#[test]
fn moves_grow_the_stroke_until_release() {
    let mut session = Session::new();
    session.send(PointerInput::Pressed(pos(0.0, 0.0)));
    session.send(PointerInput::Moved(pos(5.0, 5.0)));
    session.send(PointerInput::Moved(pos(10.0, 10.0)));
    session.send(PointerInput::Released(pos(10.0, 10.0)));

    let [Drawable::Stroke(stroke)] = session.history.snapshot() else {
        panic!("expected one stroke");
    };
    assert_eq!(
        stroke.points(),
        &[pos(0.0, 0.0), pos(5.0, 5.0), pos(10.0, 10.0)]
    );

    // After release, hovering updates the preview, not the stroke.
    assert!(!session.controller.is_drawing());
    session.send(PointerInput::Moved(pos(99.0, 99.0)));
    let [Drawable::Stroke(stroke)] = session.history.snapshot() else {
        panic!("expected one stroke");
    };
    assert_eq!(stroke.points().len(), 3);
    assert!(session.preview.is_some());
}

#[test]
fn tap_without_movement_leaves_a_dot() {
    let mut session = Session::new();
    session.send(PointerInput::Pressed(pos(30.0, 30.0)));
    session.send(PointerInput::Released(pos(30.0, 30.0)));

    let [Drawable::Stroke(stroke)] = session.history.snapshot() else {
        panic!("expected one stroke");
    };
    assert_eq!(stroke.points(), &[pos(30.0, 30.0)]);
    assert!(!session.controller.is_drawing());
}

#[test]
fn tap_places_a_sticker_without_movement() {
    let mut session = Session::new();
    session.tools.select_sticker(1);

    session.send(PointerInput::Pressed(pos(70.0, 40.0)));
    session.send(PointerInput::Released(pos(70.0, 40.0)));

    let [Drawable::Sticker(sticker)] = session.history.snapshot() else {
        panic!("expected one sticker");
    };
    assert_eq!(sticker.position(), pos(70.0, 40.0));
}

#[test]
fn stationary_moves_do_not_grow_the_stroke() {
    let mut session = Session::new();
    session.send(PointerInput::Pressed(pos(10.0, 10.0)));
    session.send(PointerInput::Moved(pos(15.0, 10.0)));

    // Holding the button still reports a move per frame at the same spot.
    assert!(!session.send(PointerInput::Moved(pos(15.0, 10.0))));
    assert!(!session.send(PointerInput::Moved(pos(15.0, 10.0))));

    let [Drawable::Stroke(stroke)] = session.history.snapshot() else {
        panic!("expected one stroke");
    };
    assert_eq!(stroke.points(), &[pos(10.0, 10.0), pos(15.0, 10.0)]);
}

#[test]
fn stationary_moves_do_not_redrag_the_sticker() {
    let mut session = Session::new();
    session.tools.select_sticker(0);
    session.send(PointerInput::Pressed(pos(20.0, 20.0)));
    session.send(PointerInput::Moved(pos(25.0, 25.0)));

    assert!(!session.send(PointerInput::Moved(pos(25.0, 25.0))));
}

#[test]
fn committed_strokes_capture_style_at_creation() {
    let mut session = Session::new();
    session.send(PointerInput::Pressed(pos(0.0, 0.0)));
    session.send(PointerInput::Released(pos(0.0, 0.0)));

    let old_width = session.tools.width();
    session.tools.increase_width();
    session.tools.increase_width();

    let [Drawable::Stroke(stroke)] = session.history.snapshot() else {
        panic!("expected one stroke");
    };
    assert_eq!(stroke.width(), old_width);
}

#[test]
fn sticker_drags_to_place_and_fixes_on_release() {
    let mut session = Session::new();
    session.tools.select_sticker(0);

    session.send(PointerInput::Pressed(pos(20.0, 20.0)));
    session.send(PointerInput::Moved(pos(40.0, 60.0)));
    session.send(PointerInput::Released(pos(40.0, 60.0)));

    let [Drawable::Sticker(sticker)] = session.history.snapshot() else {
        panic!("expected one sticker");
    };
    assert_eq!(sticker.position(), pos(40.0, 60.0));

    // Fixed after placement: idle moves no longer touch it.
    session.send(PointerInput::Moved(pos(100.0, 100.0)));
    let [Drawable::Sticker(sticker)] = session.history.snapshot() else {
        panic!("expected one sticker");
    };
    assert_eq!(sticker.position(), pos(40.0, 60.0));
}

#[test]
fn sticker_press_with_no_selection_is_a_noop() {
    let mut session = Session::new();
    // Selecting the active glyph twice leaves the sticker tool with no
    // glyph selected.
    session.tools.select_sticker(0);
    session.tools.select_sticker(0);
    assert!(session.tools.selected_glyph().is_none());

    let changed = session.send(PointerInput::Pressed(pos(20.0, 20.0)));

    assert!(!changed);
    assert!(!session.controller.is_drawing());
    assert!(session.history.snapshot().is_empty());

    // And hovering previews nothing either.
    session.send(PointerInput::Moved(pos(5.0, 5.0)));
    assert!(session.preview.is_none());
}

#[test]
fn press_discards_the_preview() {
    let mut session = Session::new();
    session.send(PointerInput::Moved(pos(5.0, 5.0)));
    assert!(matches!(session.preview, Some(Preview::Ring { .. })));

    session.send(PointerInput::Pressed(pos(5.0, 5.0)));
    assert!(session.preview.is_none());
}

#[test]
fn leaving_the_canvas_clears_preview_and_finalizes() {
    let mut session = Session::new();
    session.send(PointerInput::Moved(pos(5.0, 5.0)));
    assert!(session.preview.is_some());
    session.send(PointerInput::Left);
    assert!(session.preview.is_none());

    session.send(PointerInput::Pressed(pos(0.0, 0.0)));
    session.send(PointerInput::Left);
    assert!(!session.controller.is_drawing());
    assert_eq!(session.history.snapshot().len(), 1);
}

#[test]
fn sticker_preview_shows_selected_glyph_at_current_size() {
    let mut session = Session::new();
    session.tools.select_sticker(2);

    session.send(PointerInput::Moved(pos(30.0, 30.0)));
    let Some(Preview::Glyph { glyph, size, .. }) = &session.preview else {
        panic!("expected glyph preview");
    };
    assert_eq!(glyph, session.tools.selected_glyph().unwrap());
    assert_eq!(*size, session.tools.sticker_size());
}

#[test]
fn drawing_after_undo_discards_redo_through_the_controller() {
    let mut session = Session::new();
    session.send(PointerInput::Pressed(pos(0.0, 0.0)));
    session.send(PointerInput::Released(pos(0.0, 0.0)));
    session.send(PointerInput::Pressed(pos(10.0, 0.0)));
    session.send(PointerInput::Released(pos(10.0, 0.0)));

    session.history.undo();
    assert!(session.history.can_redo());

    session.send(PointerInput::Pressed(pos(20.0, 0.0)));
    assert!(!session.history.can_redo());
}
