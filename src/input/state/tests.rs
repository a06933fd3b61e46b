use super::*;
use crate::draw::{BLACK, Drawable, Ghost, WHITE};
use crate::input::{Key, PointerButton, Tool};

fn create_test_state() -> SketchState {
    SketchState::with_defaults(
        BLACK, // ink
        WHITE, // background
        1.0,   // thin_width
        5.0,   // thick_width
        16.0,  // sticker_size
        vec![("🔥".to_string(), 16.0), ("⭐".to_string(), 24.0)],
    )
}

#[test]
fn idle_motion_creates_and_moves_marker_ghost() {
    let mut state = create_test_state();
    assert!(state.ghost.is_none());

    state.on_pointer_motion(10.0, 10.0);
    assert_eq!(
        state.ghost,
        Some(Ghost::Marker {
            x: 10.0,
            y: 10.0,
            width: 1.0
        })
    );
    assert!(state.needs_redraw);

    state.on_pointer_motion(30.0, 40.0);
    assert_eq!(state.ghost.as_ref().unwrap().position(), (30.0, 40.0));
}

#[test]
fn tool_switch_replaces_ghost_and_sticker_press_keeps_it() {
    let mut state = create_test_state();
    state.on_pointer_motion(10.0, 10.0);

    // Switch to the first palette sticker; the ghost becomes a glyph ghost.
    state.on_key_press(Key::Char('3'));
    assert_eq!(
        state.tool,
        Tool::Sticker {
            glyph: "🔥".to_string(),
            size: 16.0
        }
    );
    assert_eq!(
        state.ghost,
        Some(Ghost::Sticker {
            x: 10.0,
            y: 10.0,
            glyph: "🔥".to_string(),
            size: 16.0
        })
    );

    // Placing a sticker commits it without altering the ghost.
    let ghost_before = state.ghost.clone();
    state.on_pointer_press(PointerButton::Left, 20.0, 20.0);
    assert!(matches!(state.state, PointerState::Idle));
    assert_eq!(
        state.history.committed(),
        &[Drawable::Sticker {
            glyph: "🔥".to_string(),
            x: 20.0,
            y: 20.0,
            size: 16.0
        }]
    );
    assert_eq!(state.ghost, ghost_before);
}

#[test]
fn palette_sticker_carries_its_own_size() {
    let mut state = create_test_state();
    state.on_key_press(Key::Char('4'));
    assert_eq!(
        state.tool,
        Tool::Sticker {
            glyph: "⭐".to_string(),
            size: 24.0
        }
    );
}

#[test]
fn out_of_range_sticker_key_is_ignored() {
    let mut state = create_test_state();
    let tool_before = state.tool.clone();
    state.on_key_press(Key::Char('9'));
    assert_eq!(state.tool, tool_before);
}

#[test]
fn marker_drag_commits_then_appends_then_freezes() {
    let mut state = create_test_state();

    state.on_pointer_press(PointerButton::Left, 0.0, 0.0);
    assert!(matches!(state.state, PointerState::Drawing));
    // Committed immediately, visible in history even as a single point.
    assert_eq!(state.history.committed().len(), 1);

    state.on_pointer_motion(5.0, 5.0);
    state.on_pointer_motion(10.0, 10.0);
    match state.history.committed().last() {
        Some(Drawable::Stroke { points, width, .. }) => {
            assert_eq!(points.as_slice(), &[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
            assert_eq!(*width, 1.0);
        }
        other => panic!("expected stroke, got {:?}", other),
    }

    state.on_pointer_release(PointerButton::Left, 10.0, 10.0);
    assert!(matches!(state.state, PointerState::Idle));

    // Motion after release moves the ghost, not the frozen stroke.
    state.on_pointer_motion(50.0, 50.0);
    match state.history.committed().last() {
        Some(Drawable::Stroke { points, .. }) => assert_eq!(points.len(), 3),
        other => panic!("expected stroke, got {:?}", other),
    }
    assert_eq!(state.ghost.as_ref().unwrap().position(), (50.0, 50.0));
}

#[test]
fn thick_marker_uses_preset_width() {
    let mut state = create_test_state();
    state.on_key_press(Key::Char('2'));
    state.on_pointer_press(PointerButton::Left, 0.0, 0.0);
    match state.history.committed().last() {
        Some(Drawable::Stroke { width, .. }) => assert_eq!(*width, 5.0),
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn history_commands_are_ignored_mid_stroke() {
    let mut state = create_test_state();
    state.on_pointer_press(PointerButton::Left, 0.0, 0.0);
    state.on_pointer_motion(5.0, 5.0);

    state.on_key_press(Key::Char('z'));
    assert_eq!(state.history.committed().len(), 1);

    state.on_key_press(Key::Char('e'));
    assert_eq!(state.history.committed().len(), 1);

    // Still appending to the same stroke afterwards.
    state.on_pointer_motion(6.0, 6.0);
    match state.history.committed().last() {
        Some(Drawable::Stroke { points, .. }) => assert_eq!(points.len(), 3),
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn undo_redo_keys_walk_the_history() {
    let mut state = create_test_state();

    state.on_pointer_press(PointerButton::Left, 0.0, 0.0);
    state.on_pointer_release(PointerButton::Left, 0.0, 0.0);
    state.on_key_press(Key::Char('3'));
    state.on_pointer_press(PointerButton::Left, 20.0, 20.0);
    assert_eq!(state.history.committed().len(), 2);

    state.on_key_press(Key::Char('z'));
    assert_eq!(state.history.committed().len(), 1);
    assert_eq!(state.history.redo_depth(), 1);

    state.on_key_press(Key::Char('y'));
    assert_eq!(state.history.committed().len(), 2);
    assert_eq!(state.history.redo_depth(), 0);
}

#[test]
fn new_stroke_discards_redo_buffer() {
    let mut state = create_test_state();

    state.on_pointer_press(PointerButton::Left, 0.0, 0.0);
    state.on_pointer_release(PointerButton::Left, 0.0, 0.0);
    state.on_key_press(Key::Char('z'));
    assert_eq!(state.history.redo_depth(), 1);

    state.on_pointer_press(PointerButton::Left, 1.0, 1.0);
    assert_eq!(state.history.redo_depth(), 0);
    state.on_pointer_release(PointerButton::Left, 1.0, 1.0);

    state.on_key_press(Key::Char('y'));
    assert_eq!(state.history.committed().len(), 1);
}

#[test]
fn clear_empties_canvas_and_redo_buffer() {
    let mut state = create_test_state();

    state.on_pointer_press(PointerButton::Left, 0.0, 0.0);
    state.on_pointer_release(PointerButton::Left, 0.0, 0.0);
    state.on_pointer_press(PointerButton::Left, 5.0, 5.0);
    state.on_pointer_release(PointerButton::Left, 5.0, 5.0);
    state.on_key_press(Key::Char('z'));

    state.on_key_press(Key::Char('e'));
    assert!(state.history.is_empty());
    assert_eq!(state.history.redo_depth(), 0);

    state.on_key_press(Key::Char('z'));
    assert!(state.history.is_empty());
}

#[test]
fn glyph_entry_submits_custom_sticker() {
    let mut state = create_test_state();

    state.on_key_press(Key::Char('t'));
    assert!(state.in_glyph_entry());

    // Printable keys feed the buffer instead of triggering actions.
    state.on_key_press(Key::Char('z'));
    state.on_key_press(Key::Char('!'));
    assert!(state.history.is_empty());

    state.on_key_press(Key::Return);
    assert!(!state.in_glyph_entry());
    assert_eq!(
        state.tool,
        Tool::Sticker {
            glyph: "z!".to_string(),
            size: 16.0
        }
    );
}

#[test]
fn glyph_entry_backspace_and_escape() {
    let mut state = create_test_state();
    let tool_before = state.tool.clone();

    state.on_key_press(Key::Char('t'));
    state.on_key_press(Key::Char('a'));
    state.on_key_press(Key::Backspace);
    state.on_key_press(Key::Char('b'));
    state.on_key_press(Key::Escape);

    // Escape cancels the entry without touching the tool.
    assert!(!state.in_glyph_entry());
    assert_eq!(state.tool, tool_before);
    assert!(!state.should_exit);
}

#[test]
fn empty_custom_sticker_is_rejected() {
    let mut state = create_test_state();
    state.on_pointer_motion(10.0, 10.0);
    let tool_before = state.tool.clone();
    let ghost_before = state.ghost.clone();

    assert!(!state.select_custom_sticker(""));
    assert!(!state.select_custom_sticker("   "));
    assert_eq!(state.tool, tool_before);
    assert_eq!(state.ghost, ghost_before);

    // Submitting whitespace through the entry flow is a silent no-op too.
    state.on_key_press(Key::Char('t'));
    state.on_key_press(Key::Char(' '));
    state.on_key_press(Key::Return);
    assert_eq!(state.tool, tool_before);
}

#[test]
fn custom_sticker_trims_surrounding_whitespace() {
    let mut state = create_test_state();
    assert!(state.select_custom_sticker("  ★  "));
    assert_eq!(
        state.tool,
        Tool::Sticker {
            glyph: "★".to_string(),
            size: 16.0
        }
    );
}

#[test]
fn escape_ends_stroke_then_exits() {
    let mut state = create_test_state();

    state.on_pointer_press(PointerButton::Left, 0.0, 0.0);
    state.on_key_press(Key::Escape);
    assert!(matches!(state.state, PointerState::Idle));
    assert!(!state.should_exit);

    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn export_key_sets_pending_request() {
    let mut state = create_test_state();
    state.on_key_press(Key::Char('s'));
    assert!(state.take_pending_export());
    assert!(!state.take_pending_export());
}
