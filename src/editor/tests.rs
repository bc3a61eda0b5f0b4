use super::*;
use crate::test_utils::MockTerminal;

const CAP: usize = 1024;

fn editor() -> Editor<MockTerminal> {
    Editor::new(MockTerminal::new(24, 80), CAP, None).unwrap()
}

fn type_str(ed: &mut Editor<MockTerminal>, text: &str) {
    for byte in text.bytes() {
        ed.apply(Command::InsertByte(byte));
    }
}

#[test]
fn test_new_editor_is_clean() {
    let ed = editor();
    assert!(ed.buffer().is_empty());
    assert!(!ed.document().is_dirty(ed.buffer()));
    assert!(ed.message().is_none());
    assert!(!ed.should_quit());
    // One row is reserved for the modeline
    assert_eq!(ed.viewport().rows(), 23);
    assert_eq!(ed.viewport().cols(), 80);
}

#[test]
fn test_terminal_too_small_is_fatal() {
    let err = Editor::new(MockTerminal::new(24, 15), CAP, None).unwrap_err();
    assert_eq!(err.severity, crate::error::ErrorSeverity::Critical);
    assert!(err.contains_msg("too small"));

    let err = Editor::new(MockTerminal::new(1, 80), CAP, None).unwrap_err();
    assert!(err.contains_msg("too small"));
}

#[test]
fn test_typing_edits_buffer() {
    let mut ed = editor();
    type_str(&mut ed, "hi");
    assert_eq!(ed.buffer().to_string(), "hi");
    assert_eq!(ed.buffer().cursor(), 2);
    assert!(ed.document().is_dirty(ed.buffer()));

    ed.apply(Command::DeleteBackward);
    assert_eq!(ed.buffer().to_string(), "h");
}

#[test]
fn test_vertical_movement_preserves_column() {
    // Scenario: "ab\ncd\n" with the cursor at the start; MoveDown lands on 'c'
    let mut ed = editor();
    type_str(&mut ed, "ab\ncd\n");

    ed.apply(Command::MoveUp);
    ed.apply(Command::MoveUp);
    assert_eq!(ed.buffer().cursor(), 0);

    ed.apply(Command::MoveDown);
    assert_eq!(ed.buffer().cursor(), 3);
}

#[test]
fn test_desired_column_survives_short_lines() {
    let mut ed = editor();
    type_str(&mut ed, "abcd\nx\nefgh");
    // Cursor at the end of "efgh", column 4
    ed.apply(Command::MoveUp);
    // The "x" line only reaches column 1
    assert_eq!(ed.buffer().cursor(), 6);
    ed.apply(Command::MoveUp);
    // Back on a long line the desired column is still 4
    assert_eq!(ed.buffer().cursor(), 4);
}

#[test]
fn test_horizontal_move_reanchors_desired_column() {
    let mut ed = editor();
    type_str(&mut ed, "abcd\nefgh");
    ed.apply(Command::MoveUp);
    assert_eq!(ed.buffer().cursor(), 4);

    ed.apply(Command::MoveLeft);
    ed.apply(Command::MoveLeft);
    // Desired column re-anchored to 2 by the horizontal moves
    ed.apply(Command::MoveDown);
    assert_eq!(ed.buffer().cursor(), 7);
}

#[test]
fn test_move_clamped_at_document_edges() {
    let mut ed = editor();
    ed.apply(Command::MoveLeft);
    ed.apply(Command::MoveUp);
    assert_eq!(ed.buffer().cursor(), 0);

    type_str(&mut ed, "ab");
    ed.apply(Command::MoveRight);
    ed.apply(Command::MoveDown);
    assert_eq!(ed.buffer().cursor(), 2);
}

#[test]
fn test_save_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut ed = Editor::new(MockTerminal::new(24, 80), CAP, Some(path.clone())).unwrap();

    type_str(&mut ed, "saved text");
    ed.apply(Command::Save);

    assert_eq!(ed.message(), Some("save ok"));
    assert!(!ed.document().is_dirty(ed.buffer()));
    assert_eq!(std::fs::read(&path).unwrap(), b"saved text");
}

#[test]
fn test_save_cancelled_prompt_reports_no_filename() {
    let mut ed = editor();
    type_str(&mut ed, "x");
    ed.terminal.script_keys(&[Key::Escape]);

    ed.apply(Command::Save);

    assert_eq!(ed.message(), Some("no filename"));
    assert!(ed.document().is_dirty(ed.buffer()));
    assert!(!ed.document().has_path());
}

#[test]
fn test_prompt_filename_collects_name() {
    let mut ed = editor();
    ed.terminal.script_keys(&[
        Key::Char(b'n'),
        Key::Char(b'o'),
        Key::Char(b'/'), // rejected
        Key::Char(b't'),
        Key::Char(b'e'),
        Key::Backspace,
        Key::Char(b'e'),
        Key::Char(b'.'),
        Key::Char(b't'),
        Key::Char(b'x'),
        Key::Char(b't'),
        Key::Enter,
    ]);

    assert_eq!(ed.prompt_filename(), Some("note.txt".to_string()));
}

#[test]
fn test_prompt_filename_empty_cancels() {
    let mut ed = editor();
    ed.terminal.script_keys(&[Key::Enter]);
    assert_eq!(ed.prompt_filename(), None);
}

#[test]
fn test_load_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "from disk").unwrap();

    let ed = Editor::new(MockTerminal::new(24, 80), CAP, Some(path)).unwrap();
    assert_eq!(ed.buffer().to_string(), "from disk");
    assert!(!ed.document().is_dirty(ed.buffer()));
}

#[test]
fn test_missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let ed = Editor::new(MockTerminal::new(24, 80), CAP, Some(path)).unwrap();
    assert!(ed.buffer().is_empty());
    assert!(ed.message().is_none());
    assert_eq!(ed.document().display_name(), "new.txt");
}

#[test]
fn test_render_writes_text_and_modeline() {
    let mut ed = editor();
    type_str(&mut ed, "hello");
    ed.terminal.clear();

    ed.render().unwrap();

    let written = ed.terminal.written_string();
    assert!(written.contains("hello"));
    // Unsaved document shows the placeholder name with a dirty marker
    assert!(written.contains("[No Name]*"));
    // Text rows start below the modeline; the first text row is row 1
    assert!(ed.terminal.cursor_moves.contains(&(1, 0)));
}

#[test]
fn test_render_places_terminal_cursor() {
    let mut ed = editor();
    type_str(&mut ed, "ab\ncd");
    ed.terminal.clear();

    ed.render().unwrap();

    // Cursor at buffer offset 5 -> grid (1, 2) -> terminal row 2
    assert_eq!(ed.terminal.cursor_moves.last(), Some(&(2, 2)));
}

#[test]
fn test_redraw_clears_screen() {
    let mut ed = editor();
    ed.apply(Command::Redraw);
    assert_eq!(ed.terminal.clear_screen_calls, 1);
}

#[test]
fn test_run_loop_until_quit() {
    let mut term = MockTerminal::new(24, 80);
    term.script_keys(&[
        Key::Char(b'h'),
        Key::Char(b'i'),
        Key::Escape,
        Key::Char(b'q'),
    ]);

    let mut ed = Editor::new(term, CAP, None).unwrap();
    ed.run().unwrap();

    assert!(ed.should_quit());
    assert_eq!(ed.buffer().to_string(), "hi");
}

#[test]
fn test_full_buffer_typing_is_silent() {
    let mut ed = Editor::new(MockTerminal::new(24, 80), 4, None).unwrap();
    type_str(&mut ed, "wxyz");
    ed.apply(Command::InsertByte(b'!'));

    assert_eq!(ed.buffer().to_string(), "wxyz");
    assert!(ed.message().is_none());
}
