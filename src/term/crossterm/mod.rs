//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, terminal,
    terminal::ClearType,
};
use std::io::{stdout, Write};

use crate::key::Key;
use crate::term::{Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self, String> {
        Ok(CrosstermBackend {
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<(), String> {
        // Enable alternate screen buffer (prevents scrolling in main buffer)
        execute!(stdout(), terminal::EnterAlternateScreen)
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        self.alternate_screen_enabled = true;

        // Enable raw mode
        terminal::enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        self.raw_mode_enabled = true;

        Ok(())
    }

    fn deinit(&mut self) {
        // Show cursor before exiting
        let _ = execute!(stdout(), cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        // Exit alternate screen buffer
        if self.alternate_screen_enabled {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn read_key(&mut self) -> Result<Key, String> {
        loop {
            match event::read().map_err(|e| format!("Failed to read event: {e}"))? {
                Event::Key(key_event) => {
                    if key_event.kind != event::KeyEventKind::Press {
                        // Ignore key releases
                        continue;
                    }
                    if let Some(key) = translate_key_event(key_event) {
                        return Ok(key);
                    }
                }
                Event::Resize(cols, rows) => return Ok(Key::Resize(rows, cols)),
                _ => {
                    // Ignore other events
                }
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), String> {
        stdout()
            .write_all(bytes)
            .map_err(|e| format!("Write failed: {e}"))?;
        stdout().flush().map_err(|e| format!("Flush failed: {e}"))?;
        Ok(())
    }

    fn get_size(&self) -> Result<Size, String> {
        let (cols, rows) =
            terminal::size().map_err(|e| format!("Failed to get terminal size: {e}"))?;
        Ok(Size { rows, cols })
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        execute!(stdout(), terminal::Clear(ClearType::All))
            .map_err(|e| format!("Failed to clear screen: {e}"))?;
        execute!(stdout(), cursor::MoveTo(0, 0))
            .map_err(|e| format!("Failed to move cursor: {e}"))?;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        execute!(stdout(), cursor::MoveTo(col, row))
            .map_err(|e| format!("Failed to move cursor: {e}"))?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        execute!(stdout(), cursor::Hide).map_err(|e| format!("Failed to hide cursor: {e}"))?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        execute!(stdout(), cursor::Show).map_err(|e| format!("Failed to show cursor: {e}"))?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        self.deinit();
    }
}

/// Translate a crossterm `KeyEvent` to our Key enum
///
/// The document model is byte-oriented, so non-ASCII characters are dropped
/// here rather than mangled into bytes.
fn translate_key_event(key_event: KeyEvent) -> Option<Key> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char(ch) => {
            // Some terminals deliver Enter as a bare '\r' or '\n'
            if ch == '\r' || ch == '\n' {
                return Some(Key::Enter);
            }
            if !ch.is_ascii() {
                return None;
            }
            if ctrl {
                Some(Key::Ctrl(ch.to_ascii_lowercase() as u8))
            } else {
                Some(Key::Char(ch as u8))
            }
        }
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}
