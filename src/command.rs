//! Command dispatch and keybindings
//! Translates keys into editor commands

use crate::key::Key;

/// Editor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Editing
    InsertByte(u8),
    DeleteBackward,

    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Control
    Save,
    Quit,
    Redraw,
    Noop,
}

/// Command dispatcher state
///
/// Escape starts a two-key sequence: `Esc q` quits, `Esc s` saves. Any other
/// follow-up key cancels the sequence.
#[derive(Debug)]
pub struct Dispatcher {
    pending_escape: bool,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            pending_escape: false,
        }
    }

    /// Translate a key into a command
    pub fn translate_key(&mut self, key: Key) -> Command {
        if self.pending_escape {
            self.pending_escape = false;
            return match key {
                Key::Char(b'q') => Command::Quit,
                Key::Char(b's') => Command::Save,
                _ => Command::Noop,
            };
        }

        match key {
            Key::Escape => {
                self.pending_escape = true;
                Command::Noop
            }
            Key::Char(byte) if (0x20..0x7f).contains(&byte) => Command::InsertByte(byte),
            Key::Tab => Command::InsertByte(b'\t'),
            Key::Enter => Command::InsertByte(b'\n'),
            Key::Backspace | Key::Delete => Command::DeleteBackward,
            Key::ArrowLeft => Command::MoveLeft,
            Key::ArrowRight => Command::MoveRight,
            Key::ArrowUp => Command::MoveUp,
            Key::ArrowDown => Command::MoveDown,
            // WordStar-style movement diamond
            Key::Ctrl(b's') => Command::MoveLeft,
            Key::Ctrl(b'd') => Command::MoveRight,
            Key::Ctrl(b'e') => Command::MoveUp,
            Key::Ctrl(b'x') => Command::MoveDown,
            Key::Ctrl(b'l') => Command::Redraw,
            Key::Resize(..) => Command::Redraw,
            _ => Command::Noop,
        }
    }

    /// True while the dispatcher is waiting for the second key of a sequence
    pub fn pending_escape(&self) -> bool {
        self.pending_escape
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
