//! Key representation for editor input

/// Represents a key press event
///
/// The editor's document model is byte-oriented, so printable keys carry a
/// single ASCII byte. Non-ASCII input is dropped at the backend boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable ASCII character
    Char(u8),
    /// Control key combination (e.g., Ctrl+E)
    Ctrl(u8),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    /// System events
    Resize(u16, u16),
}
