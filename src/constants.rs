//! Global constants for the Seam editor

pub mod defaults {
    /// Size of the document arena, in bytes
    pub const BUFFER_CAPACITY: usize = 8 * 1024 * 1024;

    /// Tab stops are every 8 display columns
    pub const TAB_STOP: usize = 8;

    /// Smallest terminal the editor can operate in
    pub const MIN_ROWS: u16 = 2;
    pub const MIN_COLS: u16 = 16;
}

pub mod ui {
    /// Display text for documents with no file path
    pub const NO_NAME: &str = "[No Name]";

    /// Marker appended to the filename when there are unsaved changes
    pub const DIRTY_MARKER: &str = "*";

    /// Modeline prefix, also used by the filename prompt
    pub const STATUS_PREFIX: &str = "seam: ";
}

pub mod errors {
    // Error codes
    pub const ZERO_CAPACITY: &str = "ZERO_CAPACITY";
    pub const TERMINAL_TOO_SMALL: &str = "TERMINAL_TOO_SMALL";
    pub const TERMINAL_FAILED: &str = "TERMINAL_FAILED";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const NO_PATH: &str = "NO_PATH";
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";

    // Status messages
    pub const MSG_SAVE_OK: &str = "save ok";
    pub const MSG_NO_FILENAME: &str = "no filename";
    pub const MSG_FAILED_OPEN: &str = "failed open";
    pub const MSG_READ_FAILED: &str = "could not read file";
}
