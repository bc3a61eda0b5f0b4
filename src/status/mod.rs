//! Status line management
//! Handles formatting and rendering of the modeline
//!
//! ## status/ Invariants
//!
//! - Status content is derived entirely from editor state.
//! - Status rendering does not influence editor behavior.
//! - The formatted line is always exactly the display width.
//! - Status never consumes input or commands.

use crate::constants::ui;
use crate::term::TerminalBackend;

/// Narrower terminals progressively drop modeline fields
const LINE_FIELD_MIN_COLS: usize = 34;
const COLUMN_FIELD_MIN_COLS: usize = 48;
const REST_FIELD_MIN_COLS: usize = 64;

/// Everything the modeline shows, recomputed each frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// Filename (with dirty marker) or a transient status message
    pub name: String,
    /// 1-based line number of the cursor
    pub line: usize,
    /// Display column of the cursor, from the last render
    pub column: usize,
    /// Free bytes remaining in the buffer
    pub bytes_free: usize,
}

impl StatusInfo {
    /// Format the modeline, exactly `cols` bytes wide
    ///
    /// The filename sits after the prefix, `L:` at column 21, `C:` at
    /// column 35, and `Rest:` right aligned in the last 13 columns. Fields
    /// that don't fit are dropped.
    #[must_use]
    pub fn format(&self, cols: usize) -> String {
        let mut line = String::with_capacity(cols + 8);
        line.push_str(ui::STATUS_PREFIX);

        // Keep the prefix + name inside the first field (21 columns)
        let name_max = if cols > 21 { 15 } else { 10 };
        for ch in self.name.chars().take(name_max) {
            // One byte per display cell; non-ASCII names would skew the
            // field columns
            line.push(if ch.is_ascii() { ch } else { '?' });
        }

        if cols > LINE_FIELD_MIN_COLS {
            pad_to(&mut line, 21);
            line.push_str(&format!("L: {}", self.line));

            if cols > COLUMN_FIELD_MIN_COLS {
                pad_to(&mut line, 35);
                line.push_str(&format!("C: {}", self.column));

                if cols > REST_FIELD_MIN_COLS {
                    pad_to(&mut line, cols - 13);
                    line.push_str(&format!("Rest: {:>7}", self.bytes_free));
                }
            }
        }

        pad_to(&mut line, cols);
        line.truncate(cols);
        line
    }
}

fn pad_to(line: &mut String, width: usize) {
    while line.len() < width {
        line.push(' ');
    }
}

/// Status bar renderer
pub struct StatusBar;

impl StatusBar {
    /// Render the modeline in reverse video on the top row
    pub fn render<T: TerminalBackend>(
        term: &mut T,
        info: &StatusInfo,
        cols: usize,
    ) -> Result<(), String> {
        term.move_cursor(0, 0)?;
        term.write(b"\x1b[7m")?;
        term.write(info.format(cols).as_bytes())?;
        term.write(b"\x1b[0m")?;
        Ok(())
    }
}
