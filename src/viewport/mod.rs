//! Viewport management
//! Decides which logical span of the document is visible and renders it
//! into a fixed-size character grid.
//!
//! ## viewport/ Invariants
//!
//! - The viewport never mutates buffer contents.
//! - `page_start` always sits on a line start after a refresh.
//! - After a refresh the cursor's grid cell is inside the text area.
//! - The frame is fully recomputed on every refresh; nothing is diffed.
//! - Viewport logic is independent of terminal mechanics.

use crate::buffer::GapBuffer;
use crate::constants::defaults::TAB_STOP;
use crate::movement;
use crate::screen::Frame;

/// Maps a window of the document onto the display grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Logical offset of the first byte considered for display
    page_start: usize,
    /// One past the last offset rendered in the previous frame
    page_end: usize,
    /// Grid row the cursor occupied in the previous frame
    cursor_row: usize,
    /// Grid column the cursor occupied in the previous frame
    cursor_col: usize,
    /// Number of text rows in the grid
    rows: usize,
    /// Number of columns in the grid
    cols: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport {
            page_start: 0,
            page_end: 0,
            cursor_row: 0,
            cursor_col: 0,
            rows,
            cols,
        }
    }

    #[must_use]
    pub fn page_start(&self) -> usize {
        self.page_start
    }

    #[must_use]
    pub fn page_end(&self) -> usize {
        self.page_end
    }

    /// Cursor grid row from the last refresh
    #[must_use]
    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    /// Cursor grid column from the last refresh
    #[must_use]
    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Recompute the page and render it into `frame`
    ///
    /// Runs once per display cycle, after the triggering command and before
    /// the frame is written to the terminal. Scrolls only when the cursor has
    /// left the page computed by the previous refresh.
    pub fn refresh(&mut self, buf: &GapBuffer, frame: &mut Frame) {
        let cursor = buf.cursor();

        // Cursor scrolled above the page: snap to its line start.
        if cursor < self.page_start {
            self.page_start = movement::line_start(buf, cursor);
        }

        // Cursor scrolled below the page: walk back a pageful of lines from
        // the line after the cursor, so the cursor lands in the last visible
        // row. When that line run already reaches the document end, walk two
        // lines fewer to leave trailing blank rows.
        if cursor >= self.page_end {
            self.page_start = movement::next_line_start(buf, cursor);
            let mut back = if self.page_start == buf.len() {
                self.rows.saturating_sub(2)
            } else {
                self.rows
            };
            while back > 0 {
                self.page_start = movement::line_start(buf, self.page_start.saturating_sub(1));
                back -= 1;
            }
        }

        self.render(buf, frame, cursor);
    }

    /// Render pass: fill the grid from `page_start` and record where the
    /// cursor falls in it
    fn render(&mut self, buf: &GapBuffer, frame: &mut Frame, cursor: usize) {
        frame.clear();

        let mut row = 0;
        let mut col = 0;
        self.page_end = self.page_start;

        loop {
            if cursor == self.page_end {
                self.cursor_row = row;
                self.cursor_col = col;
            }

            if row >= self.rows {
                break;
            }
            let Some(byte) = buf.byte_at(self.page_end) else {
                break;
            };

            // Carriage returns are not rendered
            if byte != b'\r' {
                if byte == b'\n' {
                    frame.set_cell(row, col, b' ');
                    col += 1;
                } else if byte == b'\t' {
                    let span = TAB_STOP - (col % TAB_STOP);
                    for _ in 0..span {
                        frame.set_cell(row, col, b' ');
                        col += 1;
                    }
                } else {
                    frame.set_cell(row, col, byte);
                    col += 1;
                }
            }

            if byte == b'\n' || col >= self.cols {
                row += 1;
                col = 0;
            }

            self.page_end += 1;
        }
    }
}
