//! Editor core
//! Main editor logic that ties everything together

use crate::buffer::GapBuffer;
use crate::command::{Command, Dispatcher};
use crate::constants::{defaults, errors, ui};
use crate::document::Document;
use crate::error::{ErrorKind, Result, SeamError};
use crate::key::Key;
use crate::movement;
use crate::screen::Frame;
use crate::status::{StatusBar, StatusInfo};
use crate::term::TerminalBackend;
use crate::viewport::Viewport;
use std::path::PathBuf;

/// Main editor struct
#[derive(Debug)]
pub struct Editor<T: TerminalBackend> {
    terminal: T,
    buf: GapBuffer,
    document: Document,
    viewport: Viewport,
    frame: Frame,
    dispatcher: Dispatcher,
    /// Column vertical movement aims for; re-anchored by every command
    /// except MoveUp/MoveDown
    desired_col: usize,
    /// Transient status message, shown until the next keypress
    message: Option<String>,
    should_quit: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Create a new editor instance
    ///
    /// Initializes the terminal, validates its geometry, and loads the file
    /// at `path` if one is given (a missing file starts a new document).
    pub fn new(mut terminal: T, capacity: usize, path: Option<PathBuf>) -> Result<Self> {
        terminal.init().map_err(|e| {
            SeamError::critical(ErrorKind::Terminal, errors::TERMINAL_FAILED, e)
        })?;

        let size = terminal.get_size().map_err(|e| {
            terminal.deinit();
            SeamError::critical(ErrorKind::Terminal, errors::TERMINAL_FAILED, e)
        })?;

        if size.cols < defaults::MIN_COLS || size.rows < defaults::MIN_ROWS {
            terminal.deinit();
            return Err(SeamError::critical(
                ErrorKind::Terminal,
                errors::TERMINAL_TOO_SMALL,
                format!(
                    "terminal too small ({}x{}, need at least {}x{})",
                    size.cols,
                    size.rows,
                    defaults::MIN_COLS,
                    defaults::MIN_ROWS
                ),
            ));
        }

        let mut buf = GapBuffer::new(capacity)?;
        let document = path.map(Document::with_path).unwrap_or_default();

        // A file we cannot read still opens as an empty document; the
        // modeline reports the failure on the first frame.
        let mut message = None;
        if document.load(&mut buf).is_err() {
            message = Some(errors::MSG_READ_FAILED.to_string());
        }

        // The top row belongs to the modeline
        let text_rows = (size.rows - 1).max(1) as usize;
        let cols = size.cols as usize;

        Ok(Editor {
            terminal,
            buf,
            document,
            viewport: Viewport::new(text_rows, cols),
            frame: Frame::new(text_rows, cols),
            dispatcher: Dispatcher::new(),
            desired_col: 0,
            message,
            should_quit: false,
        })
    }

    /// Run the editor main loop
    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        while !self.should_quit {
            let key = self.terminal.read_key().map_err(|e| {
                SeamError::new(ErrorKind::Terminal, errors::TERMINAL_FAILED, e)
            })?;

            self.message = None;
            let cmd = self.dispatcher.translate_key(key);
            self.apply(cmd);
            self.render()?;
        }

        self.terminal.deinit();
        Ok(())
    }

    /// Apply a single command to the editor state
    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::InsertByte(byte) => {
                // A full buffer silently drops the byte
                self.buf.insert(byte);
            }
            Command::DeleteBackward => {
                self.buf.delete_backward();
            }
            Command::MoveLeft => {
                self.buf.move_left();
            }
            Command::MoveRight => {
                self.buf.move_right();
            }
            Command::MoveUp => {
                let target = movement::up(&self.buf, self.buf.cursor(), self.desired_col);
                self.buf.set_cursor(target);
            }
            Command::MoveDown => {
                let target = movement::down(&self.buf, self.buf.cursor(), self.desired_col);
                self.buf.set_cursor(target);
            }
            Command::Save => self.save(),
            Command::Quit => self.should_quit = true,
            Command::Redraw => {
                let _ = self.terminal.clear_screen();
            }
            Command::Noop => {}
        }

        if !matches!(cmd, Command::MoveUp | Command::MoveDown) {
            self.desired_col = movement::display_column(&self.buf, self.buf.cursor());
        }
    }

    /// Save the document, prompting for a filename when there is none
    fn save(&mut self) {
        if !self.document.has_path() {
            match self.prompt_filename() {
                Some(name) => self.document.set_path(name),
                None => {
                    self.message = Some(errors::MSG_NO_FILENAME.to_string());
                    return;
                }
            }
        }

        self.message = Some(match self.document.save(&self.buf) {
            Ok(()) => errors::MSG_SAVE_OK.to_string(),
            Err(_) => errors::MSG_FAILED_OPEN.to_string(),
        });
    }

    /// Read a filename on the modeline
    ///
    /// Accepts alphanumerics, dots, and underscores. Enter accepts (empty
    /// input cancels), Escape cancels, Backspace edits. Backend failures
    /// cancel the prompt.
    fn prompt_filename(&mut self) -> Option<String> {
        let max_len = self.viewport.cols().saturating_sub(ui::STATUS_PREFIX.len());
        let mut name = String::new();

        loop {
            if self.draw_prompt(&name).is_err() {
                return None;
            }

            match self.terminal.read_key() {
                Ok(Key::Enter) => {
                    return if name.is_empty() { None } else { Some(name) };
                }
                Ok(Key::Escape) => return None,
                Ok(Key::Backspace | Key::Delete) => {
                    name.pop();
                }
                Ok(Key::Char(byte))
                    if name.len() < max_len
                        && (byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'_') =>
                {
                    name.push(byte as char);
                }
                Ok(_) => {}
                Err(_) => return None,
            }
        }
    }

    fn draw_prompt(&mut self, name: &str) -> std::result::Result<(), String> {
        let cols = self.viewport.cols();
        let mut line = String::with_capacity(cols);
        line.push_str(ui::STATUS_PREFIX);
        line.push_str(name);
        while line.len() < cols {
            line.push(' ');
        }
        line.truncate(cols);

        self.terminal.move_cursor(0, 0)?;
        self.terminal.write(b"\x1b[7m")?;
        self.terminal.write(line.as_bytes())?;
        self.terminal.write(b"\x1b[0m")?;
        self.terminal
            .move_cursor(0, (ui::STATUS_PREFIX.len() + name.len()) as u16)?;
        Ok(())
    }

    /// Recompute the page and write the frame to the terminal
    ///
    /// Always runs after the triggering command, before the next key is read.
    fn render(&mut self) -> Result<()> {
        self.viewport.refresh(&self.buf, &mut self.frame);
        self.draw()
            .map_err(|e| SeamError::new(ErrorKind::Terminal, errors::TERMINAL_FAILED, e))
    }

    fn draw(&mut self) -> std::result::Result<(), String> {
        self.terminal.hide_cursor()?;

        let info = self.status_info();
        StatusBar::render(&mut self.terminal, &info, self.viewport.cols())?;

        // Text rows sit below the modeline; every row is written in full, so
        // no clearing is needed between frames
        for row in 0..self.viewport.rows() {
            self.terminal.move_cursor((row + 1) as u16, 0)?;
            if let Some(cells) = self.frame.row(row) {
                self.terminal.write(cells)?;
            }
        }

        self.terminal.move_cursor(
            (self.viewport.cursor_row() + 1) as u16,
            self.viewport.cursor_col() as u16,
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn status_info(&self) -> StatusInfo {
        let name = match &self.message {
            Some(msg) => msg.clone(),
            None => {
                let mut name = self.document.display_name().to_string();
                if self.document.is_dirty(&self.buf) {
                    name.push_str(ui::DIRTY_MARKER);
                }
                name
            }
        };

        StatusInfo {
            name,
            line: movement::line_number(&self.buf, self.buf.cursor()),
            column: self.viewport.cursor_col(),
            bytes_free: self.buf.gap_len(),
        }
    }

    // Accessors used by tests and the surrounding program

    #[must_use]
    pub fn buffer(&self) -> &GapBuffer {
        &self.buf
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
