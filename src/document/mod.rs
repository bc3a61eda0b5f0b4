//! Document management
//! Encapsulates file metadata and load/save for the buffer

use crate::buffer::GapBuffer;
use crate::constants::ui;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File metadata for the open buffer
#[derive(Debug)]
pub struct Document {
    /// File path (None if new/unsaved)
    file_path: Option<PathBuf>,
    /// Buffer revision at the last successful save
    last_saved_revision: u64,
}

impl Document {
    /// Create a document with no backing file
    pub fn new() -> Self {
        Document {
            file_path: None,
            last_saved_revision: 0,
        }
    }

    /// Create a document backed by `path` (which need not exist yet)
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Document {
            file_path: Some(path.as_ref().to_path_buf()),
            last_saved_revision: 0,
        }
    }

    /// Check if the document has an associated file path
    #[must_use]
    pub fn has_path(&self) -> bool {
        self.file_path.is_some()
    }

    /// Set the file path
    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        self.file_path = Some(path.as_ref().to_path_buf());
    }

    /// Get the file path if it exists
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Get display name for the modeline (filename or "[No Name]")
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(ui::NO_NAME)
    }

    /// Check if the buffer has edits newer than the last save
    #[must_use]
    pub fn is_dirty(&self, buf: &GapBuffer) -> bool {
        buf.revision() != self.last_saved_revision
    }

    /// Read the backing file into the buffer
    ///
    /// Content beyond the buffer's capacity is dropped. With no path, or a
    /// path that does not exist yet, the buffer is left empty.
    pub fn load(&self, buf: &mut GapBuffer) -> Result<()> {
        let Some(path) = self.file_path.as_deref() else {
            return Ok(());
        };

        match std::fs::read(path) {
            Ok(bytes) => {
                buf.load(&bytes);
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the buffer to the backing file
    ///
    /// The live prefix and suffix are written around the gap, so the gap is
    /// never relocated by a save. The write goes to a temp file first and is
    /// renamed into place; on success the dirty watermark is cleared.
    pub fn save(&mut self, buf: &GapBuffer) -> Result<()> {
        let path = self.file_path.clone().ok_or_else(|| {
            crate::error::SeamError::new(
                crate::error::ErrorKind::Io,
                crate::constants::errors::NO_PATH,
                "no filename",
            )
        })?;

        self.write_to_file(&path, buf)?;
        self.last_saved_revision = buf.revision();
        Ok(())
    }

    /// Atomic write to file
    fn write_to_file(&self, path: &Path, buf: &GapBuffer) -> std::io::Result<()> {
        use std::fs;
        use std::io::Write;

        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        let parent = parent.unwrap_or_else(|| Path::new("."));
        let temp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("file")
        ));

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(buf.prefix())?;
            file.write_all(buf.suffix())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
