//! Gap buffer storage for the document
//!
//! A single fixed-capacity byte arena split into three zones: a live prefix,
//! a free gap, and a live suffix. All editing happens at the gap, which is
//! relocated to the cursor before every mutation, so repeated local edits
//! cost a handful of byte copies.
//!
//! ## buffer/ Invariants
//!
//! - `gap_start <= gap_end <= capacity` between operations.
//! - Bytes outside `[gap_start, gap_end)` are live document content.
//! - `len() + gap_len() == capacity()` at all times.
//! - The cursor is a logical offset in `[0, len()]`, never a physical address.
//! - The arena never reallocates; inserting into a full buffer is a no-op.

use crate::error::{ErrorKind, SeamError};

/// Gap buffer holding the document in a fixed-capacity arena.
#[derive(Debug)]
pub struct GapBuffer {
    /// Backing arena, laid out `[prefix][gap][suffix]`
    arena: Vec<u8>,
    /// First byte of the gap (one past the live prefix)
    gap_start: usize,
    /// One past the last gap byte (first byte of the live suffix)
    gap_end: usize,
    /// Cursor position as a logical offset
    cursor: usize,
    /// Monotonic revision counter, bumped on every successful edit
    revision: u64,
}

impl GapBuffer {
    /// Create an empty buffer with the given fixed capacity
    pub fn new(capacity: usize) -> Result<Self, SeamError> {
        if capacity == 0 {
            return Err(SeamError::new(
                ErrorKind::Internal,
                crate::constants::errors::ZERO_CAPACITY,
                "buffer capacity must be > 0",
            ));
        }

        Ok(GapBuffer {
            arena: vec![0; capacity],
            gap_start: 0,
            gap_end: capacity,
            cursor: 0,
            revision: 0,
        })
    }

    /// Install `bytes` as the document content, truncated to capacity
    ///
    /// The content becomes the live prefix with the gap immediately after it;
    /// the cursor moves to the document start and the revision resets.
    pub fn load(&mut self, bytes: &[u8]) {
        let n = bytes.len().min(self.arena.len());
        self.arena[..n].copy_from_slice(&bytes[..n]);
        self.gap_start = n;
        self.gap_end = self.arena.len();
        self.cursor = 0;
        self.revision = 0;
    }

    /// Total length of the document (live prefix + live suffix)
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len() - self.gap_len()
    }

    /// Check if the document is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the backing arena
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.len()
    }

    /// Free space remaining in the gap
    #[must_use]
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Current cursor position as a logical offset
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor at a logical offset
    ///
    /// Offsets beyond the document length are a caller bug.
    pub fn set_cursor(&mut self, offset: usize) {
        debug_assert!(offset <= self.len(), "cursor {offset} out of range");
        self.cursor = offset;
    }

    /// Revision counter for change detection
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Map a logical offset to its physical address in the arena
    ///
    /// Offsets at or beyond the gap are shifted right by the gap's length.
    /// Valid inputs are `0..=len()`; anything else is a caller bug.
    #[must_use]
    pub fn to_physical(&self, offset: usize) -> usize {
        debug_assert!(offset <= self.len(), "offset {offset} out of range");
        if offset < self.gap_start {
            offset
        } else {
            offset + self.gap_len()
        }
    }

    /// Map a physical arena address back to its logical offset
    ///
    /// Exact inverse of [`to_physical`](Self::to_physical) for every address
    /// outside the gap. Addresses inside the gap are a caller bug.
    #[must_use]
    pub fn to_logical(&self, addr: usize) -> usize {
        debug_assert!(
            addr < self.gap_start || addr >= self.gap_end,
            "address {addr} inside the gap"
        );
        if addr < self.gap_end {
            addr
        } else {
            addr - self.gap_len()
        }
    }

    /// Read the document byte at a logical offset
    #[must_use]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        if offset < self.len() {
            Some(self.arena[self.to_physical(offset)])
        } else {
            None
        }
    }

    /// Move cursor left by one byte
    pub fn move_left(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move cursor right by one byte
    pub fn move_right(&mut self) -> bool {
        if self.cursor < self.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Relocate the gap so it sits exactly at the given logical offset
    ///
    /// Shifts one byte at a time across the gap, so cost is proportional to
    /// the distance moved. Document content and length are unchanged; a
    /// zero-distance move is a no-op.
    pub fn move_gap_to(&mut self, offset: usize) {
        let target = self.to_physical(offset);

        while target < self.gap_start {
            self.gap_start -= 1;
            self.gap_end -= 1;
            self.arena[self.gap_end] = self.arena[self.gap_start];
        }

        while self.gap_end < target {
            self.arena[self.gap_start] = self.arena[self.gap_end];
            self.gap_start += 1;
            self.gap_end += 1;
        }
    }

    /// Insert a byte at the cursor position
    ///
    /// Carriage returns are normalized to newlines before storage. Returns
    /// false when the buffer is full; the byte is silently dropped so the
    /// session can keep editing.
    pub fn insert(&mut self, byte: u8) -> bool {
        let byte = if byte == b'\r' { b'\n' } else { byte };

        self.move_gap_to(self.cursor);

        if self.gap_start < self.gap_end {
            self.arena[self.gap_start] = byte;
            self.gap_start += 1;
            self.cursor += 1;
            self.revision += 1;
            true
        } else {
            false
        }
    }

    /// Delete the byte before the cursor
    ///
    /// A no-op at the document start.
    pub fn delete_backward(&mut self) -> bool {
        self.move_gap_to(self.cursor);

        if self.gap_start > 0 {
            self.gap_start -= 1;
            self.cursor -= 1;
            self.revision += 1;
            true
        } else {
            false
        }
    }

    /// Live bytes before the gap
    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        &self.arena[..self.gap_start]
    }

    /// Live bytes after the gap
    #[must_use]
    pub fn suffix(&self) -> &[u8] {
        &self.arena[self.gap_end..]
    }

    /// The whole document as a contiguous byte vector
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.prefix());
        out.extend_from_slice(self.suffix());
        out
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_bytes()))
    }
}
