//! Cursor into an image sequence.

/// Index of the image currently on display.
///
/// Starts at 0 (the entry the static markup already shows) and wraps on
/// every advance, so after `n` advances the cursor is `n mod len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    cursor: usize,
    len: usize,
}

impl CarouselState {
    /// Create a state for a sequence of `len` entries.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. [`crate::ImageSequence`] never has zero entries.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "carousel needs at least one image");
        Self { cursor: 0, len }
    }

    /// Index of the entry on display.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index the next advance will land on.
    pub fn peek_next(&self) -> usize {
        (self.cursor + 1) % self.len
    }

    /// Commit a move to the next entry and return the new cursor.
    pub fn advance(&mut self) -> usize {
        self.cursor = self.peek_next();
        self.cursor
    }
}
