//! Ordered image references shown by the carousel.

use std::path::{Component, Path};

/// Errors raised when building an [`ImageSequence`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Image sequence must contain at least one entry")]
    Empty,

    #[error("Invalid image reference at position {index}: {entry:?}")]
    InvalidEntry { index: usize, entry: String },
}

/// A fixed, non-empty list of relative image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSequence {
    entries: Vec<String>,
}

impl ImageSequence {
    /// Build a sequence, rejecting empty lists and entries that are not plain
    /// relative references (absolute paths, `..` components, blank strings).
    pub fn new<I, S>(entries: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();

        if entries.is_empty() {
            return Err(SequenceError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if !is_relative_reference(entry) {
                return Err(SequenceError::InvalidEntry {
                    index,
                    entry: entry.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Number of entries. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, wrapping around the sequence length.
    pub fn get(&self, index: usize) -> &str {
        &self.entries[index % self.entries.len()]
    }

    /// The entry shown before the first tick.
    pub fn first(&self) -> &str {
        &self.entries[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

fn is_relative_reference(entry: &str) -> bool {
    if entry.trim().is_empty() || entry.starts_with('/') || entry.contains('\\') {
        return false;
    }

    Path::new(entry)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
