//! Subtitle entries bound to queued sounds.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::EntryId;

/// Unique identifier of a subtitle entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SubtitleId(Uuid);

impl SubtitleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubtitleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubtitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display text tied to one sound entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub id: SubtitleId,
    /// Subtitle resource name or text, handed to the renderer as is.
    pub text: String,
    /// The sound whose playback drives this subtitle.
    pub sound: EntryId,
}

impl SubtitleEntry {
    pub fn new(text: impl Into<String>, sound: EntryId) -> Self {
        Self {
            id: SubtitleId::new(),
            text: text.into(),
            sound,
        }
    }
}
