//! Events emitted by the sound queue.

use express_core::{EntryId, SlotId, SubtitleId};

/// Subtitle display changes decided by `update_subtitles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleEvent {
    /// The current subtitle stays up and should be redrawn.
    Refreshed(SubtitleId),
    /// The subtitle is no longer shown.
    Hidden(SubtitleId),
    /// The subtitle became the current one.
    Shown(SubtitleId),
}

/// Queue lifecycle events for the mixer and subtitle renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    /// An entry was appended.
    Added { id: EntryId, name: String },
    /// An entry was soft reset and will be dropped at the next maintenance pass.
    Reset(EntryId),
    /// An entry left the queue.
    Removed(EntryId),
    /// An entry was handed to the mixer.
    Playing(EntryId),
    /// The cache refused an entry; it plays uncached.
    CacheDeclined { id: EntryId, floor: u32 },
    /// A resident lost its slot to a more valuable entry.
    Evicted {
        victim: EntryId,
        newcomer: EntryId,
        slot: SlotId,
    },
    /// A block header was out of range and the block was not decoded.
    FilterSkipped(EntryId),
    /// Subtitle display change.
    Subtitle(SubtitleEvent),
}
