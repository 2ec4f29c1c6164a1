//! Core domain types for the sound queue.

pub mod common;
pub mod entity;
pub mod entry;
pub mod stream;
pub mod subtitle;

pub use common::{matches_pattern, name_stem, normalize_name, SlotId, DEFAULT_EXTENSION};
pub use entity::{EntityIndex, SoundType};
pub use entry::{EntryId, EntrySnapshot, EntryState, SoundEntry, MAX_VOLUME};
pub use stream::{
    MemoryStream, ReaderStream, SoundStream, BLOCK_HEADER_SIZE, BLOCK_PAYLOAD_SIZE, BLOCK_SIZE,
    SAMPLES_PER_BLOCK,
};
pub use subtitle::{SubtitleEntry, SubtitleId};
