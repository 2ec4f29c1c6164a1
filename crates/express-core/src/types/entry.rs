//! Sound entry types.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::common::{normalize_name, SlotId};
use super::entity::{EntityIndex, SoundType};
use super::stream::SoundStream;
use crate::error::Result;

/// Largest value the 5-bit volume field can hold.
pub const MAX_VOLUME: u8 = 0x1F;

/// Volume new entries start at (full volume).
const DEFAULT_VOLUME: u8 = 16;

// Bit layout of the packed status word written to save files.
const STATUS_VOLUME_MASK: u32 = 0x1F;
const STATUS_PLAYING: u32 = 0x40;
const STATUS_LEAVING: u32 = 0x80;
const STATUS_RESET: u32 = 0x200;
const STATUS_CLEARED: u32 = 0x800;
const STATUS_FILTER_SKIPPED: u32 = 0x2000_0000;

/// Unique identifier of a queued sound.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle of a queued sound.
///
/// `Idle → Loading → Streaming → Playing → Reset`; a reset entry is dropped
/// from the queue at the next maintenance pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// Queued, nothing opened yet.
    #[default]
    Idle,
    /// Asked to load; waiting for its backing stream.
    Loading,
    /// Backing stream open, not yet handed to the mixer.
    Streaming,
    /// Handed to the mixer.
    Playing,
    /// Playback state cleared; waiting for removal.
    Reset,
}

#[derive(Debug, Clone, Copy, Default)]
struct EntryFlags {
    leaving: bool,
    filtering: bool,
    filter_skipped: bool,
    cleared: bool,
    cache_declined: bool,
}

/// One active sound: identity, playback status, and cache residency.
pub struct SoundEntry {
    id: EntryId,
    entity: EntityIndex,
    name: String,
    sound_type: SoundType,
    priority: u32,
    volume: u8,
    time: u32,
    state: EntryState,
    flags: EntryFlags,
    slot: Option<SlotId>,
    stream: Option<Box<dyn SoundStream>>,
}

impl SoundEntry {
    /// Create an entry owned by the player at full volume.
    pub fn new(name: impl AsRef<str>, sound_type: SoundType, priority: u32) -> Self {
        Self {
            id: EntryId::new(),
            entity: EntityIndex::PLAYER,
            name: normalize_name(name.as_ref()),
            sound_type,
            priority,
            volume: DEFAULT_VOLUME,
            time: 0,
            state: EntryState::Idle,
            flags: EntryFlags::default(),
            slot: None,
            stream: None,
        }
    }

    pub const fn with_entity(mut self, entity: EntityIndex) -> Self {
        self.entity = entity;
        self
    }

    pub fn with_volume(mut self, volume: u8) -> Self {
        self.set_volume(volume);
        self
    }

    pub fn with_stream(mut self, stream: impl SoundStream + 'static) -> Self {
        self.stream = Some(Box::new(stream));
        self
    }

    pub const fn id(&self) -> EntryId {
        self.id
    }

    pub const fn entity(&self) -> EntityIndex {
        self.entity
    }

    pub fn set_entity(&mut self, entity: EntityIndex) {
        self.entity = entity;
    }

    /// Name including its extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn sound_type(&self) -> SoundType {
        self.sound_type
    }

    pub const fn priority(&self) -> u32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: u32) {
        self.priority = priority;
    }

    pub const fn volume(&self) -> u8 {
        self.volume
    }

    /// Set the volume, saturating at the 5-bit maximum.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(MAX_VOLUME);
    }

    /// Ticks played so far.
    pub const fn time(&self) -> u32 {
        self.time
    }

    pub fn advance_time(&mut self) {
        self.time = self.time.saturating_add(1);
    }

    pub const fn state(&self) -> EntryState {
        self.state
    }

    pub const fn slot(&self) -> Option<SlotId> {
        self.slot
    }

    pub fn set_slot(&mut self, slot: Option<SlotId>) {
        self.slot = slot;
    }

    /// Whether the backing stream is still attached.
    pub fn has_stream(&self) -> bool {
        self.stream.is_some()
    }

    pub const fn is_leaving(&self) -> bool {
        self.flags.leaving
    }

    /// Mark the entry as an eviction victim.
    pub fn set_leaving(&mut self, leaving: bool) {
        self.flags.leaving = leaving;
    }

    /// Whether a block decode currently reads this entry's slot.
    pub const fn is_filtering(&self) -> bool {
        self.flags.filtering
    }

    pub fn set_filtering(&mut self, filtering: bool) {
        self.flags.filtering = filtering;
    }

    pub const fn is_filter_skipped(&self) -> bool {
        self.flags.filter_skipped
    }

    pub fn mark_filter_skipped(&mut self) {
        self.flags.filter_skipped = true;
    }

    pub const fn is_cleared(&self) -> bool {
        self.flags.cleared
    }

    pub fn mark_cleared(&mut self) {
        self.flags.cleared = true;
    }

    pub const fn is_cache_declined(&self) -> bool {
        self.flags.cache_declined
    }

    pub fn set_cache_declined(&mut self, declined: bool) {
        self.flags.cache_declined = declined;
    }

    /// Value used to rank cache residents for eviction.
    ///
    /// Entries already marked for eviction are not candidates.
    pub fn eviction_value(&self) -> Option<u32> {
        (!self.flags.leaving).then(|| self.priority.saturating_add(u32::from(self.volume)))
    }

    /// Ask the entry to start loading its backing stream.
    ///
    /// Idle entries move to `Loading`, and loading entries move on to
    /// `Streaming` once the stream reports ready. Other states are left alone.
    pub fn load_stream(&mut self) -> EntryState {
        if matches!(self.state, EntryState::Idle | EntryState::Loading) {
            let ready = self.stream.as_ref().is_some_and(|s| s.is_ready());
            let next = if ready {
                EntryState::Streaming
            } else {
                EntryState::Loading
            };
            if next != self.state {
                debug!("Entry {} ({}) now {:?}", self.id, self.name, next);
                self.state = next;
            }
        }
        self.state
    }

    /// Hand the entry to the mixer.
    pub fn play(&mut self) {
        if self.state != EntryState::Reset {
            self.state = EntryState::Playing;
        }
    }

    /// Soft reset: clear playback state and close the backing stream.
    ///
    /// The cache slot is kept until the queue drops the entry.
    pub fn reset(&mut self) {
        self.state = EntryState::Reset;
        if let Some(mut stream) = self.stream.take() {
            stream.close();
        }
    }

    /// Close and detach the backing stream.
    pub fn close(&mut self) {
        match self.stream.take() {
            Some(mut stream) => stream.close(),
            None => warn!("Entry {} ({}) has no stream to close", self.id, self.name),
        }
    }

    /// Pull the next compressed block from the backing stream.
    ///
    /// Returns `Ok(false)` when the stream is exhausted or already closed.
    pub fn next_block(&mut self, block: &mut [u8]) -> Result<bool> {
        match self.stream.as_mut() {
            Some(stream) => stream.next_block(block),
            None => Ok(false),
        }
    }

    /// Pack the status flags into the 32-bit save layout.
    pub fn status_word(&self) -> u32 {
        let mut status = u32::from(self.volume) & STATUS_VOLUME_MASK;
        if self.state == EntryState::Playing {
            status |= STATUS_PLAYING;
        }
        if self.flags.leaving {
            status |= STATUS_LEAVING;
        }
        if self.state == EntryState::Reset {
            status |= STATUS_RESET;
        }
        if self.flags.cleared {
            status |= STATUS_CLEARED;
        }
        if self.flags.filter_skipped {
            status |= STATUS_FILTER_SKIPPED;
        }
        status
    }

    /// Copy out the externally visible fields.
    pub fn snapshot(&self) -> EntrySnapshot {
        EntrySnapshot {
            id: self.id,
            entity: self.entity,
            name: self.name.clone(),
            sound_type: self.sound_type,
            priority: self.priority,
            volume: self.volume,
            time: self.time,
            state: self.state,
            slot: self.slot,
            leaving: self.flags.leaving,
            filter_skipped: self.flags.filter_skipped,
            cleared: self.flags.cleared,
            cache_declined: self.flags.cache_declined,
        }
    }
}

impl fmt::Debug for SoundEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundEntry")
            .field("id", &self.id)
            .field("entity", &self.entity)
            .field("name", &self.name)
            .field("sound_type", &self.sound_type)
            .field("priority", &self.priority)
            .field("volume", &self.volume)
            .field("state", &self.state)
            .field("slot", &self.slot)
            .field("has_stream", &self.stream.is_some())
            .finish_non_exhaustive()
    }
}

/// Point-in-time copy of an entry, safe to hold outside the queue lock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub id: EntryId,
    pub entity: EntityIndex,
    pub name: String,
    pub sound_type: SoundType,
    pub priority: u32,
    pub volume: u8,
    pub time: u32,
    pub state: EntryState,
    pub slot: Option<SlotId>,
    pub leaving: bool,
    pub filter_skipped: bool,
    pub cleared: bool,
    pub cache_declined: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::stream::{MemoryStream, BLOCK_SIZE};

    struct PendingStream;

    impl SoundStream for PendingStream {
        fn is_ready(&self) -> bool {
            false
        }

        fn next_block(&mut self, _block: &mut [u8]) -> Result<bool> {
            Ok(false)
        }
    }

    fn make_entry(name: &str) -> SoundEntry {
        SoundEntry::new(name, SoundType::FIRST, 10).with_stream(MemoryStream::new(vec![0u8; 8]))
    }

    #[test]
    fn test_entry_defaults() {
        let entry = SoundEntry::new("BUMP", SoundType::FIRST, 10);
        assert_eq!(entry.name(), "BUMP.SND");
        assert!(entry.entity().is_player());
        assert_eq!(entry.volume(), 16);
        assert_eq!(entry.state(), EntryState::Idle);
        assert!(entry.slot().is_none());
        assert!(!entry.has_stream());
    }

    #[test]
    fn test_volume_saturates() {
        let entry = SoundEntry::new("BUMP", SoundType::FIRST, 10).with_volume(200);
        assert_eq!(entry.volume(), MAX_VOLUME);
    }

    #[test]
    fn test_load_stream_transitions() {
        let mut entry = make_entry("BUMP");
        assert_eq!(entry.load_stream(), EntryState::Streaming);

        let mut pending = SoundEntry::new("WAIT", SoundType::FIRST, 1).with_stream(PendingStream);
        assert_eq!(pending.load_stream(), EntryState::Loading);
        assert_eq!(pending.load_stream(), EntryState::Loading);

        entry.play();
        assert_eq!(entry.load_stream(), EntryState::Playing);
    }

    #[test]
    fn test_reset_closes_stream() {
        let mut entry = make_entry("BUMP");
        entry.play();
        entry.reset();
        assert_eq!(entry.state(), EntryState::Reset);
        assert!(!entry.has_stream());

        // A reset entry cannot be played again.
        entry.play();
        assert_eq!(entry.state(), EntryState::Reset);

        let mut block = [0u8; BLOCK_SIZE];
        assert!(!entry.next_block(&mut block).unwrap());
    }

    #[test]
    fn test_eviction_value() {
        let mut entry = make_entry("BUMP").with_volume(5);
        assert_eq!(entry.eviction_value(), Some(15));
        entry.set_leaving(true);
        assert_eq!(entry.eviction_value(), None);
    }

    #[test]
    fn test_status_word() {
        let mut entry = make_entry("BUMP").with_volume(7);
        entry.play();
        entry.set_leaving(true);
        entry.mark_filter_skipped();
        assert_eq!(entry.status_word(), 7 | 0x40 | 0x80 | 0x2000_0000);

        entry.reset();
        entry.mark_cleared();
        assert_eq!(entry.status_word(), 7 | 0x80 | 0x200 | 0x800 | 0x2000_0000);
    }
}
