//! The sound queue: every active sound entry behind one lock.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use bytes::{Buf, BufMut};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::{Condvar, Mutex, MutexGuard};
use tracing::{debug, error, trace, warn};

use express_cache::{Admission, CacheStats, SoundCache};
use express_core::save::{self, SaveHeader};
use express_core::{
    normalize_name, CacheConfig, EntityIndex, EntryId, EntrySnapshot, EntryState, Error, Result,
    SlotId, SoundEntry, SoundType, SubtitleEntry, SubtitleId, BLOCK_SIZE, SAMPLES_PER_BLOCK,
};
use express_filter::{decode_block, is_out_of_range, FilterOutcome, Variant};

use crate::events::{QueueEvent, SubtitleEvent};
use crate::subtitle;

/// Events buffered for subscribers before the oldest ones are dropped.
const EVENT_CAPACITY: usize = 1024;

/// Outcome of asking for a cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAdmission {
    /// The entry owns this slot.
    Cached(SlotId),
    /// Nothing cheaper could be evicted; the entry plays uncached.
    Declined,
}

/// Outcome of filtering one block of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    /// PCM was written to the output buffer.
    Decoded,
    /// The block header was out of range; nothing was written.
    Skipped,
    /// The stream is exhausted and the entry was reset.
    Finished,
}

struct QueueInner {
    entries: Vec<SoundEntry>,
    cache: SoundCache,
    subtitles: Vec<SubtitleEntry>,
    current_subtitle: Option<SubtitleId>,
    state: u32,
    current_type: SoundType,
    cinematic: bool,
}

impl QueueInner {
    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    fn get(&self, id: EntryId) -> Option<&SoundEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    fn get_mut(&mut self, id: EntryId) -> Option<&mut SoundEntry> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    fn by_entity(&mut self, entity: EntityIndex) -> Option<&mut SoundEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.entity() == entity)
    }

    fn by_name(&mut self, name: &str) -> Option<&mut SoundEntry> {
        let name = normalize_name(name);
        self.entries.iter_mut().find(|entry| entry.name() == name)
    }

    fn by_type(&mut self, sound_type: SoundType) -> Option<&mut SoundEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.sound_type() == sound_type)
    }
}

/// Thread-safe queue of active sounds.
///
/// Entries, the slot cache and subtitles live behind one mutex. Decoding
/// happens outside it; an entry whose block is being decoded is marked
/// `filtering`, and evicting it waits on a condition variable until the
/// decode is done.
pub struct SoundQueue {
    inner: Mutex<QueueInner>,
    /// Signalled when a decode finishes or an entry leaves the cache.
    cache_changed: Condvar,
    event_tx: Sender<QueueEvent>,
    event_rx: Receiver<QueueEvent>,
}

impl SoundQueue {
    /// Create an empty queue with a cache of the given geometry.
    pub fn new(cache: CacheConfig) -> Result<Self> {
        let (event_tx, event_rx) = bounded(EVENT_CAPACITY);

        Ok(Self {
            inner: Mutex::new(QueueInner {
                entries: Vec::new(),
                cache: SoundCache::new(cache)?,
                subtitles: Vec::new(),
                current_subtitle: None,
                state: 0,
                current_type: SoundType::DEFAULT,
                cinematic: false,
            }),
            cache_changed: Condvar::new(),
            event_tx,
            event_rx,
        })
    }

    /// Receiver for queue events.
    ///
    /// All receivers share one channel; each event goes to one of them.
    pub fn subscribe(&self) -> Receiver<QueueEvent> {
        self.event_rx.clone()
    }

    /// Queue `event` for subscribers, dropping the oldest pending event
    /// when the buffer is full.
    fn emit(&self, mut event: QueueEvent) {
        loop {
            match self.event_tx.try_send(event) {
                Ok(()) => return,
                Err(TrySendError::Full(rejected)) => {
                    if let Ok(stale) = self.event_rx.try_recv() {
                        trace!("Event buffer full, dropping {stale:?}");
                    }
                    event = rejected;
                }
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    }

    // ---- Entry lifecycle ----

    /// Append an entry; the queue takes ownership.
    pub fn add(&self, entry: SoundEntry) -> EntryId {
        let id = entry.id();
        let name = entry.name().to_string();
        debug!("Queued {name} ({id})");

        self.inner.lock().entries.push(entry);
        self.emit(QueueEvent::Added { id, name });
        id
    }

    /// Soft reset the first entry owned by `entity`.
    pub fn remove_entity(&self, entity: EntityIndex) -> bool {
        let mut inner = self.inner.lock();
        match inner.by_entity(entity) {
            Some(entry) => {
                self.reset_entry(entry);
                true
            }
            None => false,
        }
    }

    /// Soft reset the first entry named `name`.
    pub fn remove_named(&self, name: &str) -> bool {
        let mut inner = self.inner.lock();
        match inner.by_name(name) {
            Some(entry) => {
                self.reset_entry(entry);
                true
            }
            None => false,
        }
    }

    fn reset_entry(&self, entry: &mut SoundEntry) {
        entry.reset();
        debug!("Reset {} ({})", entry.name(), entry.id());
        self.emit(QueueEvent::Reset(entry.id()));
    }

    /// Drop every entry and subtitle and empty the cache.
    ///
    /// Decodes already running finish on their own copy of the block.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();

        let entries = std::mem::take(&mut inner.entries);
        debug!("Clearing {} queued sounds", entries.len());
        for mut entry in entries {
            entry.reset();
            self.emit(QueueEvent::Removed(entry.id()));
        }

        inner.cache.clear();
        inner.subtitles.clear();
        self.refresh_subtitles(&mut inner);

        drop(inner);
        self.cache_changed.notify_all();
    }

    /// Periodic maintenance pass.
    ///
    /// Entries whose stream is gone are dropped together with their cache
    /// slot and subtitles; the rest are nudged towards `Streaming`.
    pub fn maintain(&self) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let mut removed = Vec::new();
        inner.entries.retain(|entry| {
            if entry.has_stream() {
                true
            } else {
                removed.push(entry.id());
                false
            }
        });

        for &id in &removed {
            if inner.cache.slot_of(id).is_some() {
                inner.cache.release(id);
            }
            self.drop_subtitles_of(inner, id);
            debug!("Removed entry {id}");
            self.emit(QueueEvent::Removed(id));
        }

        for entry in &mut inner.entries {
            entry.load_stream();
        }

        drop(guard);
        if !removed.is_empty() {
            self.cache_changed.notify_all();
        }
    }

    /// Reset every entry of `sound_type`.
    pub fn reset_type(&self, sound_type: SoundType) -> usize {
        let mut inner = self.inner.lock();
        let mut count = 0;
        for entry in inner
            .entries
            .iter_mut()
            .filter(|entry| entry.sound_type() == sound_type)
        {
            self.reset_entry(entry);
            count += 1;
        }
        count
    }

    /// Reset every entry whose type is neither `keep` nor `also_keep`.
    ///
    /// `also_keep` defaults to `keep`.
    pub fn reset_except(&self, keep: SoundType, also_keep: Option<SoundType>) -> usize {
        let also_keep = also_keep.unwrap_or(keep);
        let mut inner = self.inner.lock();
        let mut count = 0;
        for entry in inner.entries.iter_mut().filter(|entry| {
            entry.sound_type() != keep && entry.sound_type() != also_keep
        }) {
            self.reset_entry(entry);
            count += 1;
        }
        count
    }

    /// Reset the first entry of each of `types`.
    pub fn reset_first_of(&self, types: &[SoundType]) -> usize {
        let mut inner = self.inner.lock();
        let mut count = 0;
        for &sound_type in types {
            if let Some(entry) = inner.by_type(sound_type) {
                self.reset_entry(entry);
                count += 1;
            }
        }
        count
    }

    /// Close the backing stream of every entry.
    ///
    /// Entries stay queued; the next maintenance pass drops them.
    pub fn stop_all(&self) -> usize {
        let mut inner = self.inner.lock();
        let mut count = 0;
        for entry in inner.entries.iter_mut().filter(|entry| entry.has_stream()) {
            entry.close();
            count += 1;
        }
        debug!("Stopped {count} sound streams");
        count
    }

    /// Flag every entry as cleared.
    pub fn clear_status(&self) {
        for entry in &mut self.inner.lock().entries {
            entry.mark_cleared();
        }
    }

    // ---- Playback ----

    /// Give the first entry of `sound_type` to `entity`.
    pub fn setup_entry(&self, sound_type: SoundType, entity: EntityIndex) -> bool {
        let mut inner = self.inner.lock();
        match inner.by_type(sound_type) {
            Some(entry) => {
                entry.set_entity(entity);
                true
            }
            None => false,
        }
    }

    /// Play the first entry owned by `entity` and hand it to the player.
    pub fn process_entity(&self, entity: EntityIndex) -> bool {
        let mut inner = self.inner.lock();
        match inner.by_entity(entity) {
            Some(entry) => {
                self.play_entry(entry, true);
                true
            }
            None => false,
        }
    }

    /// Play the first entry of `sound_type`.
    pub fn process_type(&self, sound_type: SoundType) -> bool {
        let mut inner = self.inner.lock();
        match inner.by_type(sound_type) {
            Some(entry) => {
                self.play_entry(entry, false);
                true
            }
            None => false,
        }
    }

    /// Play the first entry named `name` and hand it to the player.
    pub fn process_named(&self, name: &str) -> bool {
        let mut inner = self.inner.lock();
        match inner.by_name(name) {
            Some(entry) => {
                self.play_entry(entry, true);
                true
            }
            None => false,
        }
    }

    /// Zero the queue state and play the first entry of both channel types.
    pub fn process_entries(&self) {
        let mut inner = self.inner.lock();
        inner.state = 0;
        for sound_type in [SoundType::FIRST, SoundType::SECOND] {
            if let Some(entry) = inner.by_type(sound_type) {
                self.play_entry(entry, false);
            }
        }
    }

    fn play_entry(&self, entry: &mut SoundEntry, to_player: bool) {
        entry.play();
        if to_player {
            entry.set_entity(EntityIndex::PLAYER);
        }
        if entry.state() == EntryState::Playing {
            self.emit(QueueEvent::Playing(entry.id()));
        }
    }

    // ---- Lookup ----

    pub fn find_entity(&self, entity: EntityIndex) -> Option<EntryId> {
        self.inner
            .lock()
            .entries
            .iter()
            .find(|entry| entry.entity() == entity)
            .map(SoundEntry::id)
    }

    /// First entry named `name`; `.SND` is assumed when it has no extension.
    pub fn find_named(&self, name: &str) -> Option<EntryId> {
        self.inner.lock().by_name(name).map(|entry| entry.id())
    }

    pub fn find_type(&self, sound_type: SoundType) -> Option<EntryId> {
        self.inner
            .lock()
            .entries
            .iter()
            .find(|entry| entry.sound_type() == sound_type)
            .map(SoundEntry::id)
    }

    pub fn entry(&self, id: EntryId) -> Option<EntrySnapshot> {
        self.inner.lock().get(id).map(SoundEntry::snapshot)
    }

    /// Snapshots of every entry in queue order.
    pub fn entries(&self) -> Vec<EntrySnapshot> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(SoundEntry::snapshot)
            .collect()
    }

    pub fn is_cached(&self, entity: EntityIndex) -> bool {
        self.find_entity(entity).is_some()
    }

    /// Whether an entry named `name` is queued, optionally requiring a
    /// non-player owner.
    pub fn is_cached_name(&self, name: &str, require_not_player: bool) -> bool {
        let mut inner = self.inner.lock();
        match inner.by_name(name) {
            Some(entry) => !require_not_player || !entry.entity().is_player(),
            None => false,
        }
    }

    /// Ticks played by the first entry of `entity`, or 0.
    pub fn entry_time(&self, entity: EntityIndex) -> u32 {
        self.inner
            .lock()
            .entries
            .iter()
            .find(|entry| entry.entity() == entity)
            .map_or(0, SoundEntry::time)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    // ---- Queue state ----

    pub fn state(&self) -> u32 {
        self.inner.lock().state
    }

    pub fn set_state(&self, state: u32) {
        self.inner.lock().state = state;
    }

    pub fn current_type(&self) -> SoundType {
        self.inner.lock().current_type
    }

    pub fn set_current_type(&self, sound_type: SoundType) {
        self.inner.lock().current_type = sound_type;
    }

    pub fn is_cinematic(&self) -> bool {
        self.inner.lock().cinematic
    }

    /// While a cinematic runs only high-priority sounds show subtitles.
    pub fn set_cinematic(&self, cinematic: bool) {
        self.inner.lock().cinematic = cinematic;
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.inner.lock().cache.stats()
    }

    // ---- Cache ----

    /// Find a cache slot for `id`, evicting a cheaper resident if needed.
    ///
    /// Blocks while the chosen victim is being decoded.
    pub fn acquire_cache(&self, id: EntryId) -> Result<CacheAdmission> {
        let mut guard = self.inner.lock();
        self.acquire_locked(&mut guard, id)
    }

    #[allow(clippy::panic)]
    fn acquire_locked(
        &self,
        guard: &mut MutexGuard<'_, QueueInner>,
        id: EntryId,
    ) -> Result<CacheAdmission> {
        loop {
            let inner = &mut **guard;
            let entry = inner.get(id).ok_or(Error::EntryNotFound(id))?;
            let priority = entry.priority();
            let leaving = entry.is_leaving();

            let entries = &inner.entries;
            let decision = inner.cache.admit(id, priority, |resident| {
                entries
                    .iter()
                    .find(|entry| entry.id() == resident)
                    .and_then(SoundEntry::eviction_value)
            });

            match decision {
                Admission::Resident(_) if leaving => {
                    trace!("Entry {id} is being evicted, waiting");
                    self.cache_changed.wait(guard);
                }
                Admission::Resident(slot) => {
                    return Ok(CacheAdmission::Cached(Self::assign(inner, id, slot)));
                }
                Admission::Vacant(slot) => {
                    inner.cache.insert(id);
                    return Ok(CacheAdmission::Cached(Self::assign(inner, id, slot)));
                }
                Admission::Declined { floor } => {
                    if let Some(entry) = inner.get_mut(id) {
                        entry.set_cache_declined(true);
                    }
                    debug!("Cache declined {id}: priority {priority} <= {floor}");
                    self.emit(QueueEvent::CacheDeclined { id, floor });
                    return Ok(CacheAdmission::Declined);
                }
                Admission::Contended => {
                    let pending = inner
                        .entries
                        .iter()
                        .any(|entry| entry.is_leaving() && entry.slot().is_some());
                    if !pending {
                        error!("Sound cache is full but holds no valid eviction candidate");
                        panic!("sound cache bookkeeping is inconsistent");
                    }
                    trace!("Every cache resident is leaving, waiting");
                    self.cache_changed.wait(guard);
                }
                Admission::Evict { victim, value } => {
                    trace!("Evicting {victim} (value {value}) for {id}");
                    if let Some(slot) = self.evict_when_idle(guard, victim, id)? {
                        return Ok(CacheAdmission::Cached(slot));
                    }
                }
            }
        }
    }

    /// Mark `victim` as leaving, wait until it is not being decoded, then
    /// hand its slot to `newcomer`.
    ///
    /// Returns `None` when the situation changed while waiting and the
    /// admission has to be decided again.
    fn evict_when_idle(
        &self,
        guard: &mut MutexGuard<'_, QueueInner>,
        victim: EntryId,
        newcomer: EntryId,
    ) -> Result<Option<SlotId>> {
        match guard.get_mut(victim) {
            Some(entry) => entry.set_leaving(true),
            None => return Ok(None),
        }

        while guard.get(victim).is_some_and(SoundEntry::is_filtering)
            && guard.get(newcomer).is_some()
        {
            trace!("Waiting for {victim} to finish decoding");
            self.cache_changed.wait(guard);
        }

        let inner = &mut **guard;

        if inner.get(newcomer).is_none() {
            self.abandon_eviction(inner, victim);
            return Err(Error::EntryNotFound(newcomer));
        }

        // Another caller may have cached the newcomer, or the victim may
        // have lost its slot, while the lock was released.
        if inner.cache.slot_of(newcomer).is_some() {
            self.abandon_eviction(inner, victim);
            return Ok(None);
        }
        let Some(slot) = inner.cache.evict(victim, newcomer) else {
            self.abandon_eviction(inner, victim);
            return Ok(None);
        };

        if let Some(entry) = inner.get_mut(victim) {
            entry.set_slot(None);
            entry.set_leaving(false);
        }
        self.emit(QueueEvent::Evicted {
            victim,
            newcomer,
            slot,
        });
        self.cache_changed.notify_all();

        Ok(Some(Self::assign(inner, newcomer, slot)))
    }

    /// Clear the victim's mark and wake anyone waiting on it.
    fn abandon_eviction(&self, inner: &mut QueueInner, victim: EntryId) {
        if let Some(entry) = inner.get_mut(victim) {
            entry.set_leaving(false);
        }
        self.cache_changed.notify_all();
    }

    fn assign(inner: &mut QueueInner, id: EntryId, slot: SlotId) -> SlotId {
        if let Some(entry) = inner.get_mut(id) {
            entry.set_slot(Some(slot));
            entry.set_cache_declined(false);
        }
        trace!("Entry {id} holds {slot}");
        slot
    }

    /// Give back the cache slot of `id`.
    pub fn release_cache(&self, id: EntryId) -> bool {
        let mut inner = self.inner.lock();
        let released = inner.cache.release(id).is_some();
        if let Some(entry) = inner.get_mut(id) {
            entry.set_slot(None);
        }

        drop(inner);
        if released {
            self.cache_changed.notify_all();
        }
        released
    }

    // ---- Decoding ----

    /// Pull the next block of `id` through its cache slot and decode it into
    /// `out`.
    ///
    /// The lock is released while decoding. The block is read before a slot
    /// is taken, so an exhausted stream resets the entry and frees its slot
    /// without evicting anyone. An out-of-range header flags the entry and
    /// skips the block.
    pub fn filter_entry(&self, id: EntryId, out: &mut [i16]) -> Result<BlockStatus> {
        if out.len() < SAMPLES_PER_BLOCK {
            return Err(Error::InvalidBlock(format!(
                "output holds {} samples, need {SAMPLES_PER_BLOCK}",
                out.len()
            )));
        }

        let mut block = [0u8; BLOCK_SIZE];
        let variant = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;
            let index = inner.position(id).ok_or(Error::EntryNotFound(id))?;
            let entry = &mut inner.entries[index];
            if entry.state() == EntryState::Reset {
                return Ok(BlockStatus::Finished);
            }

            if !entry.next_block(&mut block)? {
                debug!("Entry {id} ({}) finished", entry.name());
                self.reset_entry(entry);
                entry.set_slot(None);
                if inner.cache.slot_of(id).is_some() {
                    inner.cache.release(id);
                    self.cache_changed.notify_all();
                }
                return Ok(BlockStatus::Finished);
            }

            if let CacheAdmission::Cached(slot) = self.acquire_locked(&mut guard, id)? {
                guard.cache.slot_bytes_mut(slot)[..BLOCK_SIZE].copy_from_slice(&block);
            }
            let entry = guard.get_mut(id).ok_or(Error::EntryNotFound(id))?;

            if is_out_of_range(&block) {
                entry.mark_filter_skipped();
                debug!("Block header of {id} out of range, skipped");
                self.emit(QueueEvent::FilterSkipped(id));
                return Ok(BlockStatus::Skipped);
            }

            entry.set_filtering(true);
            Variant::from_volume(entry.volume())
        };

        let result = decode_block(&block, variant, out);

        let mut inner = self.inner.lock();
        match inner.get_mut(id) {
            Some(entry) => {
                entry.set_filtering(false);
                if matches!(result, Ok(FilterOutcome::Decoded)) {
                    entry.advance_time();
                }
            }
            None => debug!("Entry {id} left the queue while decoding"),
        }
        drop(inner);
        self.cache_changed.notify_all();

        match result? {
            FilterOutcome::Decoded => {
                trace!("Decoded block of {id}");
                Ok(BlockStatus::Decoded)
            }
            FilterOutcome::Skipped => Ok(BlockStatus::Skipped),
        }
    }

    // ---- Subtitles ----

    /// Attach a subtitle to a queued sound.
    pub fn add_subtitle(&self, text: impl Into<String>, sound: EntryId) -> Result<SubtitleId> {
        let mut inner = self.inner.lock();
        if inner.get(sound).is_none() {
            return Err(Error::EntryNotFound(sound));
        }

        let subtitle = SubtitleEntry::new(text, sound);
        let id = subtitle.id;
        debug!("Subtitle {} added for {sound}", subtitle.text);
        inner.subtitles.push(subtitle);
        Ok(id)
    }

    pub fn remove_subtitle(&self, id: SubtitleId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.subtitles.len();
        inner.subtitles.retain(|subtitle| subtitle.id != id);
        if inner.current_subtitle == Some(id) {
            inner.current_subtitle = None;
            self.emit(QueueEvent::Subtitle(SubtitleEvent::Hidden(id)));
        }
        inner.subtitles.len() != before
    }

    pub fn current_subtitle(&self) -> Option<SubtitleEntry> {
        let inner = self.inner.lock();
        let current = inner.current_subtitle?;
        inner
            .subtitles
            .iter()
            .find(|subtitle| subtitle.id == current)
            .cloned()
    }

    /// Pick the subtitle to display and report the change.
    pub fn update_subtitles(&self) -> Option<SubtitleId> {
        let mut inner = self.inner.lock();
        self.refresh_subtitles(&mut inner)
    }

    fn refresh_subtitles(&self, inner: &mut QueueInner) -> Option<SubtitleId> {
        let mut best = None;
        let mut best_score = 0;

        for candidate in &inner.subtitles {
            let is_current = inner.current_subtitle == Some(candidate.id);
            let score = inner.get(candidate.sound).map_or(0, |entry| {
                subtitle::score(entry, inner.cinematic, is_current)
            });
            if score > best_score {
                best_score = score;
                best = Some(candidate.id);
            }
        }

        if best == inner.current_subtitle {
            if let Some(id) = best {
                self.emit(QueueEvent::Subtitle(SubtitleEvent::Refreshed(id)));
            }
            return best;
        }

        if let Some(old) = inner.current_subtitle {
            self.emit(QueueEvent::Subtitle(SubtitleEvent::Hidden(old)));
        }
        if let Some(new) = best {
            debug!("Showing subtitle {new} (score {best_score})");
            self.emit(QueueEvent::Subtitle(SubtitleEvent::Shown(new)));
        }
        inner.current_subtitle = best;
        best
    }

    fn drop_subtitles_of(&self, inner: &mut QueueInner, sound: EntryId) {
        if let Some(current) = inner.current_subtitle {
            let shown = inner
                .subtitles
                .iter()
                .any(|subtitle| subtitle.id == current && subtitle.sound == sound);
            if shown {
                inner.current_subtitle = None;
                self.emit(QueueEvent::Subtitle(SubtitleEvent::Hidden(current)));
            }
        }
        inner.subtitles.retain(|subtitle| subtitle.sound != sound);
    }

    // ---- Persistence ----

    /// Number of entries written by `save`.
    pub fn count(&self) -> u32 {
        self.inner
            .lock()
            .entries
            .iter()
            .filter(|entry| save::is_persisted(entry))
            .count() as u32
    }

    /// Write the queue state and the persisted entries.
    ///
    /// Counting and writing happen under one lock, so the header always
    /// matches the records that follow.
    pub fn save(&self, buf: &mut impl BufMut) -> u32 {
        let inner = self.inner.lock();
        let persisted: Vec<&SoundEntry> = inner
            .entries
            .iter()
            .filter(|entry| save::is_persisted(entry))
            .collect();

        let header = SaveHeader {
            state: inner.state,
            current_type: inner.current_type,
            entry_count: persisted.len() as u32,
        };
        header.write(buf);
        for entry in persisted {
            save::write_entry_record(entry, buf);
        }

        debug!("Saved sound queue with {} entries", header.entry_count);
        header.entry_count
    }

    /// Restore the queue state from a save.
    ///
    /// Entry records are skipped; restoring them is not supported and is
    /// reported as [`Error::Unsupported`] once the header is applied. The
    /// queue is left untouched when the save is truncated.
    pub fn load(&self, buf: &mut impl Buf) -> Result<()> {
        let header = SaveHeader::read(buf)?;
        save::skip_entry_records(buf, header.entry_count)?;

        {
            let mut inner = self.inner.lock();
            inner.state = header.state;
            inner.current_type = header.current_type;
        }
        warn!(
            "Skipped {} saved sound entries, loading them is not supported",
            header.entry_count
        );
        Err(Error::Unsupported(format!(
            "loading {} saved sound entries",
            header.entry_count
        )))
    }
}
