//! # express-cache
//!
//! Fixed-slot buffer cache for the express sound queue.
//!
//! One arena is allocated up front and split into equal slots. Each slot is
//! owned by at most one entry; when every slot is taken, the resident with
//! the lowest value (priority plus volume) is the eviction candidate.
//!
//! The cache only decides and records. Waiting for a victim to become safe
//! to evict is the queue's business, since it owns the lock.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use express_core::{CacheConfig, EntryId, Result, SlotId};
use tracing::{debug, trace, warn};

/// Outcome of asking the cache for room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The entry already owns this slot.
    Resident(SlotId),
    /// A free slot is available.
    Vacant(SlotId),
    /// The cache is full; `victim` is the least valuable resident.
    Evict { victim: EntryId, value: u32 },
    /// The cache is full and nothing resident is worth less than the newcomer.
    Declined { floor: u32 },
    /// The cache is full and every resident is already being evicted.
    Contended,
}

/// Fixed-slot arena cache.
pub struct SoundCache {
    arena: Box<[u8]>,
    owners: Vec<Option<EntryId>>,
    slot_size: usize,
}

impl SoundCache {
    /// Allocate the arena described by `config`.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            "Sound cache: {} slots x {} bytes",
            config.slots, config.slot_size
        );

        Ok(Self {
            arena: vec![0u8; config.arena_size()].into_boxed_slice(),
            owners: vec![None; config.slots],
            slot_size: config.slot_size,
        })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.owners.len()
    }

    pub const fn slot_size(&self) -> usize {
        self.slot_size
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.owners.iter().filter(|owner| owner.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.owners.iter().all(Option::is_some)
    }

    /// Slot owned by `id`, if resident.
    pub fn slot_of(&self, id: EntryId) -> Option<SlotId> {
        self.owners
            .iter()
            .position(|owner| *owner == Some(id))
            .map(SlotId)
    }

    pub fn owner_of(&self, slot: SlotId) -> Option<EntryId> {
        self.owners.get(slot.index()).copied().flatten()
    }

    /// Resident entries in slot order.
    pub fn residents(&self) -> impl Iterator<Item = (SlotId, EntryId)> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter_map(|(index, owner)| owner.map(|id| (SlotId(index), id)))
    }

    /// Byte offset of a slot inside the arena.
    pub const fn offset(&self, slot: SlotId) -> usize {
        self.slot_size * slot.index()
    }

    /// Decide how `id` with `priority` can get a slot.
    ///
    /// `value_of` returns the eviction value of a resident, or `None` when
    /// the resident is already on its way out. The first resident holding the
    /// minimum value is chosen.
    pub fn admit(
        &self,
        id: EntryId,
        priority: u32,
        value_of: impl Fn(EntryId) -> Option<u32>,
    ) -> Admission {
        if let Some(slot) = self.slot_of(id) {
            return Admission::Resident(slot);
        }

        if let Some(slot) = self.free_slot() {
            return Admission::Vacant(slot);
        }

        let mut candidate: Option<(EntryId, u32)> = None;
        for (_, resident) in self.residents() {
            if let Some(value) = value_of(resident) {
                if candidate.map_or(true, |(_, lowest)| value < lowest) {
                    candidate = Some((resident, value));
                }
            }
        }

        match candidate {
            None => Admission::Contended,
            Some((_, floor)) if priority <= floor => Admission::Declined { floor },
            Some((victim, value)) => Admission::Evict { victim, value },
        }
    }

    /// Give `id` the lowest free slot.
    ///
    /// Returns the slot it already owns when resident, and `None` when the
    /// cache is full.
    pub fn insert(&mut self, id: EntryId) -> Option<SlotId> {
        if let Some(slot) = self.slot_of(id) {
            return Some(slot);
        }

        let slot = self.free_slot()?;
        self.owners[slot.index()] = Some(id);
        trace!("Entry {id} cached in {slot}");
        Some(slot)
    }

    /// Free the slot owned by `id`.
    pub fn release(&mut self, id: EntryId) -> Option<SlotId> {
        let Some(slot) = self.slot_of(id) else {
            warn!("Entry {id} released but not cached");
            return None;
        };

        self.owners[slot.index()] = None;
        trace!("Entry {id} released {slot}");
        Some(slot)
    }

    /// Hand the victim's slot over to `newcomer`.
    pub fn evict(&mut self, victim: EntryId, newcomer: EntryId) -> Option<SlotId> {
        let slot = self.slot_of(victim)?;
        self.owners[slot.index()] = Some(newcomer);
        debug!("Evicted entry {victim} from {slot} for {newcomer}");
        Some(slot)
    }

    pub fn slot_bytes(&self, slot: SlotId) -> &[u8] {
        let start = self.offset(slot);
        &self.arena[start..start + self.slot_size]
    }

    pub fn slot_bytes_mut(&mut self, slot: SlotId) -> &mut [u8] {
        let start = self.offset(slot);
        &mut self.arena[start..start + self.slot_size]
    }

    /// Drop every resident.
    pub fn clear(&mut self) {
        self.owners.fill(None);
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            resident: self.len(),
            capacity: self.capacity(),
            slot_size: self.slot_size,
        }
    }

    fn free_slot(&self) -> Option<SlotId> {
        self.owners.iter().position(Option::is_none).map(SlotId)
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of occupied slots.
    pub resident: usize,
    /// Total number of slots.
    pub capacity: usize,
    /// Size of each slot in bytes.
    pub slot_size: usize,
}

impl CacheStats {
    /// Bytes held by resident entries, in kilobytes.
    #[allow(clippy::cast_precision_loss)]
    pub fn resident_kb(&self) -> f64 {
        (self.resident * self.slot_size) as f64 / 1024.0
    }
}
