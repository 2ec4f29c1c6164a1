//! Little-endian save-state codec for the sound queue.
//!
//! Layout: `u32 state`, `u32 current_type`, `u32 entry_count`, then
//! `entry_count` fixed-size entry records.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::types::{name_stem, SoundEntry, SoundType};

/// Size of one serialized entry record.
pub const ENTRY_RECORD_SIZE: usize = 64;

/// Bytes reserved for the NUL-padded name inside a record.
const NAME_FIELD_SIZE: usize = 32;

/// Name pattern of the entries that are persisted.
pub const PERSISTED_NAME_PATTERN: &str = "NISSND?";

/// Fixed header preceding the entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveHeader {
    pub state: u32,
    pub current_type: SoundType,
    pub entry_count: u32,
}

impl SaveHeader {
    pub const SIZE: usize = 12;

    pub fn write(&self, buf: &mut impl BufMut) {
        buf.put_u32_le(self.state);
        buf.put_u32_le(u32::from(self.current_type.value()));
        buf.put_u32_le(self.entry_count);
    }

    pub fn read(buf: &mut impl Buf) -> Result<Self> {
        ensure_remaining(buf, Self::SIZE)?;
        let state = buf.get_u32_le();
        let current_type = buf.get_u32_le();
        let entry_count = buf.get_u32_le();

        let current_type = u8::try_from(current_type)
            .map(SoundType::new)
            .map_err(|_| Error::InvalidSave(format!("sound type {current_type} out of range")))?;

        Ok(Self {
            state,
            current_type,
            entry_count,
        })
    }
}

/// Whether an entry belongs in the save file.
pub fn is_persisted(entry: &SoundEntry) -> bool {
    crate::types::matches_pattern(PERSISTED_NAME_PATTERN, name_stem(entry.name()))
}

/// Write one entry record.
///
/// Eight `u32` fields (status word, type, entity, time, priority, volume,
/// slot index or `u32::MAX`, reserved) followed by the NUL-padded name.
pub fn write_entry_record(entry: &SoundEntry, buf: &mut impl BufMut) {
    buf.put_u32_le(entry.status_word());
    buf.put_u32_le(u32::from(entry.sound_type().value()));
    buf.put_u32_le(entry.entity().0);
    buf.put_u32_le(entry.time());
    buf.put_u32_le(entry.priority());
    buf.put_u32_le(u32::from(entry.volume()));
    buf.put_u32_le(
        entry
            .slot()
            .and_then(|slot| u32::try_from(slot.index()).ok())
            .unwrap_or(u32::MAX),
    );
    buf.put_u32_le(0);

    let mut name = [0u8; NAME_FIELD_SIZE];
    let bytes = entry.name().as_bytes();
    // Keep at least one terminating NUL.
    let len = bytes.len().min(NAME_FIELD_SIZE - 1);
    name[..len].copy_from_slice(&bytes[..len]);
    buf.put_slice(&name);
}

/// Skip `count` entry records.
pub fn skip_entry_records(buf: &mut impl Buf, count: u32) -> Result<()> {
    let needed = count as usize * ENTRY_RECORD_SIZE;
    ensure_remaining(buf, needed)?;
    buf.advance(needed);
    Ok(())
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        return Err(Error::Truncated {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityIndex;
    use bytes::BytesMut;

    #[test]
    fn test_header_layout() {
        let header = SaveHeader {
            state: 3,
            current_type: SoundType::DEFAULT,
            entry_count: 2,
        };
        let mut buf = BytesMut::new();
        header.write(&mut buf);
        assert_eq!(&buf[..], &[3, 0, 0, 0, 16, 0, 0, 0, 2, 0, 0, 0]);

        let parsed = SaveHeader::read(&mut buf.freeze()).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_header_truncated() {
        let mut buf = bytes::Bytes::from_static(&[1, 0, 0, 0]);
        assert!(matches!(
            SaveHeader::read(&mut buf),
            Err(Error::Truncated {
                needed: 12,
                available: 4
            })
        ));
    }

    #[test]
    fn test_header_rejects_wide_sound_type() {
        let mut buf = bytes::Bytes::from_static(&[0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            SaveHeader::read(&mut buf),
            Err(Error::InvalidSave(message)) if message.contains("256")
        ));
    }

    #[test]
    fn test_entry_record_size() {
        let entry = SoundEntry::new("NISSND1", SoundType::FIRST, 40)
            .with_entity(EntityIndex::new(9))
            .with_volume(12);
        let mut buf = BytesMut::new();
        write_entry_record(&entry, &mut buf);
        assert_eq!(buf.len(), ENTRY_RECORD_SIZE);
        assert_eq!(&buf[8..12], &9u32.to_le_bytes());
        assert_eq!(&buf[32..43], b"NISSND1.SND");
        assert_eq!(buf[43], 0);
    }

    #[test]
    fn test_persisted_pattern() {
        let nis = SoundEntry::new("NISSND4", SoundType::FIRST, 1);
        let other = SoundEntry::new("NISSND44", SoundType::FIRST, 1);
        let ambient = SoundEntry::new("BUMP", SoundType::FIRST, 1);
        assert!(is_persisted(&nis));
        assert!(!is_persisted(&other));
        assert!(!is_persisted(&ambient));
    }

    #[test]
    fn test_skip_records() {
        let mut buf = bytes::Bytes::from(vec![0u8; ENTRY_RECORD_SIZE * 2 + 1]);
        skip_entry_records(&mut buf, 2).unwrap();
        assert_eq!(buf.remaining(), 1);
        assert!(skip_entry_records(&mut buf, 1).is_err());
    }
}
