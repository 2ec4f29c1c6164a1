//! Subtitle selection.

use express_core::{EntryState, SoundEntry};

/// Quietest volume at which a sound may carry a subtitle.
const MIN_VOLUME: u8 = 6;

/// Priority a sound needs to show its subtitle during a cinematic.
const CINEMATIC_MIN_PRIORITY: u32 = 90;

/// Bonus the displayed subtitle gets so equal scores do not flicker.
pub const CURRENT_BONUS: u32 = 4;

/// Display score of a subtitle whose sound is `entry`.
///
/// Zero means the subtitle cannot be shown.
pub fn score(entry: &SoundEntry, cinematic: bool, is_current: bool) -> u32 {
    let eligible = entry.state() == EntryState::Playing
        && !entry.is_leaving()
        && entry.time() > 0
        && entry.volume() >= MIN_VOLUME
        && (!cinematic || entry.priority() >= CINEMATIC_MIN_PRIORITY);

    if !eligible {
        return 0;
    }

    let score = entry.priority().saturating_add(u32::from(entry.volume()));
    if is_current {
        score.saturating_add(CURRENT_BONUS)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use express_core::{MemoryStream, SoundType};

    fn playing(priority: u32, volume: u8) -> SoundEntry {
        let mut entry = SoundEntry::new("TALK", SoundType::FIRST, priority)
            .with_volume(volume)
            .with_stream(MemoryStream::new(vec![0u8; 4]));
        entry.play();
        entry.advance_time();
        entry
    }

    #[test]
    fn test_score_of_playing_entry() {
        let entry = playing(20, 10);
        assert_eq!(score(&entry, false, false), 30);
        assert_eq!(score(&entry, false, true), 34);
    }

    #[test]
    fn test_ineligible_entries_score_zero() {
        let fresh = SoundEntry::new("TALK", SoundType::FIRST, 20);
        assert_eq!(score(&fresh, false, true), 0);

        let quiet = playing(20, 5);
        assert_eq!(score(&quiet, false, false), 0);

        let mut leaving = playing(20, 10);
        leaving.set_leaving(true);
        assert_eq!(score(&leaving, false, false), 0);

        let mut unplayed = SoundEntry::new("TALK", SoundType::FIRST, 20);
        unplayed.play();
        assert_eq!(score(&unplayed, false, false), 0);
    }

    #[test]
    fn test_cinematic_needs_high_priority() {
        assert_eq!(score(&playing(89, 10), true, false), 0);
        assert_eq!(score(&playing(90, 10), true, false), 100);
    }
}
