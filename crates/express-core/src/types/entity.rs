//! Identity tags used to look sounds up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of the game entity a sound belongs to.
///
/// The entity table itself belongs to game logic; the queue only compares
/// indices. Index 0 is the player and doubles as the "no owner" sentinel.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct EntityIndex(pub u32);

impl EntityIndex {
    /// The player, also used when a sound has no owner.
    pub const PLAYER: Self = Self(0);

    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl fmt::Display for EntityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_player() {
            f.write_str("player")
        } else {
            write!(f, "entity#{}", self.0)
        }
    }
}

/// Categorical tag grouping sounds that are reset together.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct SoundType(pub u8);

impl SoundType {
    /// No category; also the "unspecified" marker for paired resets.
    pub const NONE: Self = Self(0);
    /// First foreground channel, processed and reset as a unit.
    pub const FIRST: Self = Self(1);
    /// Second foreground channel.
    pub const SECOND: Self = Self(2);
    /// Category the queue starts in.
    pub const DEFAULT: Self = Self(16);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_sentinel() {
        assert!(EntityIndex::PLAYER.is_player());
        assert!(EntityIndex::default().is_player());
        assert!(!EntityIndex::new(7).is_player());
        assert_eq!(EntityIndex::new(7).to_string(), "entity#7");
    }

    #[test]
    fn test_sound_type_none() {
        assert!(SoundType::NONE.is_none());
        assert!(!SoundType::DEFAULT.is_none());
        assert_eq!(SoundType::DEFAULT.value(), 16);
    }
}
