//! # express-queue
//!
//! The sound queue: the single owner of every active sound entry, the slot
//! cache and the subtitle list, shared between the game logic and a
//! maintenance timer.

pub mod events;
pub mod queue;
pub mod subtitle;
pub mod timer;

pub use events::{QueueEvent, SubtitleEvent};
pub use queue::{BlockStatus, CacheAdmission, SoundQueue};
pub use timer::QueueTimer;
