//! # express-filter
//!
//! Decoder for the delta-coded sound blocks played through the queue.
//!
//! Features:
//! - Pure block decoder, safe to run on any thread without the queue lock
//! - Volume variants applied while decoding
//! - Whole-stream helpers for offline conversion

pub mod decode;
pub mod tables;

pub use decode::{
    decode_all, decode_block, is_out_of_range, BlockDecoder, DecodedSound, FilterOutcome,
    Variant, GUARD_THRESHOLD,
};
