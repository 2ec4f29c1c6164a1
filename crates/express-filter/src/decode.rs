//! Differential block decoding.
//!
//! Each block starts with a seed sample and a step row, followed by
//! nibble-packed deltas. Every nibble picks a delta from the current step
//! row and the row to use for the next nibble.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use express_core::{Error, Result, SoundStream, BLOCK_HEADER_SIZE, BLOCK_SIZE, SAMPLES_PER_BLOCK};
use tracing::{debug, trace};

use crate::tables::{DELTA_TABLE, STEP_TABLE, VOLUME_SCALE, VOLUME_SHIFT};

/// Largest step position a block header may carry.
pub const GUARD_THRESHOLD: i32 = 0x1600;

const SAMPLE_MIN: i32 = -32767;
const SAMPLE_MAX: i32 = 32767;

/// Result of decoding one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Samples were written to the output buffer.
    Decoded,
    /// The header's step row is out of range; nothing was written.
    Skipped,
}

/// Volume variant selecting the output scale and shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variant(u8);

impl Variant {
    /// Mutes the output.
    pub const SILENT: Self = Self(0);
    /// Passes samples through unscaled.
    pub const FULL: Self = Self(16);

    /// Variant for an entry volume.
    ///
    /// The volume field holds 5 bits but only 17 variants exist; anything
    /// above 16 plays at full volume.
    pub fn from_volume(volume: u8) -> Self {
        Self(volume.min(Self::FULL.0))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    fn scale(self) -> i32 {
        VOLUME_SCALE[self.index()]
    }

    fn shift(self) -> u32 {
        VOLUME_SHIFT[self.index()]
    }
}

/// Whether a block's header carries a step row beyond the tables.
pub fn is_out_of_range(block: &[u8]) -> bool {
    block
        .get(1)
        .is_some_and(|&row| (i32::from(row) << 6) > GUARD_THRESHOLD)
}

/// Decode one compressed block into `out`.
///
/// `block` must hold at least [`BLOCK_SIZE`] bytes and `out` at least
/// [`SAMPLES_PER_BLOCK`] samples. A block whose header fails the range guard
/// is reported as [`FilterOutcome::Skipped`] and leaves `out` untouched.
pub fn decode_block(block: &[u8], variant: Variant, out: &mut [i16]) -> Result<FilterOutcome> {
    if block.len() < BLOCK_SIZE {
        return Err(Error::InvalidBlock(format!(
            "block holds {} bytes, expected {BLOCK_SIZE}",
            block.len()
        )));
    }
    if out.len() < SAMPLES_PER_BLOCK {
        return Err(Error::InvalidBlock(format!(
            "output holds {} samples, expected {SAMPLES_PER_BLOCK}",
            out.len()
        )));
    }

    if is_out_of_range(block) {
        trace!("Skipping block with step row {:#04x}", block[1]);
        return Ok(FilterOutcome::Skipped);
    }

    let scale = variant.scale();
    let shift = variant.shift();

    let mut sample = i32::from(block[0]);
    let mut step = i32::from(block[1]) << 6;

    let payload = &block[BLOCK_HEADER_SIZE..BLOCK_SIZE];
    for (byte, pair) in payload.iter().zip(out.chunks_exact_mut(2)) {
        for (nibble, slot) in [byte >> 4, byte & 0x0F].into_iter().zip(pair) {
            // Step positions advance in units of 64 per row.
            let index = (step >> 2) as usize + usize::from(nibble);
            step = STEP_TABLE[index];
            sample = (DELTA_TABLE[index] + sample).clamp(SAMPLE_MIN, SAMPLE_MAX);
            *slot = ((scale * sample) >> shift) as i16;
        }
    }

    Ok(FilterOutcome::Decoded)
}

/// PCM produced from a whole sound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedSound {
    pub samples: Vec<i16>,
    /// Blocks dropped by the range guard.
    pub skipped_blocks: usize,
}

impl DecodedSound {
    /// Number of blocks represented, decoded or skipped.
    pub const fn block_count(&self) -> usize {
        self.samples.len() / SAMPLES_PER_BLOCK + self.skipped_blocks
    }
}

/// Decode a whole in-memory sound, block by block.
///
/// A short trailing block is zero-padded. Skipped blocks contribute no
/// samples.
pub fn decode_all(data: &[u8], variant: Variant) -> Result<DecodedSound> {
    let mut decoded = DecodedSound {
        samples: Vec::with_capacity(data.len().div_ceil(BLOCK_SIZE) * SAMPLES_PER_BLOCK),
        skipped_blocks: 0,
    };

    let mut block = [0u8; BLOCK_SIZE];
    let mut pcm = [0i16; SAMPLES_PER_BLOCK];

    for chunk in data.chunks(BLOCK_SIZE) {
        block[..chunk.len()].copy_from_slice(chunk);
        block[chunk.len()..].fill(0);

        match decode_block(&block, variant, &mut pcm)? {
            FilterOutcome::Decoded => decoded.samples.extend_from_slice(&pcm),
            FilterOutcome::Skipped => decoded.skipped_blocks += 1,
        }
    }

    debug!(
        "Decoded {} samples ({} blocks skipped)",
        decoded.samples.len(),
        decoded.skipped_blocks
    );
    Ok(decoded)
}

/// Decoder pulling blocks from a [`SoundStream`].
pub struct BlockDecoder {
    variant: Variant,
    block: Box<[u8; BLOCK_SIZE]>,
    pcm: Box<[i16; SAMPLES_PER_BLOCK]>,
    blocks: u64,
}

impl BlockDecoder {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            block: Box::new([0u8; BLOCK_SIZE]),
            pcm: Box::new([0i16; SAMPLES_PER_BLOCK]),
            blocks: 0,
        }
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// Blocks pulled from streams so far.
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Decode the next block of `stream`.
    ///
    /// Returns `Ok(None)` at end of stream, `Ok(Some(&[]))` for a block
    /// dropped by the range guard, and the decoded samples otherwise.
    pub fn decode_next(&mut self, stream: &mut dyn SoundStream) -> Result<Option<&[i16]>> {
        if !stream.next_block(&mut self.block[..])? {
            return Ok(None);
        }
        self.blocks += 1;

        match decode_block(&self.block[..], self.variant, &mut self.pcm[..])? {
            FilterOutcome::Decoded => Ok(Some(&self.pcm[..])),
            FilterOutcome::Skipped => Ok(Some(&self.pcm[..0])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use express_core::{MemoryStream, BLOCK_PAYLOAD_SIZE};
    use proptest::prelude::*;

    fn block_with(seed: u8, row: u8, fill: u8) -> Vec<u8> {
        let mut block = vec![fill; BLOCK_SIZE];
        block[0] = seed;
        block[1] = row;
        block
    }

    #[test]
    fn test_first_samples_by_hand() {
        // Row 0, nibble 1: delta +2, next row 0.
        let block = block_with(16, 0, 0x11);
        let mut out = [0i16; SAMPLES_PER_BLOCK];

        let outcome = decode_block(&block, Variant::FULL, &mut out).unwrap();
        assert_eq!(outcome, FilterOutcome::Decoded);
        assert_eq!(&out[..4], &[18, 20, 22, 24]);
    }

    #[test]
    fn test_negative_nibbles() {
        // Nibble 9 is the negative counterpart of nibble 1.
        let block = block_with(16, 0, 0x99);
        let mut out = [0i16; SAMPLES_PER_BLOCK];

        decode_block(&block, Variant::FULL, &mut out).unwrap();
        assert_eq!(&out[..4], &[14, 12, 10, 8]);
    }

    #[test]
    fn test_silent_variant() {
        let block = block_with(200, 10, 0x77);
        let mut out = [1i16; SAMPLES_PER_BLOCK];

        decode_block(&block, Variant::SILENT, &mut out).unwrap();
        assert!(out.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_scaled_variant() {
        let block = block_with(16, 0, 0x11);
        let mut full = [0i16; SAMPLES_PER_BLOCK];
        let mut half = [0i16; SAMPLES_PER_BLOCK];

        decode_block(&block, Variant::FULL, &mut full).unwrap();
        // Variant 8: scale 1, shift 1.
        decode_block(&block, Variant::from_volume(8), &mut half).unwrap();
        for (f, h) in full.iter().zip(half.iter()) {
            assert_eq!(*h, *f >> 1);
        }
    }

    #[test]
    fn test_volume_above_table_clamps() {
        assert_eq!(Variant::from_volume(31), Variant::FULL);
        assert_eq!(Variant::from_volume(17), Variant::FULL);
        assert_eq!(Variant::from_volume(3).index(), 3);
    }

    #[test]
    fn test_guard_boundary() {
        let mut out = [7i16; SAMPLES_PER_BLOCK];

        // 0x58 << 6 == 0x1600: the last row that decodes.
        let last = block_with(0, 0x58, 0xFF);
        assert!(!is_out_of_range(&last));
        assert_eq!(
            decode_block(&last, Variant::FULL, &mut out).unwrap(),
            FilterOutcome::Decoded
        );

        out.fill(7);
        let first_bad = block_with(0, 0x59, 0xFF);
        assert!(is_out_of_range(&first_bad));
        assert_eq!(
            decode_block(&first_bad, Variant::FULL, &mut out).unwrap(),
            FilterOutcome::Skipped
        );
        assert!(out.iter().all(|&s| s == 7));
    }

    #[test]
    fn test_short_buffers_rejected() {
        let mut out = [0i16; SAMPLES_PER_BLOCK];
        assert!(decode_block(&[0u8; 10], Variant::FULL, &mut out).is_err());

        let block = block_with(0, 0, 0);
        let mut short = [0i16; 4];
        assert!(decode_block(&block, Variant::FULL, &mut short).is_err());
    }

    #[test]
    fn test_decode_all_counts_blocks() {
        let mut data = block_with(0, 0, 0x11);
        data.extend(block_with(0, 0x60, 0x11));
        data.extend_from_slice(&[0, 0, 0x11]);

        let decoded = decode_all(&data, Variant::FULL).unwrap();
        assert_eq!(decoded.samples.len(), 2 * SAMPLES_PER_BLOCK);
        assert_eq!(decoded.skipped_blocks, 1);
        assert_eq!(decoded.block_count(), 3);
    }

    #[test]
    fn test_block_decoder_over_stream() {
        let mut data = block_with(16, 0, 0x11);
        data.extend(block_with(0, 0x70, 0));
        let mut stream = MemoryStream::new(data);
        let mut decoder = BlockDecoder::new(Variant::FULL);

        let first = decoder.decode_next(&mut stream).unwrap().unwrap();
        assert_eq!(first.len(), SAMPLES_PER_BLOCK);
        assert_eq!(first[0], 18);

        let skipped = decoder.decode_next(&mut stream).unwrap().unwrap();
        assert!(skipped.is_empty());

        assert!(decoder.decode_next(&mut stream).unwrap().is_none());
        assert_eq!(decoder.blocks(), 2);
    }

    #[test]
    fn test_concurrent_decoding_agrees() {
        let block = block_with(90, 40, 0x3C);
        let mut expected = [0i16; SAMPLES_PER_BLOCK];
        decode_block(&block, Variant::FULL, &mut expected).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let mut out = [0i16; SAMPLES_PER_BLOCK];
                        decode_block(&block, Variant::FULL, &mut out).unwrap();
                        out
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    fn arbitrary_block() -> impl Strategy<Value = Vec<u8>> {
        (0u8..=0x58, proptest::collection::vec(any::<u8>(), BLOCK_PAYLOAD_SIZE)).prop_map(
            |(row, payload)| {
                let mut block = vec![0u8; BLOCK_HEADER_SIZE];
                block[1] = row;
                block.extend(payload);
                block
            },
        )
    }

    proptest! {
        #[test]
        fn prop_decoding_is_deterministic(
            mut block in arbitrary_block(),
            seed in any::<u8>(),
            volume in 0u8..32,
        ) {
            block[0] = seed;
            let variant = Variant::from_volume(volume);
            let mut first = [0i16; SAMPLES_PER_BLOCK];
            let mut second = [0i16; SAMPLES_PER_BLOCK];

            decode_block(&block, variant, &mut first).unwrap();
            decode_block(&block, variant, &mut second).unwrap();
            prop_assert_eq!(&first[..], &second[..]);
        }

        #[test]
        fn prop_samples_stay_in_range(mut block in arbitrary_block(), seed in any::<u8>()) {
            block[0] = seed;
            let mut out = [0i16; SAMPLES_PER_BLOCK];

            let outcome = decode_block(&block, Variant::FULL, &mut out).unwrap();
            prop_assert_eq!(outcome, FilterOutcome::Decoded);
            prop_assert!(out.iter().all(|&s| (-32767..=32767).contains(&s)));
        }

        #[test]
        fn prop_guard_skips_high_rows(row in 0x59u8..=0xFF, fill in any::<u8>()) {
            let block = block_with(0, row, fill);
            let mut out = [0i16; SAMPLES_PER_BLOCK];
            prop_assert_eq!(
                decode_block(&block, Variant::FULL, &mut out).unwrap(),
                FilterOutcome::Skipped
            );
        }
    }
}
