//! `express decode`: whole-file decode to raw PCM.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::path::Path;

use anyhow::{Context, Result};
use bytes::{BufMut, BytesMut};
use express_filter::{decode_all, DecodedSound, Variant};
use tracing::info;

/// Decode `input` at `volume` and write s16le samples to `output`.
pub fn run(input: &Path, output: &Path, volume: u8) -> Result<DecodedSound> {
    let data = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let sound = decode_all(&data, Variant::from_volume(volume))
        .with_context(|| format!("decoding {}", input.display()))?;

    let mut pcm = BytesMut::with_capacity(sound.samples.len() * 2);
    for &sample in &sound.samples {
        pcm.put_i16_le(sample);
    }
    std::fs::write(output, &pcm).with_context(|| format!("writing {}", output.display()))?;

    info!(
        "Decoded {} blocks ({} skipped) from {} into {}",
        sound.block_count(),
        sound.skipped_blocks,
        input.display(),
        output.display()
    );
    Ok(sound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use express_core::{BLOCK_SIZE, SAMPLES_PER_BLOCK};

    #[test]
    fn test_decode_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("TALK.SND");
        let output = dir.path().join("talk.raw");

        let mut data = vec![0x33u8; BLOCK_SIZE * 2];
        data[1] = 0;
        data[BLOCK_SIZE + 1] = 0x60;
        std::fs::write(&input, &data).unwrap();

        let sound = run(&input, &output, 16).unwrap();
        assert_eq!(sound.skipped_blocks, 1);

        let written = std::fs::read(&output).unwrap();
        assert_eq!(written.len(), sound.samples.len() * 2);
        assert!(written.len() >= SAMPLES_PER_BLOCK * 2);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&dir.path().join("NONE.SND"), &dir.path().join("out"), 16).unwrap_err();
        assert!(err.to_string().contains("NONE.SND"));
    }
}
