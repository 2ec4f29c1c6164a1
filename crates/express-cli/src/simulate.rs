//! `express simulate`: drive a sound queue over real files.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use express_core::{
    EntryId, EntrySnapshot, QueueConfig, ReaderStream, SoundEntry, SoundType, SAMPLES_PER_BLOCK,
};
use express_queue::{BlockStatus, QueueEvent, QueueTimer, SoundQueue, SubtitleEvent};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Priority of the first queued file; later files rank higher.
const BASE_PRIORITY: u32 = 10;

/// What happened over a simulation run.
#[derive(Debug, Default, Serialize)]
pub struct SimulationReport {
    pub decoded_blocks: u64,
    pub skipped_blocks: u64,
    pub finished: usize,
    pub evictions: usize,
    pub declined: usize,
    /// Entries still queued at the end.
    pub entries: Vec<EntrySnapshot>,
}

/// Queue `files`, play them and decode up to `ticks` rounds of blocks.
pub fn run(files: &[PathBuf], ticks: u32, config: &QueueConfig) -> Result<SimulationReport> {
    let queue = Arc::new(SoundQueue::new(config.cache)?);
    let events = queue.subscribe();

    let mut ids = Vec::with_capacity(files.len());
    for (rank, path) in files.iter().enumerate() {
        let id = queue_file(&queue, path, BASE_PRIORITY + rank as u32)?;
        ids.push(id);
    }

    let mut timer = QueueTimer::spawn(Arc::clone(&queue), config.tick_interval())?;
    // The first pass opens the streams.
    queue.maintain();
    for path in files {
        queue.process_named(&file_name(path));
    }

    let mut report = SimulationReport::default();
    let mut pcm = vec![0i16; SAMPLES_PER_BLOCK];

    for tick in 0..ticks {
        let mut playing = Vec::with_capacity(ids.len());
        for id in ids {
            match queue.filter_entry(id, &mut pcm) {
                Ok(BlockStatus::Decoded) => {
                    report.decoded_blocks += 1;
                    playing.push(id);
                }
                Ok(BlockStatus::Skipped) => {
                    report.skipped_blocks += 1;
                    playing.push(id);
                }
                Ok(BlockStatus::Finished) => report.finished += 1,
                Err(e) if e.is_recoverable() => debug!("{id} dropped: {e}"),
                Err(e) => return Err(e).context("filtering queued sound"),
            }
        }
        ids = playing;

        for event in events.try_iter() {
            log_event(&event, &mut report);
        }

        if ids.is_empty() {
            debug!("All sounds finished after {} ticks", tick + 1);
            break;
        }
        std::thread::sleep(config.tick_interval());
    }

    timer.shutdown();
    queue.maintain();
    for event in events.try_iter() {
        log_event(&event, &mut report);
    }

    report.entries = queue.entries();
    info!(
        "Simulation done: {} blocks decoded, {} skipped, {} sounds finished",
        report.decoded_blocks, report.skipped_blocks, report.finished
    );
    Ok(report)
}

fn queue_file(queue: &SoundQueue, path: &Path, priority: u32) -> Result<EntryId> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let name = file_name(path);

    let entry = SoundEntry::new(&name, SoundType::FIRST, priority)
        .with_stream(ReaderStream::new(BufReader::new(file)));
    let id = queue.add(entry);
    queue.add_subtitle(name, id)?;
    Ok(id)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn log_event(event: &QueueEvent, report: &mut SimulationReport) {
    match event {
        QueueEvent::Evicted {
            victim,
            newcomer,
            slot,
        } => {
            report.evictions += 1;
            info!("{newcomer} took {slot} from {victim}");
        }
        QueueEvent::CacheDeclined { id, floor } => {
            report.declined += 1;
            warn!("{id} plays uncached (cache floor {floor})");
        }
        QueueEvent::Subtitle(SubtitleEvent::Shown(id)) => info!("Subtitle {id} shown"),
        QueueEvent::Subtitle(SubtitleEvent::Hidden(id)) => info!("Subtitle {id} hidden"),
        other => debug!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use express_core::{CacheConfig, BLOCK_SIZE};

    fn write_sound(dir: &Path, name: &str, blocks: usize) -> PathBuf {
        let path = dir.join(name);
        let mut data = vec![0x21u8; BLOCK_SIZE * blocks];
        for block in data.chunks_mut(BLOCK_SIZE) {
            block[1] = 0;
        }
        std::fs::write(&path, data).unwrap();
        path
    }

    fn fast_config(slots: usize) -> QueueConfig {
        QueueConfig {
            tick_interval_ms: 1,
            cache: CacheConfig {
                slots,
                ..CacheConfig::default()
            },
        }
    }

    #[test]
    fn test_simulation_plays_files_to_the_end() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write_sound(dir.path(), "ONE.SND", 2),
            write_sound(dir.path(), "TWO.SND", 3),
        ];

        let report = run(&files, 10, &fast_config(6)).unwrap();
        assert_eq!(report.decoded_blocks, 5);
        assert_eq!(report.skipped_blocks, 0);
        assert_eq!(report.finished, 2);
        assert!(report.entries.is_empty());
    }

    #[test]
    fn test_simulation_with_small_cache() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write_sound(dir.path(), "LOW.SND", 2),
            write_sound(dir.path(), "HIGH.SND", 2),
        ];

        // LOW (priority 10 + volume 16) owns the single slot, so HIGH (11)
        // plays uncached until LOW finishes and frees it.
        let report = run(&files, 10, &fast_config(1)).unwrap();
        assert_eq!(report.decoded_blocks, 4);
        assert_eq!(report.declined, 2);
        assert_eq!(report.evictions, 0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("NONE.SND");
        assert!(run(&[missing], 1, &fast_config(6)).is_err());
    }
}
