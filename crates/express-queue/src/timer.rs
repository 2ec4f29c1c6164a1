//! Background maintenance timer.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use express_core::Result;
use tracing::{error, info};

use crate::queue::SoundQueue;

/// Worker thread that runs the queue's maintenance pass on a fixed cadence.
///
/// Each tick calls [`SoundQueue::maintain`] and then
/// [`SoundQueue::update_subtitles`]. The thread stops on [`shutdown`] or
/// when the timer is dropped.
///
/// [`shutdown`]: QueueTimer::shutdown
pub struct QueueTimer {
    shutdown_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl QueueTimer {
    pub fn spawn(queue: Arc<SoundQueue>, interval: Duration) -> Result<Self> {
        let (shutdown_tx, shutdown_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("sound-queue-timer".to_string())
            .spawn(move || {
                info!("Sound queue timer started ({} ms)", interval.as_millis());
                loop {
                    match shutdown_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            queue.maintain();
                            queue.update_subtitles();
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                info!("Sound queue timer stopped");
            })?;

        Ok(Self {
            shutdown_tx,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the worker and wait for it to exit.
    pub fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        let _ = self.shutdown_tx.send(());
        if handle.join().is_err() {
            error!("Sound queue timer panicked");
        }
    }
}

impl Drop for QueueTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::QueueEvent;
    use express_core::{CacheConfig, SoundEntry, SoundType};

    #[test]
    fn test_timer_runs_maintenance() {
        let queue = Arc::new(SoundQueue::new(CacheConfig::default()).unwrap());
        let events = queue.subscribe();

        // No stream attached, so the first pass drops it.
        let id = queue.add(SoundEntry::new("BUMP", SoundType::FIRST, 1));
        assert!(matches!(events.recv().unwrap(), QueueEvent::Added { .. }));

        let mut timer = QueueTimer::spawn(Arc::clone(&queue), Duration::from_millis(5)).unwrap();
        assert!(timer.is_running());

        let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(event, QueueEvent::Removed(id));
        assert!(queue.is_empty());

        timer.shutdown();
        assert!(!timer.is_running());
        timer.shutdown();
    }
}
