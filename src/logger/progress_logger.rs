use std::io::Write;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::{sleep_duration_millis, MAX_PROGRESS_STEP};

/// Fake progress bar shown while an analysis "runs".
///
/// Progress advances by a random step per tick until it reaches 100%, then
/// waits `settle_ms`. The wait is bounded and cannot be cancelled.
pub struct ProgressLogger {
    message: String,
    tick_ms: u64,
    settle_ms: u64,
}

impl ProgressLogger {
    pub fn new(message: String, tick_ms: u64, settle_ms: u64) -> Self {
        Self {
            message,
            tick_ms,
            settle_ms,
        }
    }

    /// Runs the simulation to completion and returns the number of ticks it took.
    pub async fn simulate(&self) -> usize {
        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel::<u32>();
        let tick_ms = self.tick_ms;

        let driver: JoinHandle<usize> = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut interval = tokio::time::interval(sleep_duration_millis(tick_ms.max(1)));
            let mut progress = 0u32;
            let mut ticks = 0usize;

            while progress < 100 {
                interval.tick().await;
                progress = (progress + rng.gen_range(0..=MAX_PROGRESS_STEP)).min(100);
                ticks += 1;
                if progress_tx.send(progress).is_err() {
                    break;
                }
            }
            ticks
        });

        while let Some(progress) = progress_rx.recv().await {
            self.draw(progress);
        }

        let ticks = driver.await.unwrap_or_default();
        tokio::time::sleep(sleep_duration_millis(self.settle_ms)).await;
        eprint!("\r\x1b[K");
        let _ = std::io::stderr().flush();
        ticks
    }

    fn draw(&self, progress: u32) {
        let width = 30usize;
        let filled = (progress as usize * width) / 100;
        eprint!(
            "\r{} [{}{}] {:>3}%",
            self.message,
            "█".repeat(filled),
            "░".repeat(width - filled),
            progress
        );
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulation_always_completes() {
        let logger = ProgressLogger::new("Analyzing".to_string(), 1, 0);
        let ticks = logger.simulate().await;
        assert!(ticks >= 7);
    }
}
