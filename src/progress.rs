//! Progress reporting and cooperative cancellation hooks for the batch driver.
//!
//! Both hooks take `&self` and are `Sync`, so the same handle serves the serial
//! sweep and the rayon workers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::info;


/// Receives one tick per processed unit of work.
pub trait Progress: Sync {
    /// Announces the number of ticks the computation will emit.
    fn start(&self, total: usize);
    fn increment(&self);
}

/// Polled by the batch driver between cells.
pub trait Cancel: Sync {
    fn is_cancelled(&self) -> bool;
}


/// Discards every tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&self, _total: usize) {}
    fn increment(&self) {}
}


/// Counts ticks and logs the completed percentage every `step_percent`.
#[derive(Debug)]
pub struct LogProgress {
    total: AtomicUsize,
    done: AtomicUsize,
    step_percent: usize,
    verbose: bool,
}

impl LogProgress {

    pub fn new(step_percent: usize, verbose: bool) -> Self {
        Self {
            total: AtomicUsize::new(0),
            done: AtomicUsize::new(0),
            step_percent: step_percent.clamp(1, 100),
            verbose: verbose
        }
    }

    /// Ticks received so far.
    pub fn count(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    // the step (in ticks) between two log lines, never zero
    fn ticks_per_step(&self, total: usize) -> usize {
        (total * self.step_percent / 100).max(1)
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        LogProgress::new(10, true)
    }
}

impl Progress for LogProgress {

    fn start(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
    }

    fn increment(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if !self.verbose {
            return
        }

        let total = self.total();
        if total > 0 && (done % self.ticks_per_step(total) == 0 || done == total) {
            info!("computed {} of {} cells ({:.0}%)", done, total, 100.0 * (done as f32 / total as f32));
        }
    }
}


/// Never requests cancellation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverCancel;

impl Cancel for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancel for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// Cloneable cancellation handle, one clone goes to the computation and
/// another stays with whoever may abort it.
#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

impl Cancel for CancelToken {
    fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }
}
