//! Progress Simulator
//!
//! Timer-driven 0-100 counter. One tick per period; the stage callback fires
//! once per stage transition and the done callback once when the counter hits
//! 100. Callbacks run on the timer task while holding the simulator's gate, so
//! they must be short and must not call back into [`ProgressSimulator::stop`].

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

use super::stages::StageSequence;

pub const MAX_PROGRESS: u8 = 100;

/// Snapshot of a run's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressState {
    pub percent: u8,
    pub stage_index: usize,
}

pub struct ProgressSimulator {
    stages: StageSequence,
    tick: Duration,
    progress: Arc<AtomicU8>,
    gate: Option<Arc<Mutex<bool>>>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressSimulator {
    pub fn new(stages: StageSequence, tick: Duration) -> Self {
        Self {
            stages,
            tick: tick.max(Duration::from_millis(1)),
            progress: Arc::new(AtomicU8::new(0)),
            gate: None,
            handle: None,
        }
    }

    /// Simulator whose 100 ticks span `total`
    pub fn with_total_duration(stages: StageSequence, total: Duration) -> Self {
        Self::new(stages, total / u32::from(MAX_PROGRESS))
    }

    pub fn tick_period(&self) -> Duration {
        self.tick
    }

    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Acquire)
    }

    pub fn is_running(&self) -> bool {
        self.gate
            .as_ref()
            .map(|gate| *gate.lock().unwrap_or_else(PoisonError::into_inner))
            .unwrap_or(false)
    }

    /// Start a new timeline from 0. A running timeline is stopped first.
    ///
    /// `on_stage` receives `(progress, stage_index)` on each transition;
    /// `on_done` fires after the 100th tick. Must be called inside a Tokio
    /// runtime.
    pub fn start<T, D>(&mut self, mut on_stage: T, on_done: D)
    where
        T: FnMut(u8, usize) + Send + 'static,
        D: FnOnce() + Send + 'static,
    {
        self.stop();
        self.progress.store(0, Ordering::Release);

        let gate = Arc::new(Mutex::new(true));
        let task_gate = gate.clone();
        let progress = self.progress.clone();
        let stages = self.stages.clone();
        let period = self.tick;

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            let mut percent: u8 = 0;
            let mut stage = 0usize;
            let mut on_done = Some(on_done);

            loop {
                ticker.tick().await;

                let mut active = task_gate.lock().unwrap_or_else(PoisonError::into_inner);
                if !*active {
                    return;
                }

                percent = (percent + 1).min(MAX_PROGRESS);
                progress.store(percent, Ordering::Release);

                let index = stages.stage_index(percent);
                if index != stage {
                    stage = index;
                    on_stage(percent, index);
                }

                if percent >= MAX_PROGRESS {
                    *active = false;
                    if let Some(done) = on_done.take() {
                        done();
                    }
                    return;
                }
            }
        });

        debug!(tick_ms = period.as_millis() as u64, "Progress simulator started");
        self.gate = Some(gate);
        self.handle = Some(handle);
    }

    /// Stop ticking. Idempotent; once this returns no callback of the current
    /// timeline will run.
    pub fn stop(&mut self) {
        if let Some(gate) = self.gate.take() {
            let mut active = gate.lock().unwrap_or_else(PoisonError::into_inner);
            if *active {
                debug!(progress = self.progress(), "Progress simulator stopped");
            }
            *active = false;
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.stop();
    }
}
