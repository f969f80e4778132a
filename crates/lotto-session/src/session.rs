use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lotto_engine::{DrawSnapshot, DrawingEngine, RandomSource};
use tokio::sync::{Notify, broadcast};

use crate::SessionConfig;

const SNAPSHOT_CAPACITY: usize = 256;

/// Shared "should continue" signal for a running session
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
        self.notify.notify_waiters();
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Resolves once [`StopHandle::stop`] has been called
    pub async fn stopped(&self) {
        // registered before the flag check so a concurrent stop is not lost
        let notified = self.notify.notified();
        if self.is_stopped() {
            return;
        }
        notified.await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum StopReason {
    Jackpot,
    Cancelled,
    DrawLimit,
}

/// Outcome of [`PlaySession::run`], hands the engine back to the caller
#[derive(Debug)]
pub struct SessionReport<S> {
    pub reason: StopReason,
    /// State after the final drawing, None if nothing was drawn
    pub last: Option<DrawSnapshot>,
    pub engine: DrawingEngine<S>,
}

/// Repeated drawings on one engine, paced for display.
///
/// The session owns the engine while it runs, so drawings never overlap.
pub struct PlaySession<S> {
    engine: DrawingEngine<S>,
    config: SessionConfig,
    snapshots: broadcast::Sender<DrawSnapshot>,
}

impl<S: RandomSource> PlaySession<S> {
    pub fn new(engine: DrawingEngine<S>, config: SessionConfig) -> Self {
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CAPACITY);
        Self {
            engine,
            config,
            snapshots,
        }
    }

    /// Snapshot after every drawing of the coming run
    pub fn subscribe(&self) -> broadcast::Receiver<DrawSnapshot> {
        self.snapshots.subscribe()
    }

    /// Draw until jackpot, cancel, or the drawing limit.
    ///
    /// `on_draw` sees every snapshot before it is broadcast.
    pub async fn run<F>(mut self, stop: &StopHandle, mut on_draw: F) -> SessionReport<S>
    where
        F: FnMut(&DrawSnapshot),
    {
        let pace = self.config.pace();
        log::info!(
            "Session started with picks [{}], pace {pace:?}",
            self.engine.snapshot().picks
        );

        let mut last = None;
        let reason = loop {
            if stop.is_stopped() {
                break StopReason::Cancelled;
            }

            self.engine.draw();
            let snapshot = self.engine.snapshot();
            on_draw(&snapshot);
            if self.snapshots.send(snapshot.clone()).is_err() {
                log::trace!("No snapshot subscribers");
            }
            let jackpot = snapshot.jackpot;
            let drawings = snapshot.tally.drawings;
            last = Some(snapshot);

            if jackpot && self.config.stop_on_jackpot {
                break StopReason::Jackpot;
            }
            if self
                .config
                .max_drawings
                .is_some_and(|limit| drawings >= limit)
            {
                break StopReason::DrawLimit;
            }

            // an unpaced run still hands the worker back once per drawing
            if pace.is_zero() {
                tokio::select! {
                    () = tokio::task::yield_now() => {}
                    () = stop.stopped() => break StopReason::Cancelled,
                }
            } else {
                tokio::select! {
                    () = tokio::time::sleep(pace) => {}
                    () = stop.stopped() => break StopReason::Cancelled,
                }
            }
        };

        log::info!(
            "Session stopped ({reason}) after {} drawings, {:.2} years",
            self.engine.total_drawings(),
            self.engine.years_elapsed()
        );

        SessionReport {
            reason,
            last,
            engine: self.engine,
        }
    }
}
