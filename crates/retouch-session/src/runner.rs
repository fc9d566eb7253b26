//! Background effect execution with cooperative cancellation.
//!
//! The runner moves filter work off the interactive thread while
//! enforcing **at most one in-flight effect per session**. Submitting
//! while an effect is still running supersedes it: the prior request's
//! token is cancelled so its result is discarded, and the superseded
//! thread is retired and joined later.
//!
//! Stale results are suppressed with a generation counter, the same
//! scheme the UI uses to discard out-of-date pipeline runs. Every
//! submission -- applied, cancelled, or skipped for lack of an image --
//! resolves to an [`EffectReport`] on the session's report channel, so
//! background outcomes never vanish silently.
//!
//! Cancellation is cooperative and coarse: the token is polled once,
//! after the pixel loop and before publishing. Cancelling does not stop
//! computation early, and callers must not assume it reduces latency.
//! The token type still travels with the task, so a finer-polling
//! filter loop could honor it without any caller-side change.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;

use log::{debug, info};
use parking_lot::Mutex;
use retouch_filters::FilterKind;

use crate::display::DisplaySurface;
use crate::session::CanvasState;

/// A one-shot cancellation token shared between the session and one
/// background effect task.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// How a submitted effect resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    /// The filter ran and its result was published to the buffer.
    Applied,
    /// The filter ran but cancellation suppressed its result; the
    /// buffer is exactly the pre-filter snapshot.
    Cancelled,
    /// No image was loaded; the request was a no-op.
    NoImage,
}

/// The resolution of one effect submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectReport {
    /// Monotonic submission counter; later submissions have larger values.
    pub generation: u64,
    /// Which filter was requested.
    pub filter: FilterKind,
    /// How the request resolved.
    pub outcome: EffectOutcome,
}

/// The worker body: snapshot, filter, publish-unless-cancelled.
///
/// The canvas lock is held for the entire read-then-swap sequence, so
/// strokes and loads can never interleave with a running filter. The
/// result replaces the buffer wholesale; on cancellation the buffer is
/// untouched, bit for bit.
pub(crate) fn run_effect(
    state: &Mutex<CanvasState>,
    display: &dyn DisplaySurface,
    filter: FilterKind,
    token: &CancellationToken,
) -> EffectOutcome {
    let mut canvas = state.lock();

    let Some(snapshot) = canvas.buffer.as_ref() else {
        debug!("{} skipped: no image loaded", filter.label());
        return EffectOutcome::NoImage;
    };

    let result = filter.apply(snapshot);

    if token.is_cancelled() {
        info!("{} cancelled; result discarded", filter.label());
        return EffectOutcome::Cancelled;
    }

    canvas.buffer = Some(result);
    if let Some(buffer) = canvas.buffer.as_ref() {
        display.present(buffer);
    }
    EffectOutcome::Applied
}

struct InFlight {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Schedules one filter at a time on a background thread.
pub(crate) struct EffectRunner {
    generation: u64,
    in_flight: Option<InFlight>,
    retired: Vec<JoinHandle<()>>,
    report_tx: Sender<EffectReport>,
    report_rx: Receiver<EffectReport>,
}

impl EffectRunner {
    pub(crate) fn new() -> Self {
        let (report_tx, report_rx) = channel();
        Self {
            generation: 0,
            in_flight: None,
            retired: Vec::new(),
            report_tx,
            report_rx,
        }
    }

    /// Submit a filter for background application, superseding any
    /// effect still in flight. Returns the submission's generation.
    pub(crate) fn submit(
        &mut self,
        state: Arc<Mutex<CanvasState>>,
        display: Arc<dyn DisplaySurface + Send + Sync>,
        filter: FilterKind,
    ) -> u64 {
        if let Some(prev) = self.in_flight.take() {
            if !prev.handle.is_finished() {
                info!("superseding in-flight effect");
            }
            prev.token.cancel();
            self.retired.push(prev.handle);
        }

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let report_tx = self.report_tx.clone();

        debug!("scheduling {} (generation {generation})", filter.label());
        let handle = std::thread::spawn(move || {
            let outcome = run_effect(&state, display.as_ref(), filter, &worker_token);
            debug!("generation {generation} resolved: {outcome:?}");
            // The session may already be gone; a dead channel is fine.
            let _ = report_tx.send(EffectReport {
                generation,
                filter,
                outcome,
            });
        });

        self.in_flight = Some(InFlight { token, handle });
        generation
    }

    /// Request cancellation of the in-flight effect, if any.
    pub(crate) fn cancel(&self) {
        if let Some(flight) = &self.in_flight {
            info!("cancel requested");
            flight.token.cancel();
        }
    }

    /// Whether an effect is currently running.
    pub(crate) fn is_running(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|flight| !flight.handle.is_finished())
    }

    /// Drain any reports that have arrived, without blocking.
    pub(crate) fn poll_reports(&mut self) -> Vec<EffectReport> {
        let mut reports = Vec::new();
        while let Ok(report) = self.report_rx.try_recv() {
            reports.push(report);
        }
        reports
    }

    /// Join every outstanding worker, then drain all reports.
    pub(crate) fn wait_idle(&mut self) -> Vec<EffectReport> {
        if let Some(flight) = self.in_flight.take() {
            let _ = flight.handle.join();
        }
        for handle in self.retired.drain(..) {
            let _ = handle.join();
        }
        self.poll_reports()
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        // Workers only hold Arcs, but joining keeps test teardown tidy.
        let _ = self.wait_idle();
    }
}
