//! The blocking motion-event loop.
//!
//! One source, one thread: wait for a motion sample, redirect the cursor,
//! wait again.  Warp failures are logged and the loop keeps going; only a
//! failing source ends it early.

use thiserror::Error;
use tracing::{error, info};
use void_core::CursorSample;

use super::redirect_cursor::RedirectCursorUseCase;

/// Error raised by a [`MotionSource`].
#[derive(Debug, Error)]
pub enum MotionSourceError {
    /// The connection to the windowing system broke down.
    #[error("motion source disconnected: {0}")]
    Disconnected(String),
}

/// Delivers cursor samples, in void-local coordinates, one motion event at a time.
pub trait MotionSource {
    /// Blocks until the next motion event inside the void.
    ///
    /// Returns `Ok(None)` once the source has no more events to deliver.
    ///
    /// # Errors
    ///
    /// Returns [`MotionSourceError`] if the underlying connection fails.
    /// The X11 source never returns an error or `Ok(None)`: Xlib's I/O
    /// error handler exits the process when the connection is lost, so both
    /// outcomes only occur with other sources (e.g. scripted ones in tests).
    fn next_motion(&mut self) -> Result<Option<CursorSample>, MotionSourceError>;
}

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Motion samples received.
    pub motions: u64,
    /// Warps that reported an error.
    pub failed_warps: u64,
}

/// Runs the redirect loop until `source` is exhausted.
///
/// # Errors
///
/// Returns [`MotionSourceError`] if the source fails.
pub fn run_event_loop(
    source: &mut dyn MotionSource,
    use_case: &RedirectCursorUseCase,
) -> Result<LoopStats, MotionSourceError> {
    let mut stats = LoopStats::default();

    while let Some(sample) = source.next_motion()? {
        stats.motions += 1;
        if let Err(e) = use_case.handle_motion(sample) {
            stats.failed_warps += 1;
            error!("pointer warp error: {e}");
        }
    }

    info!(
        "event loop finished after {} motion events ({} failed warps)",
        stats.motions, stats.failed_warps
    );
    Ok(stats)
}
