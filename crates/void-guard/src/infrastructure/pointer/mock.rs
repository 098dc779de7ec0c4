//! Mock pointer warper for tests.
//!
//! # Why a mock warper?
//!
//! The real warper moves the user's cursor, needs a running X server, and its
//! effect cannot be observed from test code.  `RecordingPointerWarper` pushes
//! every displacement into a `Mutex<Vec<...>>` so assertions can inspect
//! exactly what was warped and in what order.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every warp return
//! `WarpError::Platform`, for exercising the error paths of callers.

use std::sync::Mutex;

use crate::application::redirect_cursor::{PointerWarper, WarpError};
use void_core::Displacement;

/// A warper that records all calls without touching the pointer.
#[derive(Default)]
pub struct RecordingPointerWarper {
    /// Every displacement passed to `warp_by`, in call order.
    pub warps: Mutex<Vec<Displacement>>,
    /// When `true`, every call returns `WarpError::Platform` without recording.
    pub should_fail: bool,
}

impl RecordingPointerWarper {
    pub fn new() -> Self {
        Self::default()
    }

    /// A warper whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of the recorded displacements.
    pub fn recorded(&self) -> Vec<Displacement> {
        self.warps.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl PointerWarper for RecordingPointerWarper {
    fn warp_by(&self, displacement: Displacement) -> Result<(), WarpError> {
        if self.should_fail {
            return Err(WarpError::Platform("mock failure".into()));
        }
        self.warps
            .lock()
            .map_err(|_| WarpError::Platform("recording lock poisoned".into()))?
            .push(displacement);
        Ok(())
    }
}
