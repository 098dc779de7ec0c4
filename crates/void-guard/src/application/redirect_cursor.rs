//! RedirectCursorUseCase: pushes the cursor out of the void on every motion event.
//!
//! This use case sits at the application layer and delegates to a
//! [`PointerWarper`] trait object for the actual pointer relocation.
//! The X11 implementation lives in the infrastructure layer.

use std::rc::Rc;

use thiserror::Error;
use tracing::debug;
use void_core::{CursorSample, Displacement, RedirectPolicy};

/// Error type for pointer warp operations.
#[derive(Debug, Error)]
pub enum WarpError {
    #[error("platform error: {0}")]
    Platform(String),
}

/// Moves the pointer relative to its current position.
///
/// Each supported windowing system provides an implementation in the
/// infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait PointerWarper {
    /// Shifts the pointer by `displacement` and makes sure the request reaches
    /// the server before returning.
    fn warp_by(&self, displacement: Displacement) -> Result<(), WarpError>;
}

/// The Redirect Cursor use case.
///
/// Holds the immutable policy and the warper for the lifetime of the process.
pub struct RedirectCursorUseCase {
    policy: RedirectPolicy,
    warper: Rc<dyn PointerWarper>,
}

impl RedirectCursorUseCase {
    /// Creates a new use case with the given policy and pointer warper.
    pub fn new(policy: RedirectPolicy, warper: Rc<dyn PointerWarper>) -> Self {
        Self { policy, warper }
    }

    pub fn policy(&self) -> &RedirectPolicy {
        &self.policy
    }

    /// Handles one motion sample reported inside the void window.
    ///
    /// Returns the displacement that was applied.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError`] if the pointer warp fails.
    pub fn handle_motion(&self, sample: CursorSample) -> Result<Displacement, WarpError> {
        let displacement = self.policy.displacement(sample);
        debug!(
            "mouse @ {:4} {:4} warpby {:4} {:4}",
            sample.x, sample.y, displacement.dx, displacement.dy
        );
        self.warper.warp_by(displacement)?;
        Ok(displacement)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
