//! Startup configuration.
//!
//! [`VoidConfig`] is built once from the command line and never changes.  The
//! screen size is only known after the display connection is open, so the
//! final [`RedirectPolicy`] is assembled with [`VoidConfig::into_policy`].

use std::fmt;

use super::geometry::{GeometryError, ScreenBounds, VoidRegion};
use super::mode::RedirectionMode;
use super::policy::RedirectPolicy;

/// Validated void geometry plus redirection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoidConfig {
    pub region: VoidRegion,
    pub mode: RedirectionMode,
}

impl VoidConfig {
    /// Validates the raw geometry and pairs it with `mode`.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from [`VoidRegion::new`].
    pub fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        mode: RedirectionMode,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            region: VoidRegion::new(x, y, width, height)?,
            mode,
        })
    }

    /// Combines this configuration with the screen size read from the display.
    pub fn into_policy(self, screen: ScreenBounds) -> RedirectPolicy {
        if !screen.contains_region(&self.region) {
            tracing::warn!(
                "void {}x{}+{}+{} extends beyond the {}x{} screen",
                self.region.width(),
                self.region.height(),
                self.region.x(),
                self.region.y(),
                screen.width,
                screen.height
            );
        }
        RedirectPolicy::new(self.region, screen, self.mode)
    }
}

impl fmt::Display for VoidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "void at {}, {}, width {}, height {}, mode is '{}'",
            self.region.x(),
            self.region.y(),
            self.region.width(),
            self.region.height(),
            self.mode
        )
    }
}
