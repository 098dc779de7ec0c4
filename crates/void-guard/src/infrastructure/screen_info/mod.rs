//! Virtual screen size.
//!
//! The automatic redirection mode needs the size of the whole virtual desktop
//! to know when the void touches a screen border.  The size is read once at
//! startup; monitor hot-plugging is not tracked.
//!
//! | Module  | OS    | API used                                   |
//! |---------|-------|--------------------------------------------|
//! | `linux` | Linux | `XDisplayWidth` + `XDisplayHeight` (Xlib)  |
//!
//! A [`MockScreenInfo`] is always compiled so tests can run without a display.

use thiserror::Error;
use void_core::ScreenBounds;

/// Error type for screen size queries.
#[derive(Debug, Error)]
pub enum ScreenInfoError {
    /// The platform reported an unusable screen size.
    #[error("platform API error while reading screen size: {0}")]
    PlatformError(String),
}

/// Reports the size of the virtual desktop.
pub trait ScreenBoundsProvider {
    /// Returns the width and height of the root window.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenInfoError::PlatformError`] if the size cannot be read.
    fn screen_bounds(&self) -> Result<ScreenBounds, ScreenInfoError>;
}

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::X11ScreenInfo;

/// A screen provider that returns a fixed size.
pub struct MockScreenInfo {
    pub bounds: ScreenBounds,
}

impl MockScreenInfo {
    /// A 1280x1024 monitor left of a 1920x1200 one: a 3200x1200 root window.
    pub fn mixed_dual_head() -> Self {
        Self {
            bounds: ScreenBounds::new(3200, 1200),
        }
    }
}

impl ScreenBoundsProvider for MockScreenInfo {
    fn screen_bounds(&self) -> Result<ScreenBounds, ScreenInfoError> {
        Ok(self.bounds)
    }
}

/// Rejects the zero or negative sizes Xlib can report for a broken screen.
pub(crate) fn checked_bounds(width: i32, height: i32) -> Result<ScreenBounds, ScreenInfoError> {
    if width < 1 || height < 1 {
        return Err(ScreenInfoError::PlatformError(format!(
            "screen reports {width}x{height}"
        )));
    }
    Ok(ScreenBounds::new(width as u32, height as u32))
}
