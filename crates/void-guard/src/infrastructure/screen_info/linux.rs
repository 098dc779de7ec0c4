//! Linux screen size via the X11 Xlib API.
//!
//! With XRandR or Xinerama the root window of the default screen spans every
//! monitor, so its size is the virtual desktop size.

use std::rc::Rc;

use x11::xlib;

use super::{checked_bounds, ScreenBoundsProvider, ScreenInfoError};
use crate::infrastructure::display::XDisplay;
use void_core::ScreenBounds;

/// Linux X11 implementation of [`ScreenBoundsProvider`].
pub struct X11ScreenInfo {
    display: Rc<XDisplay>,
}

impl X11ScreenInfo {
    pub fn new(display: Rc<XDisplay>) -> Self {
        Self { display }
    }
}

impl ScreenBoundsProvider for X11ScreenInfo {
    fn screen_bounds(&self) -> Result<ScreenBounds, ScreenInfoError> {
        let screen = self.display.default_screen();
        // SAFETY: the connection is open for the lifetime of `self.display`
        // and `screen` is the server's default screen number.
        let (width, height) = unsafe {
            (
                xlib::XDisplayWidth(self.display.raw(), screen),
                xlib::XDisplayHeight(self.display.raw(), screen),
            )
        };
        checked_bounds(width, height)
    }
}
