//! Linux X11 pointer warps via `XWarpPointer`.
//!
//! # Relative warps
//!
//! With `None` (0) as both source and destination window, `XWarpPointer`
//! moves the pointer by `(dest_x, dest_y)` relative to where it is now.  The
//! void window reports motion in its own coordinates, which differ from the
//! pointer's root position only by the void's origin, so the policy's
//! displacement can be applied directly.
//!
//! The server clamps the result to the root window.  The warp generates a new
//! motion event only if the pointer is still inside a window that selected
//! `PointerMotionMask`; the policy guarantees it is not inside the void.

use std::rc::Rc;

use x11::xlib;

use crate::application::redirect_cursor::{PointerWarper, WarpError};
use crate::infrastructure::display::XDisplay;
use void_core::Displacement;

/// `None` window argument for `XWarpPointer`.
const NO_WINDOW: xlib::Window = 0;

/// Linux X11 pointer warper.
pub struct XPointerWarper {
    display: Rc<XDisplay>,
}

impl XPointerWarper {
    pub fn new(display: Rc<XDisplay>) -> Self {
        Self { display }
    }
}

impl PointerWarper for XPointerWarper {
    fn warp_by(&self, displacement: Displacement) -> Result<(), WarpError> {
        // SAFETY: the connection is open for the lifetime of `self.display`.
        // With no source window the src_* geometry arguments are ignored.
        unsafe {
            xlib::XWarpPointer(
                self.display.raw(),
                NO_WINDOW,
                NO_WINDOW,
                0,
                0,
                0,
                0,
                displacement.dx,
                displacement.dy,
            );
        }
        self.display.flush();
        Ok(())
    }
}
