//! Linux X11 void window.
//!
//! # Window setup
//!
//! | Attribute           | Value               | Effect                                  |
//! |---------------------|---------------------|-----------------------------------------|
//! | class               | `InputOnly`         | nothing is drawn; the void stays black  |
//! | border width        | 0                   | required for `InputOnly`                |
//! | `override_redirect` | `True`              | no window manager frame or placement    |
//! | input selection     | `PointerMotionMask` | only `MotionNotify` events are reported |
//!
//! `InputOnly` windows reject colormap, background and border attributes
//! with `BadMatch`, so only `CWOverrideRedirect` is set at creation.
//!
//! # Event coordinates
//!
//! Samples are taken from the root-window position (`x_root`/`y_root`) and
//! converted with [`VoidRegion::to_local`].  The window carries no frame, so
//! this agrees with the event-window `x`/`y`.

use std::os::raw::{c_int, c_uint, c_ulong};
use std::rc::Rc;

use tracing::{debug, trace};
use x11::xlib;

use crate::application::event_loop::{MotionSource, MotionSourceError};
use crate::infrastructure::display::XDisplay;
use void_core::{CursorSample, VoidRegion};

/// The input-only window covering the void.
pub struct XVoidWindow {
    display: Rc<XDisplay>,
    window: xlib::Window,
    region: VoidRegion,
}

impl XVoidWindow {
    /// Creates, configures and maps the window over `region`.
    ///
    /// Xlib reports creation failures asynchronously through its error
    /// handler, which terminates the process by default.
    pub fn create(display: Rc<XDisplay>, region: &VoidRegion) -> Self {
        let raw = display.raw();

        // SAFETY: `XSetWindowAttributes` is a plain C struct; all-zero is a
        // valid starting value and only the masked fields are read.
        let mut attrs: xlib::XSetWindowAttributes = unsafe { std::mem::zeroed() };
        attrs.override_redirect = xlib::True;

        // SAFETY: the connection is open; `attrs` outlives the call.
        let window = unsafe {
            xlib::XCreateWindow(
                raw,
                xlib::XDefaultRootWindow(raw),
                region.x() as c_int,
                region.y() as c_int,
                region.width() as c_uint,
                region.height() as c_uint,
                0,
                xlib::CopyFromParent,
                xlib::InputOnly as c_uint,
                std::ptr::null_mut(),
                xlib::CWOverrideRedirect as c_ulong,
                &mut attrs,
            )
        };
        debug!(
            "created void window 0x{window:x} at {}x{}+{}+{}",
            region.width(),
            region.height(),
            region.x(),
            region.y()
        );

        // SAFETY: `window` was just created on this connection.
        unsafe {
            xlib::XSelectInput(raw, window, xlib::PointerMotionMask);
            xlib::XMapWindow(raw, window);
        }
        display.flush();
        debug!("registered for pointer motion events and mapped window 0x{window:x}");

        Self {
            display,
            window,
            region: *region,
        }
    }

    /// The X window id.
    pub fn id(&self) -> xlib::Window {
        self.window
    }
}

impl MotionSource for XVoidWindow {
    /// Blocks in `XNextEvent` until the pointer moves inside the void.
    ///
    /// Never returns `Ok(None)`: a lost connection is handled by Xlib's I/O
    /// error handler, which exits the process.
    fn next_motion(&mut self) -> Result<Option<CursorSample>, MotionSourceError> {
        // SAFETY: `XEvent` is a C union; zeroed is a valid value to be
        // overwritten by XNextEvent.
        let mut event: xlib::XEvent = unsafe { std::mem::zeroed() };

        loop {
            // SAFETY: the connection is open and `event` is writable.
            unsafe { xlib::XNextEvent(self.display.raw(), &mut event) };

            if event.get_type() != xlib::MotionNotify {
                trace!("ignoring X event type {}", event.get_type());
                continue;
            }

            let motion = xlib::XMotionEvent::from(event);
            if motion.window != self.window {
                trace!("ignoring motion on foreign window 0x{:x}", motion.window);
                continue;
            }
            return Ok(Some(self.region.to_local(motion.x_root, motion.y_root)));
        }
    }
}

impl Drop for XVoidWindow {
    fn drop(&mut self) {
        // SAFETY: the window belongs to this still-open connection.
        unsafe { xlib::XDestroyWindow(self.display.raw(), self.window) };
        self.display.flush();
    }
}
