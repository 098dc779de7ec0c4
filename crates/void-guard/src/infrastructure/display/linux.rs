//! Xlib display connection.
//!
//! # Implementation notes
//!
//! `XOpenDisplay(NULL)` connects to the display named by `DISPLAY`.  When a
//! name is given explicitly it is passed through as a C string.  The raw
//! pointer never leaves this crate's infrastructure layer.

use std::ffi::{CStr, CString};
use std::rc::Rc;

use tracing::debug;
use x11::xlib;

use super::{describe_display_name, DisplayError};

/// An open Xlib connection.
///
/// Not `Send`: Xlib connections are used from the thread that opened them.
pub struct XDisplay {
    raw: *mut xlib::Display,
    name: String,
}

impl XDisplay {
    /// Opens a connection to `name`, or to `$DISPLAY` when `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidName`] if `name` contains a NUL byte, or
    /// [`DisplayError::ConnectFailed`] if the X server cannot be reached.
    pub fn open(name: Option<&str>) -> Result<Rc<Self>, DisplayError> {
        let c_name = name
            .map(|n| CString::new(n).map_err(|_| DisplayError::InvalidName(n.to_string())))
            .transpose()?;
        let name_ptr = c_name.as_ref().map_or(std::ptr::null(), |c| c.as_ptr());

        // SAFETY: `name_ptr` is null or points to a NUL-terminated string that
        // outlives the call.  The returned pointer is freed in `Drop`.
        let raw = unsafe { xlib::XOpenDisplay(name_ptr) };
        if raw.is_null() {
            return Err(DisplayError::ConnectFailed(describe_display_name(name)));
        }

        // SAFETY: `raw` is a valid connection; XDisplayString returns a pointer
        // owned by Xlib that stays valid until XCloseDisplay.
        let resolved = unsafe { CStr::from_ptr(xlib::XDisplayString(raw)) }
            .to_string_lossy()
            .into_owned();
        debug!("connected to X server '{resolved}'");

        Ok(Rc::new(Self {
            raw,
            name: resolved,
        }))
    }

    /// The raw connection pointer for Xlib calls.
    pub fn raw(&self) -> *mut xlib::Display {
        self.raw
    }

    /// The display name the server reports, e.g. `:0`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Screen number of the default screen.
    pub fn default_screen(&self) -> i32 {
        // SAFETY: `self.raw` is valid for the lifetime of `self`.
        unsafe { xlib::XDefaultScreen(self.raw) }
    }

    /// Sends all buffered requests to the server.
    pub fn flush(&self) {
        // SAFETY: `self.raw` is valid for the lifetime of `self`.
        unsafe { xlib::XFlush(self.raw) };
    }
}

impl Drop for XDisplay {
    fn drop(&mut self) {
        debug!("closing X connection '{}'", self.name);
        // SAFETY: `self.raw` came from XOpenDisplay and is not used after this.
        unsafe { xlib::XCloseDisplay(self.raw) };
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
