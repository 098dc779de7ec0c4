//! Connection to the X server.
//!
//! Every X11 adapter in this crate shares one [`XDisplay`] through an `Rc`.
//! The connection is closed when the last adapter drops its handle.

use thiserror::Error;

/// Error type for opening the display connection.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// `XOpenDisplay` returned null.
    #[error("cannot connect to X server '{0}'")]
    ConnectFailed(String),

    /// The display name contains an interior NUL byte.
    #[error("invalid display name {0:?}")]
    InvalidName(String),
}

/// Human-readable name for an optional display argument, as used in messages.
pub fn describe_display_name(name: Option<&str>) -> String {
    match name {
        Some(n) => n.to_string(),
        None => "<unset>".to_string(),
    }
}

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::XDisplay;
