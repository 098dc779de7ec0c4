//! void-guard library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does void-guard do? (for beginners)
//!
//! On a desktop with two monitors of different sizes, the X server's root
//! window is the bounding box of both, so part of it is covered by neither
//! monitor.  The cursor can drift into that void and vanish.
//!
//! void-guard:
//!
//! 1. Parses the void rectangle (and an optional fixed direction) from the
//!    command line.
//! 2. Connects to the X server and reads the root window size.
//! 3. Covers the void with an invisible, unmanaged, input-only window that
//!    listens for pointer motion only.
//! 4. On every motion event inside that window, asks
//!    [`void_core::RedirectPolicy`] where to go and warps the pointer there.

/// Application layer: the motion-to-warp use case and the event loop.
pub mod application;

/// Command-line parsing.
pub mod cli;

/// Infrastructure layer: X11 adapters and test doubles.
pub mod infrastructure;
