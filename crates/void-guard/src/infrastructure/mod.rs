//! Infrastructure layer for void-guard.
//!
//! Contains the OS-facing adapters around the X server.
//!
//! **Dependency rule**: this layer may depend on `application` and `void_core`,
//! but MUST NOT be imported by the `application` or domain layers.
//!
//! # Sub-modules
//!
//! - **`display`** – Owns the Xlib `Display` connection and closes it on drop.
//!
//! - **`screen_info`** – Reads the virtual screen size (`ScreenBounds`).
//!
//! - **`void_window`** – Creates the invisible input-only window over the void
//!   and turns its `MotionNotify` events into cursor samples.
//!
//! - **`pointer`** – Relative pointer warps via `XWarpPointer`.
//!
//! The X11 implementations are selected at compile time with
//! `#[cfg(target_os = "linux")]`.  Mock implementations are always compiled so
//! tests on any platform can use them without a display.

pub mod display;
pub mod pointer;
pub mod screen_info;
pub mod void_window;
