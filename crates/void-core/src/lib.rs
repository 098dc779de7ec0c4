//! # void-core
//!
//! Geometry types and the edge-redirection policy for void-guard.
//!
//! This crate has zero dependencies on OS APIs or the windowing system.  It is
//! used by the `void-guard` binary, which owns the X11 connection.
//!
//! # Architecture overview (for beginners)
//!
//! On a multi-monitor desktop the combined screen surface (the "virtual
//! screen") is a rectangle, but the monitors do not always cover all of it.
//! When two monitors have different resolutions, a strip of the virtual screen
//! belongs to no monitor at all: a **void**.  The mouse cursor can wander into
//! a void and disappear.
//!
//! void-guard claims the void with an invisible input-only window.  Every time
//! the cursor moves inside that window, the cursor is pushed back out.  This
//! crate answers the only interesting question in that process: *where to?*
//!
//! - **`domain::geometry`** – `VoidRegion`, `ScreenBounds`, `CursorSample`,
//!   `Displacement` and `Edge`.
//!
//! - **`domain::mode`** – `RedirectionMode`: automatic nearest-edge escape or
//!   a fixed direction.
//!
//! - **`domain::policy`** – `RedirectPolicy`: maps a cursor sample inside the
//!   void to the displacement that moves it just past the chosen edge.
//!
//! - **`domain::config`** – `VoidConfig`: the validated startup configuration.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `void_core::RedirectPolicy` instead of `void_core::domain::policy::RedirectPolicy`.
pub use domain::config::VoidConfig;
pub use domain::geometry::{
    CursorSample, Displacement, Edge, GeometryError, ScreenBounds, VoidRegion,
};
pub use domain::mode::{ParseModeError, RedirectionMode};
pub use domain::policy::RedirectPolicy;
