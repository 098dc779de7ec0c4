//! Domain entities for void-guard.
//!
//! This module contains pure logic with no infrastructure dependencies.
//!
//! Domain code has **no** imports from OS APIs or windowing libraries and can
//! be compiled and tested on any platform without a running X server.  The
//! shell in `void-guard` depends on this module; this module never depends on
//! the shell.

/// Startup configuration: void geometry plus redirection mode.
pub mod config;

/// Rectangles, samples, displacements and edges.
pub mod geometry;

/// Automatic or fixed escape direction.
pub mod mode;

/// The edge-redirection policy.
///
/// See [`policy::RedirectPolicy`] for the main type.
pub mod policy;
