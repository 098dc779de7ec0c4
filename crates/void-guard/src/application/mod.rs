//! Application layer for void-guard.
//!
//! - **`redirect_cursor`** – Turns one motion sample into one pointer warp.
//!   The policy decision comes from `void_core`; the warp itself is made by a
//!   `PointerWarper` implementation injected at construction time.
//!
//! - **`event_loop`** – Pulls samples from a `MotionSource` and feeds them to
//!   the use case until the source runs dry.  With the X11 source that never
//!   happens; the process ends on a signal.

pub mod event_loop;
pub mod redirect_cursor;
