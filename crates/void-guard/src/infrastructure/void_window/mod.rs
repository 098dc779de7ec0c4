//! The window that claims the void.
//!
//! On Linux, [`XVoidWindow`] is a borderless, input-only,
//! override-redirect window placed exactly over the void.  It selects only
//! `PointerMotionMask`, so the X server reports motion inside the void and
//! nothing else.  It implements
//! [`MotionSource`](crate::application::event_loop::MotionSource).
//!
//! [`ScriptedMotionSource`] replays a fixed list of samples for tests.

use std::collections::VecDeque;

use crate::application::event_loop::{MotionSource, MotionSourceError};
use void_core::CursorSample;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::XVoidWindow;

/// A motion source that yields a fixed sequence of samples and then ends.
#[derive(Debug, Default)]
pub struct ScriptedMotionSource {
    samples: VecDeque<CursorSample>,
}

impl ScriptedMotionSource {
    pub fn new(samples: impl IntoIterator<Item = CursorSample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Samples not yet delivered.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl MotionSource for ScriptedMotionSource {
    fn next_motion(&mut self) -> Result<Option<CursorSample>, MotionSourceError> {
        Ok(self.samples.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_in_order_then_ends() {
        let mut source =
            ScriptedMotionSource::new([CursorSample::new(1, 2), CursorSample::new(3, 4)]);
        assert_eq!(source.next_motion().expect("ok"), Some(CursorSample::new(1, 2)));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next_motion().expect("ok"), Some(CursorSample::new(3, 4)));
        assert_eq!(source.next_motion().expect("ok"), None);
    }
}
