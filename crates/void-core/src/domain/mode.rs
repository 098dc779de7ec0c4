//! Redirection mode: how the escape edge is chosen.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::geometry::Edge;

/// Error returned when a mode string is not one of the accepted spellings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("illegal mode '{0}', expected one of ['d','u','l','r']")]
pub struct ParseModeError(pub String);

/// Which edge the cursor is pushed through when it enters the void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RedirectionMode {
    /// Nearest edge, decided per motion event.
    #[default]
    Auto,
    /// Always out through the bottom edge.
    Down,
    /// Always out through the top edge.
    Up,
    /// Always out through the left edge.
    Left,
    /// Always out through the right edge.
    Right,
}

impl RedirectionMode {
    /// Returns the edge a fixed mode always uses, or `None` for [`RedirectionMode::Auto`].
    pub fn fixed_edge(self) -> Option<Edge> {
        match self {
            RedirectionMode::Auto => None,
            RedirectionMode::Down => Some(Edge::Bottom),
            RedirectionMode::Up => Some(Edge::Top),
            RedirectionMode::Left => Some(Edge::Left),
            RedirectionMode::Right => Some(Edge::Right),
        }
    }
}

impl FromStr for RedirectionMode {
    type Err = ParseModeError;

    /// Accepts the single-letter command-line forms (`d`, `u`, `l`, `r`) and
    /// their spelled-out names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "down" => Ok(RedirectionMode::Down),
            "u" | "up" => Ok(RedirectionMode::Up),
            "l" | "left" => Ok(RedirectionMode::Left),
            "r" | "right" => Ok(RedirectionMode::Right),
            "auto" => Ok(RedirectionMode::Auto),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for RedirectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RedirectionMode::Auto => "auto",
            RedirectionMode::Down => "down",
            RedirectionMode::Up => "up",
            RedirectionMode::Left => "left",
            RedirectionMode::Right => "right",
        };
        f.write_str(name)
    }
}
