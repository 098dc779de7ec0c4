//! Command-line parsing.
//!
//! ```text
//! void-guard [--display <NAME>] <X> <Y> <WIDTH> <HEIGHT> [MODE]
//! ```
//!
//! Every failure, whether clap rejects the arguments or the geometry fails
//! validation, becomes a [`clap::Error`] so the caller prints one message
//! followed by the usage line and exits with [`exit_code`].

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use void_core::{RedirectionMode, VoidConfig};

const MODE_HELP: &str = "\
Modes:
  (none)  Leave through the nearest edge of the void.
  d       Always leave through the bottom edge.
  u       Always leave through the top edge.
  l       Always leave through the left edge.
  r       Always leave through the right edge.

For example, with 'd' a mouse moving horizontally that hits a vertical edge
of the void jumps down to the bottom edge and continues along its path
instead of stopping at the edge.";

/// Blocks the mouse cursor from entering a void on the X11 virtual screen.
///
/// X and Y are the root-window coordinates of the void's upper-left corner;
/// WIDTH and HEIGHT are its size.  An invisible input-only window is placed
/// exactly over the void and the cursor is pushed out whenever it enters.
#[derive(Debug, Parser)]
#[command(name = "void-guard", version, about, long_about = None, after_help = MODE_HELP)]
pub struct Cli {
    /// X coordinate of the void's upper-left corner.
    #[arg(allow_negative_numbers = true)]
    pub x: i32,

    /// Y coordinate of the void's upper-left corner.
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Width of the void in pixels.
    #[arg(allow_negative_numbers = true)]
    pub width: i32,

    /// Height of the void in pixels.
    #[arg(allow_negative_numbers = true)]
    pub height: i32,

    /// Fixed escape direction: d, u, l or r.  Omit for nearest-edge mode.
    pub mode: Option<RedirectionMode>,

    /// X display to connect to.
    #[arg(long, env = "DISPLAY")]
    pub display: Option<String>,
}

/// Everything the shell needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: VoidConfig,
    pub display: Option<String>,
}

impl Cli {
    /// Validates the parsed arguments into [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::ValueValidation`] error naming the raw values if
    /// a coordinate is negative, a dimension is not positive, or the void's
    /// far edge overflows the coordinate range.
    pub fn into_settings(self) -> Result<Settings, clap::Error> {
        let config = VoidConfig::new(
            self.x,
            self.y,
            self.width,
            self.height,
            self.mode.unwrap_or_default(),
        )
        .map_err(|e| {
            Cli::command().error(
                ErrorKind::ValueValidation,
                format!(
                    "bad arguments ({e}): x={}, y={}, w={}, h={}",
                    self.x, self.y, self.width, self.height
                ),
            )
        })?;

        Ok(Settings {
            config,
            display: self.display,
        })
    }
}

/// Parses and validates `args` (including the program name).
///
/// # Errors
///
/// Returns the [`clap::Error`] to print; see [`exit_code`].
pub fn parse_settings<I, T>(args: I) -> Result<Settings, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)?.into_settings()
}

/// Process exit code for a parse failure: `0` for `--help`/`--version`, `1` otherwise.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
