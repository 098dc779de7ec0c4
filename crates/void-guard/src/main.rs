//! void-guard entry point.
//!
//! Parses the void geometry, connects to the X server, covers the void with
//! an input-only window, and runs the blocking motion-event loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ cli::parse_settings()        -- x y width height [mode], --display
//!  └─ XDisplay::open()             -- $DISPLAY or --display
//!  └─ X11ScreenInfo::screen_bounds -- root window size
//!  └─ VoidConfig::into_policy()    -- immutable RedirectPolicy
//!  └─ XVoidWindow::create()        -- InputOnly, override-redirect, PointerMotionMask
//!  └─ run_event_loop()
//!       └─ XNextEvent -> RedirectCursorUseCase -> XWarpPointer
//! ```
//!
//! # Exit codes
//!
//! - `0` for `--help` / `--version`.
//! - `1` for any argument error (printed with the usage line) and for a
//!   failed display connection.
//!
//! The loop itself never ends on its own; stop the process with a signal
//! (e.g. Ctrl-C).

use tracing::info;
use tracing_subscriber::EnvFilter;

use void_guard::cli::{self, Settings};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  `RUST_LOG=debug` shows every warp.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match cli::parse_settings(std::env::args_os()) {
        Ok(settings) => settings,
        Err(err) => {
            // clap renders the message, the usage line and the --help hint.
            let _ = err.print();
            std::process::exit(cli::exit_code(&err));
        }
    };

    info!("Settings: {}", settings.config);
    run(settings)
}

#[cfg(target_os = "linux")]
fn run(settings: Settings) -> anyhow::Result<()> {
    use std::rc::Rc;

    use anyhow::Context;

    use void_guard::application::event_loop::run_event_loop;
    use void_guard::application::redirect_cursor::RedirectCursorUseCase;
    use void_guard::infrastructure::{
        display::XDisplay,
        pointer::XPointerWarper,
        screen_info::{ScreenBoundsProvider, X11ScreenInfo},
        void_window::XVoidWindow,
    };

    // ── Display connection ────────────────────────────────────────────────────
    let display = XDisplay::open(settings.display.as_deref())
        .context("failed to open the X display")?;
    let display_name = display.name();
    info!("connected to X server '{}'", display_name);

    // ── Policy ────────────────────────────────────────────────────────────────
    let screen = X11ScreenInfo::new(Rc::clone(&display))
        .screen_bounds()
        .context("failed to read the screen size")?;
    info!("virtual screen is {}x{}", screen.width, screen.height);
    let policy = settings.config.into_policy(screen);

    // ── Void window + warper ──────────────────────────────────────────────────
    let mut window = XVoidWindow::create(Rc::clone(&display), policy.region());
    let warper = Rc::new(XPointerWarper::new(Rc::clone(&display)));
    let use_case = RedirectCursorUseCase::new(policy, warper);

    // ── Event loop ────────────────────────────────────────────────────────────
    info!("now entering event loop (infinite); ctrl-c to abort");
    let stats = run_event_loop(&mut window, &use_case).context("event loop failed")?;

    info!("void-guard stopped after {} motion events", stats.motions);
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn run(_settings: Settings) -> anyhow::Result<()> {
    anyhow::bail!("void-guard needs an X11 display and is only supported on Linux")
}
