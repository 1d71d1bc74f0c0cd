//! # FigureKit
//!
//! The figure data model of a 2-D vector drawing editor: styled shapes that
//! the user draws by dragging, selects, duplicates and compares.
//!
//! ## Architecture
//!
//! FigureKit is organized as a workspace with multiple crates:
//!
//! 1. **figurekit-core** - Colors, points and line types
//! 2. **figurekit-settings** - Style and shape defaults, logging level, JSON/TOML config files
//! 3. **figurekit-designer** - Style state, geometry variants, figures, selection overlay, factory
//! 4. **figurekit** - This crate: re-exports and logging setup
//!
//! ## Example
//!
//! ```rust
//! use figurekit::{Color, FigureFactory, Point, StyleState};
//!
//! let mut factory = FigureFactory::new();
//! let mut circle = factory.circle(StyleState::filled(Color::BLUE), 0.0, 0.0);
//! circle.set_last_point(Point::new(3.0, 4.0));
//! circle.set_selected(true);
//! assert_eq!(circle.selection_overlay().map(|o| o.width()), Some(10.0));
//! ```

pub use figurekit_designer as designer;
pub use figurekit_settings as settings;

pub use figurekit_core::{Color, ColorError, LineType, Point};

pub use figurekit_designer::{
    Figure, FigureError, FigureFactory, FigureGeometry, FigureKind, FigureResult,
    FigureTransform, Geometry, SelectionOverlay, ShapePaint, StyleState, THRESHOLD,
};

pub use figurekit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Installs a global subscriber with:
/// - `RUST_LOG` environment variable support
/// - an INFO default directive
/// - console output with target and level
pub fn init_logging() -> anyhow::Result<()> {
    install_subscriber("info")
}

/// Initialize logging with the level from `config`
///
/// Target-specific `RUST_LOG` directives still apply; a bare global level
/// in `RUST_LOG` is overridden by the configured one.
pub fn init_logging_with(config: &Config) -> anyhow::Result<()> {
    install_subscriber(&config.logging.level)
}

fn install_subscriber(level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level: tracing::Level = level
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid log level '{}'", level))?;
    let env_filter = EnvFilter::from_default_env().add_directive(default_level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
