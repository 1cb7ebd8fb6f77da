//! # QuickJoint
//!
//! Finger-joint geometry for laser-cut panels. Picks a straight edge and
//! either replaces it with a row of tabs or lays matching slots beside it,
//! compensating both for the width of the laser kerf.
//!
//! ## Architecture
//!
//! QuickJoint is organized as a workspace with multiple crates:
//!
//! 1. **quickjoint-core** - Points, edges, paths, length units
//! 2. **quickjoint-joints** - Segment planner, tab and slot generators, shape sink
//! 3. **quickjoint-settings** - Stored joint presets (JSON/TOML)
//! 4. **quickjoint** - Command line binary with SVG output

pub mod cli;
pub mod svg;
pub mod types;

pub use cli::{execute, Cli, Commands, JointArgs};
pub use svg::SvgShapeSink;
pub use types::PointArg;

pub use quickjoint_core::{Edge, LengthUnit, Path, PathCommand, Point};
pub use quickjoint_joints::{
    JointError, JointKind, JointMaker, JointOutput, JointParameters, ShapeId, ShapeSink,
};
pub use quickjoint_settings::{JointConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so generated path data on stdout stays clean
/// - RUST_LOG environment variable support, `warn` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
