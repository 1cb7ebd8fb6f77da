//! Command line front end
//!
//! Parses one edge plus joint settings, layers them over a stored preset and
//! prints either the tab path data or the slot groups.

use crate::svg::SvgShapeSink;
use crate::types::PointArg;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quickjoint_core::units::format_length;
use quickjoint_core::{convert, parse_length, Edge, LengthUnit};
use quickjoint_joints::{JointKind, JointMaker, JointOutput, JointParameters};
use quickjoint_settings::JointConfig;
use std::path::PathBuf;
use tracing::{debug, info};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Debug, Parser)]
#[command(name = "quickjoint")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Finger-joint tabs and slots for laser-cut panel edges", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace an edge with tabs and print the new path data
    Tabs(JointArgs),
    /// Print matching slot rectangles for an edge as SVG groups
    Slots(JointArgs),
}

impl Commands {
    pub fn kind(&self) -> JointKind {
        match self {
            Commands::Tabs(_) => JointKind::TabEdge,
            Commands::Slots(_) => JointKind::SlotBox,
        }
    }

    pub fn args(&self) -> &JointArgs {
        match self {
            Commands::Tabs(args) | Commands::Slots(args) => args,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct JointArgs {
    /// Edge start point
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub start: PointArg,

    /// Edge end point
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub end: PointArg,

    /// Number of tabs or slots
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Material thickness, optionally with a unit suffix ("3mm", "1/8")
    #[arg(short, long)]
    pub thickness: Option<String>,

    /// Kerf width, optionally with a unit suffix
    #[arg(short, long)]
    pub kerf: Option<String>,

    /// Unit of thickness and kerf
    #[arg(short, long)]
    pub units: Option<LengthUnit>,

    /// User unit of the edge coordinates
    #[arg(long, default_value_t = LengthUnit::Mm)]
    pub document_units: LengthUnit,

    /// First segment is a tab or slot (`=false` overrides a preset)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub feature_at_start: Option<bool>,

    /// Last segment is a tab or slot (`=false` overrides a preset)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub feature_at_end: Option<bool>,

    /// Set both --feature-at-start and --feature-at-end
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub edge_features: Option<bool>,

    /// Put tabs on the other side of the edge (`=false` overrides a preset)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub flip_side: Option<bool>,

    /// The edge is the closing segment of its subpath
    #[arg(long)]
    pub closes_path: bool,

    /// The edge continues an open subpath, so tabs start with a line
    #[arg(long)]
    pub continue_subpath: bool,

    /// Ids already used in the target document, never handed to new slots
    #[arg(long = "reserve-id", value_name = "ID", value_delimiter = ',')]
    pub reserved_ids: Vec<String>,

    /// Preset file (JSON or TOML) used before command line overrides
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl JointArgs {
    /// Preset from `--config`, else the user's default file if present.
    pub fn resolve_config(&self) -> Result<JointConfig> {
        if let Some(path) = &self.config {
            return JointConfig::load_from_file(path)
                .with_context(|| format!("failed to load preset {}", path.display()));
        }

        match JointConfig::default_path() {
            Ok(path) if path.exists() => JointConfig::load_from_file(&path)
                .with_context(|| format!("failed to load preset {}", path.display())),
            _ => Ok(JointConfig::default()),
        }
    }

    /// Apply the command line on top of `base` and build engine parameters.
    pub fn parameters(&self, kind: JointKind, base: &JointConfig) -> Result<JointParameters> {
        let mut config = base.clone();

        if let Some(units) = self.units {
            config.thickness = convert(config.thickness, config.units, units);
            config.kerf = convert(config.kerf, config.units, units);
            config.units = units;
        }
        if let Some(count) = self.count {
            match kind {
                JointKind::TabEdge => config.tab_count = count,
                JointKind::SlotBox => config.slot_count = count,
            }
        }
        if let Some(thickness) = &self.thickness {
            config.thickness = parse_length(thickness, config.units)
                .with_context(|| format!("invalid thickness '{}'", thickness))?;
        }
        if let Some(kerf) = &self.kerf {
            config.kerf = parse_length(kerf, config.units)
                .with_context(|| format!("invalid kerf '{}'", kerf))?;
        }
        if let Some(enabled) = self.edge_features {
            config.set_edge_features(enabled);
        }
        if let Some(enabled) = self.feature_at_start {
            config.feature_at_start = enabled;
        }
        if let Some(enabled) = self.feature_at_end {
            config.feature_at_end = enabled;
        }
        if let Some(flip) = self.flip_side {
            config.flip_side = flip;
        }

        debug!(
            thickness = %format_length(config.thickness, config.units),
            kerf = %format_length(config.kerf, config.units),
            feature_at_start = config.feature_at_start,
            feature_at_end = config.feature_at_end,
            flip_side = config.flip_side,
            "effective joint settings"
        );
        Ok(config.joint_parameters(kind, self.document_units)?)
    }

    pub fn edge(&self) -> Edge {
        if self.closes_path {
            Edge::closing(self.start.into(), self.end.into())
        } else {
            Edge::new(self.start.into(), self.end.into())
        }
    }
}

/// Run the parsed command against `base` and return what should be printed.
pub fn execute(cli: &Cli, base: &JointConfig) -> Result<String> {
    let kind = cli.command.kind();
    let args = cli.command.args();

    let params = args.parameters(kind, base)?;
    let maker = JointMaker::new(params)?;
    let edge = args.edge();
    let mut sink =
        SvgShapeSink::new(args.document_units).with_reserved_ids(args.reserved_ids.iter().cloned());

    let output = maker
        .generate(kind, &edge, !args.continue_subpath, &mut sink)
        .with_context(|| format!("cannot add {} to edge {} -> {}", kind, edge.start, edge.end))?;

    Ok(match output {
        JointOutput::Tabs(path) => {
            info!(commands = path.len(), "generated tab edge");
            path.to_string()
        }
        JointOutput::Slots(ids) => {
            info!(slots = ids.len(), "generated slot boxes");
            sink.fragment()
        }
    })
}
