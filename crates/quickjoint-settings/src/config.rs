//! Joint presets
//!
//! A preset holds the values of the tab and slot forms: separate tab and slot
//! counts, material thickness and kerf in a chosen unit, and the edge policy.
//! Files are JSON or TOML, picked by extension, and are validated on both
//! load and save.

use crate::error::{SettingsError, SettingsResult};
use quickjoint_core::units::{convert, LengthUnit};
use quickjoint_joints::{JointKind, JointParameters, MAX_FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = "quickjoint";
const CONFIG_FILE: &str = "config.toml";

/// Stored joint preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointConfig {
    /// Number of tabs to add
    pub tab_count: u32,
    /// Number of slots to add
    pub slot_count: u32,
    /// Material thickness, in `units`
    pub thickness: f64,
    /// Measured kerf of the cutter, in `units`
    pub kerf: f64,
    /// Unit of `thickness` and `kerf`
    pub units: LengthUnit,
    /// First segment is a tab or slot
    pub feature_at_start: bool,
    /// Last segment is a tab or slot
    pub feature_at_end: bool,
    /// Flip the side of the edge that tabs are drawn onto
    pub flip_side: bool,
}

impl Default for JointConfig {
    fn default() -> Self {
        Self {
            tab_count: 1,
            slot_count: 1,
            thickness: 3.0,
            kerf: 0.14,
            units: LengthUnit::Mm,
            feature_at_start: false,
            feature_at_end: false,
            flip_side: false,
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl JointConfig {
    /// `<config dir>/quickjoint/config.toml` for the current platform.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory found".to_string())
            })
    }

    /// Let tabs or slots run right up to both ends of the edge.
    pub fn set_edge_features(&mut self, enabled: bool) {
        self.feature_at_start = enabled;
        self.feature_at_end = enabled;
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded joint config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_for(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved joint config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.tab_count == 0 || self.tab_count > MAX_FEATURE_COUNT {
            return Err(invalid(
                "tab_count",
                &format!("must be between 1 and {}", MAX_FEATURE_COUNT),
            ));
        }

        if self.slot_count == 0 || self.slot_count > MAX_FEATURE_COUNT {
            return Err(invalid(
                "slot_count",
                &format!("must be between 1 and {}", MAX_FEATURE_COUNT),
            ));
        }

        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(invalid(
                "thickness",
                &format!("must be positive, got {}", self.thickness),
            ));
        }

        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(invalid(
                "kerf",
                &format!("must be zero or positive, got {}", self.kerf),
            ));
        }

        if self.kerf >= self.thickness {
            return Err(invalid(
                "kerf",
                &format!(
                    "{} is not smaller than the material thickness {}",
                    self.kerf, self.thickness
                ),
            ));
        }

        Ok(())
    }

    /// Engine parameters for `kind`, with lengths converted to `document_unit`.
    pub fn joint_parameters(
        &self,
        kind: JointKind,
        document_unit: LengthUnit,
    ) -> SettingsResult<JointParameters> {
        self.validate()?;

        let feature_count = match kind {
            JointKind::TabEdge => self.tab_count,
            JointKind::SlotBox => self.slot_count,
        };

        let params = JointParameters {
            feature_count,
            material_thickness: convert(self.thickness, self.units, document_unit),
            kerf_width: convert(self.kerf, self.units, document_unit),
            flip_side: self.flip_side,
            feature_at_start: self.feature_at_start,
            feature_at_end: self.feature_at_end,
        };
        params.validate()?;
        Ok(params)
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
