//! # QuickJoint Settings
//!
//! Joint presets that a host can persist between runs. A [`JointConfig`]
//! records what the user typed (counts, thickness and kerf in their preferred
//! unit, edge policy) and converts it into engine parameters on demand.

pub mod config;
pub mod error;

pub use config::JointConfig;
pub use error::{SettingsError, SettingsResult};
