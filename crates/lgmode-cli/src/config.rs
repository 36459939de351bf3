//! TOML configuration deserialisation for profile jobs.

use anyhow::Context;
use serde::Deserialize;

use lgmode_core::types::micrometres_to_metres;
use lgmode_core::ModeParameters;

/// Top-level job configuration.
#[derive(Debug, Default, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub mode: ModeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Mode parameters in boundary units (micrometres).
#[derive(Debug, Clone, Deserialize)]
pub struct ModeConfig {
    /// Radial mode index, 0–100.
    #[serde(default = "default_p")]
    pub p: u32,
    /// Maximum plotted radius (µm).
    #[serde(default = "default_r_max_um")]
    pub r_max_um: f64,
    /// Beam waist (µm).
    #[serde(default = "default_w0_um")]
    pub w0_um: f64,
}

fn default_p() -> u32 {
    5
}
fn default_r_max_um() -> f64 {
    800.0
}
fn default_w0_um() -> f64 {
    200.0
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            p: default_p(),
            r_max_um: default_r_max_um(),
            w0_um: default_w0_um(),
        }
    }
}

impl ModeConfig {
    /// Convert to SI units and validate.
    pub fn to_params(&self) -> anyhow::Result<ModeParameters> {
        let r_max_m = micrometres_to_metres(self.r_max_um);
        let w0_m = micrometres_to_metres(self.w0_um);
        let params = ModeParameters::new(self.p, r_max_m, w0_m)?;
        Ok(params)
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the normalised profile as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_profile: bool,
    /// Whether to also save the profile and extrema as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_profile: true,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Parse a TOML job configuration from a string.
pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    Ok(config)
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file {}", path.display()))
}
