use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use complexqc::workflows::analyze::AnalysisOptions;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCutoffs {
    electrostatic: Option<f64>,
    groove: Option<f64>,
    pocket: Option<f64>,
    overlap: Option<f64>,
}

/// Analysis parameters as they appear in a TOML configuration file. Every
/// field is optional; CLI flags override file values, and whatever remains
/// unset falls back to the engine defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    cutoffs: Option<PartialCutoffs>,
    #[serde(rename = "vdw-scale")]
    vdw_scale: Option<f64>,
    #[serde(rename = "probe-radius")]
    probe_radius: Option<f64>,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, args: &AnalyzeArgs) -> Result<AnalysisOptions> {
        let defaults = AnalysisOptions::default();
        let cutoffs = self.cutoffs.unwrap_or_default();

        let options = AnalysisOptions {
            electrostatic_cutoff: args
                .electrostatic_cutoff
                .or(cutoffs.electrostatic)
                .unwrap_or(defaults.electrostatic_cutoff),
            groove_cutoff: args
                .groove_cutoff
                .or(cutoffs.groove)
                .unwrap_or(defaults.groove_cutoff),
            pocket_cutoff: args
                .pocket_cutoff
                .or(cutoffs.pocket)
                .unwrap_or(defaults.pocket_cutoff),
            overlap_cutoff: args
                .overlap_cutoff
                .or(cutoffs.overlap)
                .unwrap_or(defaults.overlap_cutoff),
            vdw_scale: args
                .vdw_scale
                .or(self.vdw_scale)
                .unwrap_or(defaults.vdw_scale),
            probe_radius: args
                .probe_radius
                .or(self.probe_radius)
                .unwrap_or(defaults.probe_radius),
        };

        validate_positive("cutoffs.electrostatic", options.electrostatic_cutoff)?;
        validate_positive("cutoffs.groove", options.groove_cutoff)?;
        validate_positive("cutoffs.pocket", options.pocket_cutoff)?;
        validate_positive("cutoffs.overlap", options.overlap_cutoff)?;
        validate_positive("vdw-scale", options.vdw_scale)?;
        validate_positive("probe-radius", options.probe_radius)?;

        Ok(options)
    }
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CliError::Config(format!(
            "`{name}` must be a positive number, got {value}"
        )));
    }
    Ok(())
}
