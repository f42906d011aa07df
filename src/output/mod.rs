//! Output formatting for scale-pct

use crate::commands::ScaleOutcome;
use crate::error::{Result, ScaleError};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// How a scaled target is rendered on stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Name,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Render one successfully scaled target.
    ///
    /// Name prints a kubectl-style one-liner; Json and Yaml serialize the
    /// updated scale sub-resource returned by the API.
    pub fn render(&self, outcome: &ScaleOutcome) -> Result<String> {
        match self {
            OutputFormat::Name => Ok(format!(
                "{}/{} scaled to {} replicas",
                outcome.kind, outcome.name, outcome.new_replicas
            )),
            OutputFormat::Json => serde_json::to_string_pretty(&outcome.scale).map_err(Into::into),
            OutputFormat::Yaml => serde_yaml::to_string(&outcome.scale).map_err(Into::into),
        }
    }
}

/// Write a per-target failure to the error stream
pub fn report_failure(err: &ScaleError) {
    eprintln!("{}", err.to_string().red());
}
