use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::config::{Config, ReportFormat};
use crate::error::PipeSageError;
use crate::output;
use crate::pipeline::PipelineRun;
use crate::prediction;
use crate::report::{RiskReport, ScoredPipeline};
use crate::sample;

#[derive(Parser)]
#[command(name = "pipesage")]
#[command(author, version, about = "CI/CD Failure Prediction Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the JSON report to this path instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PIPESAGE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess pipeline snapshots from a JSON or YAML file
    Predict {
        /// Snapshot file: a JSON or YAML array of pipeline runs
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// Assess the built-in sample pipelines
    Demo {
        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Commands::Predict { input, format } => {
                let path = input
                    .clone()
                    .or_else(|| config.input.snapshots.as_deref().map(PathBuf::from))
                    .ok_or_else(|| {
                        PipeSageError::Config(
                            "no snapshot file given; pass --input or set input.snapshots"
                                .to_string(),
                        )
                    })?;

                info!("Assessing pipeline snapshots from: {}", path.display());
                let runs = load_runs(&path)?;
                let report = score_runs(&runs)?;
                self.emit(&report, format.unwrap_or(config.output.format), &config)
            }
            Commands::Demo { format } => {
                info!("Assessing built-in sample pipelines");
                let runs = sample::sample_pipelines();
                let report = score_runs(&runs)?;
                self.emit(&report, format.unwrap_or(config.output.format), &config)
            }
        }
    }

    fn emit(&self, report: &RiskReport, format: ReportFormat, config: &Config) -> Result<()> {
        match format {
            ReportFormat::Summary => {
                output::print_summary(report);
                Ok(())
            }
            ReportFormat::Json => {
                let json_output = if self.pretty || config.output.pretty {
                    serde_json::to_string_pretty(report)?
                } else {
                    serde_json::to_string(report)?
                };

                if let Some(output_path) = &self.output {
                    std::fs::write(output_path, json_output)?;
                    info!("Report written to: {}", output_path.display());
                } else {
                    println!("{}", json_output);
                }
                Ok(())
            }
        }
    }
}

/// Parses a snapshot file into pipeline runs, choosing the parser by file
/// extension with a JSON-then-YAML fallback for unknown extensions.
fn load_runs(path: &Path) -> Result<Vec<PipelineRun>> {
    let contents = std::fs::read_to_string(path)
        .map_err(PipeSageError::from)?;

    let runs = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(PipeSageError::from)?,
        Some("yaml" | "yml") => serde_yaml::from_str(&contents).map_err(PipeSageError::from)?,
        _ => serde_json::from_str(&contents)
            .or_else(|_| serde_yaml::from_str(&contents))
            .map_err(PipeSageError::from)?,
    };

    Ok(runs)
}

fn score_runs(runs: &[PipelineRun]) -> Result<RiskReport> {
    let mut predictions = Vec::with_capacity(runs.len());

    for run in runs {
        debug!("Scoring pipeline: {}", run.id);
        let prediction = prediction::predict_failure(run)?;
        predictions.push(ScoredPipeline {
            pipeline: run.clone(),
            prediction,
        });
    }

    info!("Scored {} pipeline(s)", predictions.len());
    Ok(RiskReport::new(predictions))
}
