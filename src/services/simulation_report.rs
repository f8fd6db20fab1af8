use std::io;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::domain::inputs::SimulationInputs;
use crate::domain::outputs::SimulationOutputs;
use crate::domain::waterfall::WaterfallSeries;
use crate::services::currency::CurrencyFormatter;
use crate::services::narrative::{build_narrative, Narrative};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Yaml,
    Json,
}

impl ReportFormat {
    /// JSON for `.json` paths, YAML for everything else.
    pub fn from_path(path: &str) -> Self {
        let is_json = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            ReportFormat::Json
        } else {
            ReportFormat::Yaml
        }
    }
}

/// One complete, ready simulation together with its written analysis.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationReport {
    pub data_source: String,
    pub generated_on: String,
    pub inputs: SimulationInputs,
    pub outputs: SimulationOutputs,
    pub waterfall: WaterfallSeries,
    pub narrative: Narrative,
}

impl SimulationReport {
    pub fn new(
        data_source: &str,
        inputs: SimulationInputs,
        outputs: SimulationOutputs,
        waterfall: WaterfallSeries,
        currency: &CurrencyFormatter,
    ) -> Self {
        let narrative = build_narrative(&inputs, &outputs, currency);
        Self {
            data_source: data_source.to_string(),
            generated_on: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            inputs,
            outputs,
            waterfall,
            narrative,
        }
    }
}

pub fn serialize_report(report: &SimulationReport, format: ReportFormat) -> Result<String, ReportError> {
    let contents = match format {
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
    };
    Ok(contents)
}

pub fn write_simulation_report(output_path: &str, report: &SimulationReport) -> Result<(), ReportError> {
    let format = ReportFormat::from_path(output_path);
    let contents = serialize_report(report, format)?;
    std::fs::write(output_path, contents)?;
    log::info!("wrote {format:?} report to {output_path}");
    Ok(())
}

pub fn data_source_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
