use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::inputs::{check_amount, check_complexity, check_percent, InputError, SimulationInputs};

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid scenario: {0}")]
    Invalid(#[from] InputError),
}

/// Scenario file layout. Missing fields take the same defaults as a blank form.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ScenarioRecord {
    gross_fee: f64,
    estimated_hours: f64,
    fixed_cost: f64,
    variable_cost: f64,
    discount_percent: i64,
    complexity_level: i64,
    success_probability_percent: i64,
}

impl Default for ScenarioRecord {
    fn default() -> Self {
        let defaults = SimulationInputs::default();
        Self {
            gross_fee: defaults.gross_fee,
            estimated_hours: defaults.estimated_hours,
            fixed_cost: defaults.fixed_cost,
            variable_cost: defaults.variable_cost,
            discount_percent: i64::from(defaults.discount_percent),
            complexity_level: i64::from(defaults.complexity_level),
            success_probability_percent: i64::from(defaults.success_probability_percent),
        }
    }
}

impl ScenarioRecord {
    fn into_inputs(self) -> Result<SimulationInputs, InputError> {
        Ok(SimulationInputs {
            gross_fee: check_amount("gross_fee", self.gross_fee)?,
            estimated_hours: check_amount("estimated_hours", self.estimated_hours)?,
            fixed_cost: check_amount("fixed_cost", self.fixed_cost)?,
            variable_cost: check_amount("variable_cost", self.variable_cost)?,
            discount_percent: check_percent("discount_percent", self.discount_percent)?,
            complexity_level: check_complexity(self.complexity_level)?,
            success_probability_percent: check_percent(
                "success_probability_percent",
                self.success_probability_percent,
            )?,
        })
    }
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<SimulationInputs, ScenarioError> {
    let contents = std::fs::read_to_string(path)?;
    let inputs = deserialize_scenario_from_yaml_str(&contents)?;
    log::debug!("loaded scenario from {path}: {inputs:?}");
    Ok(inputs)
}

pub fn deserialize_scenario_from_yaml_str(yaml: &str) -> Result<SimulationInputs, ScenarioError> {
    let record: ScenarioRecord = serde_yaml::from_str(yaml)?;
    Ok(record.into_inputs()?)
}
