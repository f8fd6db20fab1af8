use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::services::currency::{CurrencyFormatter, DEFAULT_CURRENCY_SYMBOL};

pub const DEFAULT_LOGO_PATH: &str = "assets/logo_gui.jpg";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse settings yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("chart size must be positive (got {width}x{height})")]
    InvalidChartSize { width: u32, height: u32 },
}

/// Presentation settings. None of them affect computed values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub currency_symbol: String,
    pub logo_path: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            chart_width: 900,
            chart_height: 600,
        }
    }
}

impl ReportSettings {
    pub fn currency(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(&self.currency_symbol)
    }

    pub fn chart_size(&self) -> (u32, u32) {
        (self.chart_width, self.chart_height)
    }
}

/// Loads settings from `path`, or the defaults when no path is given.
pub fn load_report_settings(path: Option<&str>) -> Result<ReportSettings, SettingsError> {
    let Some(path) = path else {
        return Ok(ReportSettings::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let settings = deserialize_settings_from_yaml_str(&contents)?;
    log::debug!("loaded report settings from {path}");
    Ok(settings)
}

pub fn deserialize_settings_from_yaml_str(yaml: &str) -> Result<ReportSettings, SettingsError> {
    let settings: ReportSettings = serde_yaml::from_str(yaml)?;
    if settings.chart_width == 0 || settings.chart_height == 0 {
        return Err(SettingsError::InvalidChartSize {
            width: settings.chart_width,
            height: settings.chart_height,
        });
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_report_settings_without_path_uses_defaults() {
        let settings = load_report_settings(None).unwrap();
        assert_eq!(settings, ReportSettings::default());
        assert_eq!(settings.currency().format(1.0), "R$ 1,00");
        assert_eq!(settings.logo_path, PathBuf::from(DEFAULT_LOGO_PATH));
    }

    #[test]
    fn deserialize_settings_overrides_given_fields() {
        let settings =
            deserialize_settings_from_yaml_str("currency_symbol: EUR\nchart_width: 1200\n").unwrap();

        assert_eq!(settings.currency_symbol, "EUR");
        assert_eq!(settings.chart_size(), (1200, 600));
        assert_eq!(settings.logo_path, PathBuf::from(DEFAULT_LOGO_PATH));
    }

    #[test]
    fn deserialize_settings_rejects_zero_chart_size() {
        let error = deserialize_settings_from_yaml_str("chart_height: 0\n")
            .expect_err("expected invalid chart size");
        assert!(matches!(
            error,
            SettingsError::InvalidChartSize { width: 900, height: 0 }
        ));
    }
}
