pub mod currency;
pub mod derivation;
pub mod markdown_report;
pub mod narrative;
pub mod scenario_yaml;
pub mod settings_yaml;
pub mod simulation_report;
pub mod waterfall;
pub mod waterfall_plot;
