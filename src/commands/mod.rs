pub mod base_commands;
pub mod completions_cmd;
pub mod evaluate_cmd;
pub mod plot_waterfall_cmd;
pub mod report_format;
pub mod simulate_cmd;
