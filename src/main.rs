use std::process::ExitCode;

use clap::Parser;
use fees::commands::base_commands::{CliArgs, Commands};
use fees::commands::completions_cmd::completions_command;
use fees::commands::evaluate_cmd::evaluate_command;
use fees::commands::plot_waterfall_cmd::plot_waterfall_command;
use fees::commands::simulate_cmd::simulate_command;
use fees::services::settings_yaml::load_report_settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let settings = match load_report_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load report settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Commands::Evaluate { inputs, chart } => evaluate_command(&inputs, chart.as_deref(), &settings),
        Commands::Simulate { input, output } => simulate_command(&input, &output, &settings),
        Commands::PlotWaterfall { input, output } => plot_waterfall_command(&input, &output, &settings),
        Commands::Completions { shell } => completions_command(shell),
    }
}
