use std::process::ExitCode;

use crate::commands::base_commands::InputArgs;
use crate::commands::report_format::{format_insufficient_data, format_simulation_report};
use crate::services::derivation::{simulate, Simulation};
use crate::services::settings_yaml::ReportSettings;
use crate::services::simulation_report::SimulationReport;
use crate::services::waterfall_plot::write_waterfall_png;

pub fn evaluate_command(args: &InputArgs, chart: Option<&str>, settings: &ReportSettings) -> ExitCode {
    let inputs = args.to_inputs();
    if let Err(e) = inputs.validate() {
        eprintln!("Invalid inputs: {e}");
        return ExitCode::FAILURE;
    }

    let (outputs, waterfall) = match simulate(&inputs) {
        Simulation::Ready { outputs, waterfall } => (outputs, waterfall),
        Simulation::InsufficientData => {
            println!("{}", format_insufficient_data());
            return ExitCode::SUCCESS;
        }
    };

    let currency = settings.currency();
    let report = SimulationReport::new("command line", inputs, outputs, waterfall, &currency);
    println!("{}", format_simulation_report(&report, &currency));

    if let Some(chart) = chart {
        if let Err(e) = write_waterfall_png(chart, &report.waterfall, &currency, settings.chart_size()) {
            eprintln!("Failed to write waterfall chart: {e}");
            return ExitCode::FAILURE;
        }
        println!("Waterfall chart written to {chart}");
    }
    ExitCode::SUCCESS
}
