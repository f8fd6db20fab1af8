use std::process::ExitCode;

use crate::commands::report_format::{format_insufficient_data, format_simulation_report};
use crate::services::derivation::{simulate, Simulation};
use crate::services::markdown_report::{resolve_logo, write_markdown_report, MarkdownAssets};
use crate::services::scenario_yaml::load_scenario_from_yaml_file;
use crate::services::settings_yaml::ReportSettings;
use crate::services::simulation_report::{data_source_name, write_simulation_report, SimulationReport};
use crate::services::waterfall_plot::write_waterfall_png;

pub fn simulate_command(input: &str, output: &str, settings: &ReportSettings) -> ExitCode {
    let inputs = match load_scenario_from_yaml_file(input) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Failed to load scenario: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (outputs, waterfall) = match simulate(&inputs) {
        Simulation::Ready { outputs, waterfall } => (outputs, waterfall),
        Simulation::InsufficientData => {
            println!("{}", format_insufficient_data());
            return ExitCode::SUCCESS;
        }
    };

    let currency = settings.currency();
    let report = SimulationReport::new(&data_source_name(input), inputs, outputs, waterfall, &currency);
    let chart_path = format!("{output}.png");
    if let Err(e) = write_waterfall_png(&chart_path, &report.waterfall, &currency, settings.chart_size()) {
        eprintln!("Failed to write waterfall chart: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = write_simulation_report(output, &report) {
        eprintln!("Failed to write simulation report: {e}");
        return ExitCode::FAILURE;
    }

    // The markdown file sits next to the chart, so link it by file name.
    let chart_name = data_source_name(&chart_path);
    let assets = MarkdownAssets {
        logo: resolve_logo(&settings.logo_path),
        chart: Some(chart_name.as_str()),
    };
    let markdown_path = format!("{output}.md");
    if let Err(e) = write_markdown_report(&markdown_path, &report, &currency, assets) {
        eprintln!("Failed to write markdown report: {e}");
        return ExitCode::FAILURE;
    }

    println!("{}", format_simulation_report(&report, &currency));
    println!("Simulation report written to {output}");
    println!("Waterfall chart written to {chart_path}");
    println!("Markdown report written to {markdown_path}");
    ExitCode::SUCCESS
}
