use std::process::ExitCode;

use crate::services::settings_yaml::ReportSettings;
use crate::services::waterfall_plot::plot_waterfall_from_yaml_file;

pub fn plot_waterfall_command(input: &str, output: &str, settings: &ReportSettings) -> ExitCode {
    match plot_waterfall_from_yaml_file(input, output, settings) {
        Ok(()) => {
            println!("Waterfall chart written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plot waterfall: {e}");
            ExitCode::FAILURE
        }
    }
}
