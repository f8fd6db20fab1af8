use clap::{value_parser, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::inputs::SimulationInputs;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Optional presentation settings YAML
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a pricing scenario given on the command line
    Evaluate {
        #[command(flatten)]
        inputs: InputArgs,
        /// Optional output PNG file for the waterfall chart
        #[arg(long)]
        chart: Option<String>,
    },
    /// Evaluate a scenario YAML file and write YAML/JSON, Markdown and PNG reports
    Simulate {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output report file (.yaml or .json)
        #[arg(short, long)]
        output: String,
    },
    /// Plot the waterfall chart of a scenario YAML file into a PNG
    PlotWaterfall {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Gross fee before discount
    #[arg(long, default_value_t = 0.0)]
    pub gross_fee: f64,
    /// Estimated hours of work
    #[arg(long = "hours", default_value_t = 0.0)]
    pub estimated_hours: f64,
    /// Fixed costs of the case
    #[arg(long, default_value_t = 0.0)]
    pub fixed_cost: f64,
    /// Variable costs of the case
    #[arg(long, default_value_t = 0.0)]
    pub variable_cost: f64,
    /// Discount on the gross fee in percent
    #[arg(long = "discount", default_value_t = 0, value_parser = value_parser!(u8).range(0..=100))]
    pub discount_percent: u8,
    /// Case complexity level
    #[arg(long = "complexity", default_value_t = 3, value_parser = value_parser!(u8).range(1..=5))]
    pub complexity_level: u8,
    /// Probability of success in percent
    #[arg(long = "success", default_value_t = 80, value_parser = value_parser!(u8).range(0..=100))]
    pub success_probability_percent: u8,
}

impl InputArgs {
    pub fn to_inputs(&self) -> SimulationInputs {
        SimulationInputs {
            gross_fee: self.gross_fee,
            estimated_hours: self.estimated_hours,
            fixed_cost: self.fixed_cost,
            variable_cost: self.variable_cost,
            discount_percent: self.discount_percent,
            complexity_level: self.complexity_level,
            success_probability_percent: self.success_probability_percent,
        }
    }
}
