use crate::services::currency::{format_percent, CurrencyFormatter};
use crate::services::narrative::INSUFFICIENT_DATA_MESSAGE;
use crate::services::simulation_report::SimulationReport;

pub fn format_insufficient_data() -> String {
    format!("Insufficient data\n{INSUFFICIENT_DATA_MESSAGE}")
}

pub fn format_simulation_report(report: &SimulationReport, currency: &CurrencyFormatter) -> String {
    let inputs = &report.inputs;
    let outputs = &report.outputs;
    let narrative = &report.narrative;

    let mut lines = Vec::new();
    lines.push("Legal Fee Simulation".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Gross fee: {}", currency.format(inputs.gross_fee)));
    lines.push(format!("Estimated hours: {:.2}", inputs.estimated_hours));
    lines.push(format!("Complexity level: {}", inputs.complexity_level));
    lines.push(format!("Success probability: {}%", inputs.success_probability_percent));
    if let Some(notice) = &narrative.discount_notice {
        lines.push(notice.clone());
    }
    lines.push(String::new());

    lines.push("Indicator | Value".to_string());
    lines.push("----------|------".to_string());
    lines.push(format_row(
        "Contribution margin",
        &format_percent(outputs.contribution_margin_percent, 2),
    ));
    lines.push(format_row(
        "Risk-adjusted return",
        &format_percent(outputs.risk_adjusted_return_percent, 2),
    ));
    lines.push(format_row("Total cost", &currency.format(outputs.total_cost)));
    lines.push(format_row("Cost per hour", &currency.format(outputs.cost_per_hour)));
    lines.push(format_row("Net profit", &currency.format(outputs.net_profit)));
    lines.push(format_row(
        "Break-even revenue",
        &currency.format(outputs.break_even_revenue),
    ));
    lines.push(String::new());

    lines.push(format!("Risk tier: {}", outputs.risk_tier.name()));
    lines.push(narrative.headline.to_string());
    lines.push(String::new());

    lines.push("Complexity, discount and risk:".to_string());
    lines.extend(narrative.cost_drivers.iter().cloned());
    lines.push(String::new());

    lines.push("Indicators:".to_string());
    for indicator in &narrative.indicators {
        lines.push(format!(
            "- {} ({}): {}. Formula: {}",
            indicator.name, indicator.value, indicator.meaning, indicator.formula
        ));
    }
    lines.push(String::new());

    lines.push("Executive summary:".to_string());
    lines.extend(narrative.executive_summary.iter().cloned());
    lines.push(String::new());

    lines.push("Waterfall:".to_string());
    lines.push("Step | Amount | Baseline".to_string());
    lines.push("-----|--------|---------".to_string());
    for bar in &report.waterfall.bars {
        lines.push(format!(
            "{} | {} | {}",
            bar.label,
            currency.format(bar.signed_value),
            currency.format(bar.baseline)
        ));
    }
    lines.push(String::new());

    lines.push("Recommendations:".to_string());
    for recommendation in &narrative.recommendations {
        lines.push(format!("- {recommendation}"));
    }

    lines.join("\n")
}

fn format_row(label: &str, value: &str) -> String {
    format!("{label} | {value}")
}
