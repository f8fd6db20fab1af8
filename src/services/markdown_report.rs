use std::io;
use std::path::Path;

use thiserror::Error;

use crate::services::currency::{format_percent, CurrencyFormatter};
use crate::services::simulation_report::SimulationReport;

#[derive(Error, Debug)]
pub enum MarkdownReportError {
    #[error("failed to write markdown report: {0}")]
    Write(#[from] io::Error),
}

/// Files referenced from the markdown report, if available.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownAssets<'a> {
    pub logo: Option<&'a Path>,
    pub chart: Option<&'a str>,
}

/// The branding image is optional; a missing file just leaves it out.
pub fn resolve_logo(path: &Path) -> Option<&Path> {
    if path.is_file() {
        Some(path)
    } else {
        log::debug!("branding image {} not found, omitting it", path.display());
        None
    }
}

pub fn write_markdown_report(
    output_path: &str,
    report: &SimulationReport,
    currency: &CurrencyFormatter,
    assets: MarkdownAssets<'_>,
) -> Result<(), MarkdownReportError> {
    let markdown = generate_markdown_report(report, currency, assets);
    std::fs::write(output_path, markdown)?;
    log::info!("wrote markdown report to {output_path}");
    Ok(())
}

pub fn generate_markdown_report(
    report: &SimulationReport,
    currency: &CurrencyFormatter,
    assets: MarkdownAssets<'_>,
) -> String {
    let mut sections = vec![header(assets.logo)];
    sections.push(results_section(report, currency));
    sections.push(analysis_section(report));
    sections.push(waterfall_section(report, currency, assets.chart));
    let mut markdown = sections.join("\n\n");
    markdown.push('\n');
    markdown
}

fn header(logo: Option<&Path>) -> String {
    let title = "# Legal Fee Optimizer: Financial Simulation for Margin- and Risk-Based Legal Pricing";
    match logo {
        Some(path) => format!("{title}\n\n![Logo]({})", path.display()),
        None => title.to_string(),
    }
}

fn results_section(report: &SimulationReport, currency: &CurrencyFormatter) -> String {
    let outputs = &report.outputs;
    let mut lines = vec!["## Financial Results".to_string(), String::new()];
    if let Some(notice) = &report.narrative.discount_notice {
        lines.push(format!("> {notice}"));
        lines.push(String::new());
    }
    lines.push("| Indicator | Value |".to_string());
    lines.push("|-----------|-------|".to_string());
    let rows = [
        ("Contribution margin", format_percent(outputs.contribution_margin_percent, 2)),
        ("Risk-adjusted return", format_percent(outputs.risk_adjusted_return_percent, 2)),
        ("Total cost", currency.format(outputs.total_cost)),
        ("Cost per hour", currency.format(outputs.cost_per_hour)),
        ("Net profit", currency.format(outputs.net_profit)),
        ("Break-even revenue", currency.format(outputs.break_even_revenue)),
    ];
    for (name, value) in rows {
        lines.push(format!("| {name} | {value} |"));
    }
    lines.join("\n")
}

fn analysis_section(report: &SimulationReport) -> String {
    let narrative = &report.narrative;
    let mut lines = vec![
        "## Detailed Analysis and Recommendations".to_string(),
        String::new(),
        format!("**{}** ({} margin)", narrative.headline, report.outputs.risk_tier.name()),
        String::new(),
        "### Complexity, Discount and Risk".to_string(),
        String::new(),
    ];
    lines.push(narrative.cost_drivers.join("\n\n"));
    lines.push(String::new());

    lines.push("### Reading the Indicators".to_string());
    lines.push(String::new());
    for indicator in &narrative.indicators {
        lines.push(format!(
            "- **{} ({})**: {}.",
            indicator.name, indicator.value, indicator.meaning
        ));
        lines.push(format!("  Formula: `{}`", indicator.formula));
    }
    lines.push(String::new());

    lines.push("### Executive Summary".to_string());
    lines.push(String::new());
    lines.push(narrative.executive_summary.join("\n\n"));
    lines.push(String::new());

    lines.push("> **Automatic recommendations:**".to_string());
    for recommendation in &narrative.recommendations {
        lines.push(format!("> - {recommendation}"));
    }
    lines.join("\n")
}

fn waterfall_section(
    report: &SimulationReport,
    currency: &CurrencyFormatter,
    chart: Option<&str>,
) -> String {
    let mut lines = vec![
        "## Financial Structure (Waterfall)".to_string(),
        String::new(),
        "| Step | Amount | Baseline | Color |".to_string(),
        "|------|--------|----------|-------|".to_string(),
    ];
    for bar in &report.waterfall.bars {
        lines.push(format!(
            "| {} | {} | {} | `{}` |",
            bar.label,
            currency.format(bar.signed_value),
            currency.format(bar.baseline),
            bar.color.hex()
        ));
    }
    if let Some(chart) = chart {
        lines.push(String::new());
        lines.push(format!("![Waterfall chart]({chart})"));
    }
    lines.push(String::new());
    lines.push(
        "Gross fee, then discount (if any), fixed and variable costs; the net profit bar starts from zero."
            .to_string(),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_report, scenario_a, scenario_b};
    use assert_fs::prelude::*;

    #[test]
    fn generate_markdown_report_includes_results_and_analysis() {
        let report = build_report(&scenario_b());
        let markdown =
            generate_markdown_report(&report, &CurrencyFormatter::default(), MarkdownAssets::default());

        assert!(markdown.starts_with("# Legal Fee Optimizer"));
        assert!(markdown.contains("> Discount of 20% applied. Net fee: R$ 8.000,00"));
        assert!(markdown.contains("| Contribution margin | 58,75% |"));
        assert!(markdown.contains("| Net profit | R$ 4.700,00 |"));
        assert!(markdown.contains("(moderate margin)"));
        assert!(markdown.contains("Formula: `Total Cost / Estimated Hours`"));
        assert!(markdown.contains("| Discount | R$ -2.000,00 | R$ 10.000,00 | `#6B7280` |"));
        assert!(markdown.contains("| Net Profit | R$ 4.700,00 | R$ 0,00 | `#22C55E` |"));
    }

    #[test]
    fn generate_markdown_report_omits_missing_assets() {
        let report = build_report(&scenario_a());
        let markdown =
            generate_markdown_report(&report, &CurrencyFormatter::default(), MarkdownAssets::default());

        assert!(!markdown.contains("![Logo]"));
        assert!(!markdown.contains("![Waterfall chart]"));
        assert!(!markdown.contains("Discount of"));
    }

    #[test]
    fn generate_markdown_report_links_available_assets() {
        let report = build_report(&scenario_a());
        let logo = Path::new("assets/logo.png");
        let assets = MarkdownAssets {
            logo: Some(logo),
            chart: Some("report.yaml.png"),
        };
        let markdown = generate_markdown_report(&report, &CurrencyFormatter::default(), assets);

        assert!(markdown.contains("![Logo](assets/logo.png)"));
        assert!(markdown.contains("![Waterfall chart](report.yaml.png)"));
    }

    #[test]
    fn resolve_logo_requires_existing_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let logo = temp.child("logo.jpg");

        assert_eq!(resolve_logo(logo.path()), None);

        logo.write_binary(&[0xFF, 0xD8, 0xFF]).unwrap();
        assert_eq!(resolve_logo(logo.path()), Some(logo.path()));
    }
}
