use std::ops::Range;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::domain::waterfall::{WaterfallBar, WaterfallSeries};
use crate::services::currency::CurrencyFormatter;
use crate::services::derivation::{simulate, Simulation};
use crate::services::scenario_yaml::{load_scenario_from_yaml_file, ScenarioError};
use crate::services::settings_yaml::ReportSettings;

const TITLE_COLOR: RGBColor = RGBColor(0x0E, 0x4D, 0xA4);
const BAR_HALF_WIDTH: f64 = 0.35;

#[derive(Error, Debug)]
pub enum WaterfallPlotError {
    #[error("failed to load scenario: {0}")]
    Scenario(#[from] ScenarioError),
    #[error("not enough data: gross fee and estimated hours must be above zero")]
    InsufficientData,
    #[error("waterfall series is empty")]
    EmptySeries,
    #[error("failed to render waterfall chart: {0}")]
    Plot(String),
}

pub fn plot_waterfall_from_yaml_file(
    input_path: &str,
    output_path: &str,
    settings: &ReportSettings,
) -> Result<(), WaterfallPlotError> {
    let inputs = load_scenario_from_yaml_file(input_path)?;
    match simulate(&inputs) {
        Simulation::Ready { waterfall, .. } => {
            write_waterfall_png(output_path, &waterfall, &settings.currency(), settings.chart_size())
        }
        Simulation::InsufficientData => Err(WaterfallPlotError::InsufficientData),
    }
}

/// Renders the series as a PNG bar chart, one category per bar.
pub fn write_waterfall_png(
    output_path: &str,
    series: &WaterfallSeries,
    currency: &CurrencyFormatter,
    size: (u32, u32),
) -> Result<(), WaterfallPlotError> {
    if series.is_empty() {
        return Err(WaterfallPlotError::EmptySeries);
    }
    render_waterfall_png(output_path, series, currency, size)?;
    log::info!("wrote waterfall chart with {} bars to {output_path}", series.len());
    Ok(())
}

fn render_waterfall_png(
    output_path: &str,
    series: &WaterfallSeries,
    currency: &CurrencyFormatter,
    size: (u32, u32),
) -> Result<(), WaterfallPlotError> {
    let labels: Vec<&str> = series.bars.iter().map(|bar| bar.label.as_str()).collect();
    let last_index = series.len() as f64 - 1.0;
    let x_range = -0.5..(last_index + 0.5);

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "Financial Result Composition",
            ("sans-serif", 28).into_font().color(&TITLE_COLOR),
        )
        .x_label_area_size(45)
        .y_label_area_size(120)
        .build_cartesian_2d(x_range.clone(), value_range(series))
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(series.len())
        .x_label_formatter(&|x| category_label(&labels, *x))
        .y_label_formatter(&|y| currency.format(*y))
        .y_desc(format!("Amount ({})", currency.symbol()))
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(series.bars.iter().enumerate().map(|(idx, bar)| {
            let (r, g, b) = bar.color.rgb();
            Rectangle::new(bar_corners(idx, bar), RGBColor(r, g, b).filled())
        }))
        .map_err(plot_error)?;
    chart
        .draw_series(
            series
                .bars
                .iter()
                .enumerate()
                .map(|(idx, bar)| Rectangle::new(bar_corners(idx, bar), BLACK.stroke_width(1))),
        )
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            vec![(x_range.start, 0.0), (x_range.end, 0.0)],
            BLACK.stroke_width(1),
        ))
        .map_err(plot_error)?;

    let value_style = ("sans-serif", 15)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(series.bars.iter().enumerate().map(|(idx, bar)| {
            Text::new(
                currency.format(bar.signed_value),
                (idx as f64, bar.baseline + bar.signed_value / 2.0),
                value_style.clone(),
            )
        }))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn bar_corners(idx: usize, bar: &WaterfallBar) -> [(f64, f64); 2] {
    let center = idx as f64;
    let low = bar.baseline.min(bar.top());
    let high = bar.baseline.max(bar.top());
    [(center - BAR_HALF_WIDTH, high), (center + BAR_HALF_WIDTH, low)]
}

/// Vertical extent covering every bar and zero, with some headroom.
fn value_range(series: &WaterfallSeries) -> Range<f64> {
    let (low, high) = series
        .bars
        .iter()
        .fold((0.0_f64, 0.0_f64), |(low, high), bar| {
            (
                low.min(bar.baseline).min(bar.top()),
                high.max(bar.baseline).max(bar.top()),
            )
        });
    let padding = (high - low).max(1.0) * 0.08;
    (low - padding)..(high + padding)
}

fn category_label(labels: &[&str], x: f64) -> String {
    let nearest = x.round();
    if nearest < 0.0 || (x - nearest).abs() > 0.01 {
        return String::new();
    }
    labels
        .get(nearest as usize)
        .map(|label| label.to_string())
        .unwrap_or_default()
}

fn plot_error<E: std::fmt::Display>(error: E) -> WaterfallPlotError {
    WaterfallPlotError::Plot(error.to_string())
}
