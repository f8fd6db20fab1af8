use crate::domain::inputs::SimulationInputs;
use crate::domain::outputs::SimulationOutputs;
use crate::domain::waterfall::{BarColor, WaterfallBar, WaterfallSeries};

pub const GROSS_FEE_LABEL: &str = "Gross Fee";
pub const DISCOUNT_LABEL: &str = "Discount";
pub const FIXED_COSTS_LABEL: &str = "Fixed Costs";
pub const VARIABLE_COSTS_LABEL: &str = "Variable Costs";
pub const NET_PROFIT_LABEL: &str = "Net Profit";

/// Decomposes the gross fee into discount, costs and net profit.
///
/// The discount bar only appears when there is a discount. Chained bars start
/// at the running total of the bars before them; the net profit bar starts at
/// zero.
pub fn build_waterfall(inputs: &SimulationInputs, outputs: &SimulationOutputs) -> WaterfallSeries {
    let mut steps = vec![(GROSS_FEE_LABEL, inputs.gross_fee, BarColor::NeutralDark)];
    if outputs.discount_value > 0.0 {
        steps.push((DISCOUNT_LABEL, -outputs.discount_value, BarColor::NeutralGray));
    }
    steps.push((FIXED_COSTS_LABEL, -outputs.adjusted_fixed_cost, BarColor::Amber));
    steps.push((VARIABLE_COSTS_LABEL, -outputs.adjusted_variable_cost, BarColor::Yellow));

    let mut bars = Vec::with_capacity(steps.len() + 1);
    let mut cumulative = 0.0;
    for (label, signed_value, color) in steps {
        bars.push(WaterfallBar {
            label: label.to_string(),
            signed_value,
            baseline: cumulative,
            color,
        });
        cumulative += signed_value;
    }

    bars.push(WaterfallBar {
        label: NET_PROFIT_LABEL.to_string(),
        signed_value: outputs.net_profit,
        baseline: 0.0,
        color: BarColor::Green,
    });

    WaterfallSeries { bars }
}
