use crate::domain::complexity::complexity_factor;
use crate::domain::inputs::SimulationInputs;
use crate::domain::outputs::{RiskTier, SimulationOutputs};
use crate::domain::waterfall::WaterfallSeries;
use crate::services::waterfall::build_waterfall;

/// Result of running the engine behind its guard clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Simulation {
    /// Fee or hours were not positive; nothing was derived.
    InsufficientData,
    Ready {
        outputs: SimulationOutputs,
        waterfall: WaterfallSeries,
    },
}

/// Derives outputs and the waterfall, or reports that the inputs are not
/// enough to do so.
pub fn simulate(inputs: &SimulationInputs) -> Simulation {
    if !inputs.has_sufficient_data() {
        log::debug!(
            "skipping derivation: gross_fee={} estimated_hours={}",
            inputs.gross_fee,
            inputs.estimated_hours
        );
        return Simulation::InsufficientData;
    }

    let outputs = derive(inputs);
    let waterfall = build_waterfall(inputs, &outputs);
    log::debug!(
        "derived margin {:.4}% ({}) with {} waterfall bars",
        outputs.contribution_margin_percent,
        outputs.risk_tier.name(),
        waterfall.len()
    );
    Simulation::Ready { outputs, waterfall }
}

/// Closed-form derivation of every financial indicator.
///
/// Total over the input domain: each division falls back to `0` when its
/// denominator is not positive.
pub fn derive(inputs: &SimulationInputs) -> SimulationOutputs {
    let discount_value = inputs.gross_fee * (f64::from(inputs.discount_percent) / 100.0);
    let net_fee = inputs.gross_fee - discount_value;

    let complexity_factor = complexity_factor(inputs.complexity_level);
    let adjusted_fixed_cost = inputs.fixed_cost * complexity_factor;
    let adjusted_variable_cost = inputs.variable_cost * complexity_factor;
    let total_cost = adjusted_fixed_cost + adjusted_variable_cost;

    let cost_per_hour = if inputs.estimated_hours > 0.0 {
        total_cost / inputs.estimated_hours
    } else {
        0.0
    };
    let net_profit = net_fee - total_cost;

    let contribution_margin_percent = if net_fee > 0.0 {
        (net_profit / net_fee) * 100.0
    } else {
        0.0
    };
    let risk_adjusted_return_percent =
        contribution_margin_percent * (f64::from(inputs.success_probability_percent) / 100.0);
    let break_even_revenue = if contribution_margin_percent > 0.0 {
        total_cost / (contribution_margin_percent / 100.0)
    } else {
        0.0
    };

    SimulationOutputs {
        discount_value,
        net_fee,
        complexity_factor,
        adjusted_fixed_cost,
        adjusted_variable_cost,
        total_cost,
        cost_per_hour,
        net_profit,
        contribution_margin_percent,
        risk_adjusted_return_percent,
        break_even_revenue,
        risk_tier: RiskTier::from_margin(contribution_margin_percent),
    }
}
