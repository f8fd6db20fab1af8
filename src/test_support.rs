use crate::domain::inputs::SimulationInputs;
use crate::services::currency::CurrencyFormatter;
use crate::services::derivation::derive;
use crate::services::simulation_report::SimulationReport;
use crate::services::waterfall::build_waterfall;

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

/// 10 000 fee, 10 hours, 2 000 fixed and 1 000 variable cost at level 3, 80% success.
pub fn scenario_a() -> SimulationInputs {
    SimulationInputs {
        gross_fee: 10000.0,
        estimated_hours: 10.0,
        fixed_cost: 2000.0,
        variable_cost: 1000.0,
        discount_percent: 0,
        complexity_level: 3,
        success_probability_percent: 80,
    }
}

/// [`scenario_a`] with a 20% discount.
pub fn scenario_b() -> SimulationInputs {
    SimulationInputs {
        discount_percent: 20,
        ..scenario_a()
    }
}

pub fn build_report(inputs: &SimulationInputs) -> SimulationReport {
    let outputs = derive(inputs);
    let waterfall = build_waterfall(inputs, &outputs);
    SimulationReport::new(
        "scenario.yaml",
        *inputs,
        outputs,
        waterfall,
        &CurrencyFormatter::default(),
    )
}
