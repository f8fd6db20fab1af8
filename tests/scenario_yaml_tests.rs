use assert_fs::prelude::*;

use fees::domain::outputs::RiskTier;
use fees::services::derivation::{simulate, Simulation};
use fees::services::scenario_yaml::load_scenario_from_yaml_file;

#[test]
fn loads_scenario_and_simulates_it() {
    let temp = assert_fs::TempDir::new().unwrap();
    let scenario = temp.child("scenario.yaml");
    scenario
        .write_str(
            r#"gross_fee: 1000
estimated_hours: 5
fixed_cost: 400
variable_cost: 200
complexity_level: 5
success_probability_percent: 50
"#,
        )
        .unwrap();

    let inputs = load_scenario_from_yaml_file(scenario.path().to_str().unwrap()).unwrap();
    let Simulation::Ready { outputs, waterfall } = simulate(&inputs) else {
        panic!("expected a ready simulation");
    };

    // 600 of costs at level 5 => 900 total, 100 profit on a 1000 net fee.
    assert!((outputs.total_cost - 900.0).abs() < 1e-9);
    assert!((outputs.contribution_margin_percent - 10.0).abs() < 1e-9);
    assert!((outputs.risk_adjusted_return_percent - 5.0).abs() < 1e-9);
    assert!((outputs.cost_per_hour - 180.0).abs() < 1e-9);
    assert_eq!(outputs.risk_tier, RiskTier::Critical);
    assert_eq!(waterfall.len(), 4);
}
