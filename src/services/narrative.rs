use serde::Serialize;

use crate::domain::inputs::SimulationInputs;
use crate::domain::outputs::{RiskTier, SimulationOutputs};
use crate::services::currency::{format_percent, CurrencyFormatter};

pub const INSUFFICIENT_DATA_MESSAGE: &str = "Waiting for data to build the analysis. \
Enter a gross fee and estimated hours above zero to see margins, profitability and recommendations.";

pub const RECOMMENDATIONS: [&str; 4] = [
    "Margin < 30%: case is financially unviable.",
    "30% <= margin < 45%: pricing is inadequate.",
    "45% <= margin < 60%: acceptable range, monitor execution.",
    "Margin >= 60%: sound and competitive structure.",
];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Indicator {
    pub name: &'static str,
    pub value: String,
    pub meaning: &'static str,
    pub formula: &'static str,
}

/// Written analysis of one simulation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Narrative {
    pub discount_notice: Option<String>,
    pub headline: &'static str,
    pub cost_drivers: Vec<String>,
    pub indicators: Vec<Indicator>,
    pub executive_summary: Vec<String>,
    pub recommendations: Vec<&'static str>,
}

pub fn tier_headline(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Critical => "Critical margin: the case is financially unviable.",
        RiskTier::Weak => {
            "Margin below the acceptable minimum (45%). Revisit pricing or reduce costs."
        }
        RiskTier::Moderate => {
            "Reasonable margin, but sensitive to variance. Monitor execution and productivity."
        }
        RiskTier::Healthy => {
            "Healthy, sustainable margin. Sound and competitive financial structure."
        }
    }
}

pub fn build_narrative(
    inputs: &SimulationInputs,
    outputs: &SimulationOutputs,
    currency: &CurrencyFormatter,
) -> Narrative {
    Narrative {
        discount_notice: discount_notice(inputs, outputs, currency),
        headline: tier_headline(outputs.risk_tier),
        cost_drivers: cost_drivers(inputs, outputs, currency),
        indicators: indicators(outputs, currency),
        executive_summary: executive_summary(outputs, currency),
        recommendations: RECOMMENDATIONS.to_vec(),
    }
}

fn discount_notice(
    inputs: &SimulationInputs,
    outputs: &SimulationOutputs,
    currency: &CurrencyFormatter,
) -> Option<String> {
    if inputs.discount_percent == 0 {
        return None;
    }
    Some(format!(
        "Discount of {}% applied. Net fee: {}",
        inputs.discount_percent,
        currency.format(outputs.net_fee)
    ))
}

fn cost_drivers(
    inputs: &SimulationInputs,
    outputs: &SimulationOutputs,
    currency: &CurrencyFormatter,
) -> Vec<String> {
    let complexity = format!(
        "Complexity level {} applies a {:.2}x factor to costs.",
        inputs.complexity_level, outputs.complexity_factor
    );
    let discount = if inputs.discount_percent > 0 {
        format!(
            "A {}% discount ({}) reduced the gross fee from {} to {}.",
            inputs.discount_percent,
            currency.format(outputs.discount_value),
            currency.format(inputs.gross_fee),
            currency.format(outputs.net_fee)
        )
    } else {
        format!(
            "No discount applied. Net fee equals the gross fee ({}).",
            currency.format(inputs.gross_fee)
        )
    };
    let success = format!(
        "A {}% probability of success adjusts the expected return.",
        inputs.success_probability_percent
    );
    vec![complexity, discount, success]
}

fn indicators(outputs: &SimulationOutputs, currency: &CurrencyFormatter) -> Vec<Indicator> {
    vec![
        Indicator {
            name: "Contribution margin",
            value: format_percent(outputs.contribution_margin_percent, 2),
            meaning: "share of the net fee left after covering fixed and variable costs",
            formula: "(Net Fee - Total Cost) / Net Fee x 100",
        },
        Indicator {
            name: "Net profit",
            value: currency.format(outputs.net_profit),
            meaning: "final result after discount and costs",
            formula: "Net Fee - Total Cost",
        },
        Indicator {
            name: "Total cost",
            value: currency.format(outputs.total_cost),
            meaning: "fixed and variable costs adjusted for complexity",
            formula: "(Fixed Costs + Variable Costs) x Complexity Factor",
        },
        Indicator {
            name: "Cost per hour",
            value: currency.format(outputs.cost_per_hour),
            meaning: "average cost of each estimated hour of work",
            formula: "Total Cost / Estimated Hours",
        },
        Indicator {
            name: "Break-even revenue",
            value: currency.format(outputs.break_even_revenue),
            meaning: "minimum revenue that brings profit to zero",
            formula: "Total Cost / (Contribution Margin / 100)",
        },
        Indicator {
            name: "Risk-adjusted return",
            value: format_percent(outputs.risk_adjusted_return_percent, 2),
            meaning: "margin weighted by the probability of success",
            formula: "Contribution Margin x (Success Probability / 100)",
        },
    ]
}

fn executive_summary(outputs: &SimulationOutputs, currency: &CurrencyFormatter) -> Vec<String> {
    let (posture, resilience) = if outputs.risk_tier == RiskTier::Healthy {
        (
            "solid and sustainable",
            "good capacity to absorb market swings",
        )
    } else {
        (
            "reasonable but sensitive to cost variations",
            "room for improvement through pricing review or operational efficiency",
        )
    };

    vec![
        format!(
            "This case shows a {} contribution margin and a {} risk-adjusted return.",
            format_percent(outputs.contribution_margin_percent, 1),
            format_percent(outputs.risk_adjusted_return_percent, 1)
        ),
        format!(
            "Estimated total cost is {}, while projected net profit reaches {}, given the cost structure and the discount applied.",
            currency.format(outputs.total_cost),
            currency.format(outputs.net_profit)
        ),
        format!(
            "Break-even is reached from {} in fees, the minimum revenue needed to avoid a loss.",
            currency.format(outputs.break_even_revenue)
        ),
        format!("This scenario reflects a {posture} operation with {resilience}."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::derivation::derive;
    use crate::test_support::{scenario_a, scenario_b};

    fn narrative_for(inputs: &SimulationInputs) -> Narrative {
        build_narrative(inputs, &derive(inputs), &CurrencyFormatter::default())
    }

    #[test]
    fn tier_headline_differs_per_tier() {
        assert!(tier_headline(RiskTier::Critical).contains("unviable"));
        assert!(tier_headline(RiskTier::Weak).contains("45%"));
        assert!(tier_headline(RiskTier::Moderate).contains("sensitive"));
        assert!(tier_headline(RiskTier::Healthy).contains("Healthy"));
    }

    #[test]
    fn build_narrative_without_discount() {
        let narrative = narrative_for(&scenario_a());

        assert_eq!(narrative.discount_notice, None);
        assert_eq!(narrative.headline, tier_headline(RiskTier::Healthy));
        assert_eq!(
            narrative.cost_drivers[0],
            "Complexity level 3 applies a 1.10x factor to costs."
        );
        assert_eq!(
            narrative.cost_drivers[1],
            "No discount applied. Net fee equals the gross fee (R$ 10.000,00)."
        );
        assert!(narrative.executive_summary[0].contains("67,0%"));
        assert!(narrative.executive_summary[0].contains("53,6%"));
        assert!(narrative.executive_summary[3].contains("solid and sustainable"));
    }

    #[test]
    fn build_narrative_with_discount() {
        let narrative = narrative_for(&scenario_b());

        assert_eq!(
            narrative.discount_notice.as_deref(),
            Some("Discount of 20% applied. Net fee: R$ 8.000,00")
        );
        assert_eq!(
            narrative.cost_drivers[1],
            "A 20% discount (R$ 2.000,00) reduced the gross fee from R$ 10.000,00 to R$ 8.000,00."
        );
        assert_eq!(narrative.headline, tier_headline(RiskTier::Moderate));
        assert!(narrative.executive_summary[3].contains("sensitive to cost variations"));
    }

    #[test]
    fn build_narrative_lists_every_indicator() {
        let narrative = narrative_for(&scenario_a());

        let names: Vec<&str> = narrative.indicators.iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec![
                "Contribution margin",
                "Net profit",
                "Total cost",
                "Cost per hour",
                "Break-even revenue",
                "Risk-adjusted return"
            ]
        );
        assert_eq!(narrative.indicators[0].value, "67,00%");
        assert_eq!(narrative.indicators[2].value, "R$ 3.300,00");
        assert_eq!(narrative.indicators[3].value, "R$ 330,00");
        assert_eq!(narrative.indicators[4].value, "R$ 4.925,37");
        assert_eq!(narrative.recommendations.len(), 4);
    }
}
