use serde::Serialize;

/// How comfortable the contribution margin is.
///
/// Ranges are half-open and a boundary value belongs to the upper tier:
/// `< 30` critical, `[30, 45)` weak, `[45, 60)` moderate, `>= 60` healthy.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Critical,
    Weak,
    Moderate,
    Healthy,
}

impl RiskTier {
    pub const WEAK_FLOOR: f64 = 30.0;
    pub const MODERATE_FLOOR: f64 = 45.0;
    pub const HEALTHY_FLOOR: f64 = 60.0;

    pub fn from_margin(contribution_margin_percent: f64) -> Self {
        if contribution_margin_percent < Self::WEAK_FLOOR {
            RiskTier::Critical
        } else if contribution_margin_percent < Self::MODERATE_FLOOR {
            RiskTier::Weak
        } else if contribution_margin_percent < Self::HEALTHY_FLOOR {
            RiskTier::Moderate
        } else {
            RiskTier::Healthy
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Critical => "critical",
            RiskTier::Weak => "weak",
            RiskTier::Moderate => "moderate",
            RiskTier::Healthy => "healthy",
        }
    }
}

/// Everything derived from one set of [`SimulationInputs`](crate::domain::inputs::SimulationInputs).
///
/// Values are unrounded; rounding happens only when they are formatted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationOutputs {
    pub discount_value: f64,
    pub net_fee: f64,
    pub complexity_factor: f64,
    pub adjusted_fixed_cost: f64,
    pub adjusted_variable_cost: f64,
    pub total_cost: f64,
    pub cost_per_hour: f64,
    pub net_profit: f64,
    pub contribution_margin_percent: f64,
    pub risk_adjusted_return_percent: f64,
    pub break_even_revenue: f64,
    pub risk_tier: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_margin_puts_boundaries_in_upper_tier() {
        assert_eq!(RiskTier::from_margin(29.999), RiskTier::Critical);
        assert_eq!(RiskTier::from_margin(30.0), RiskTier::Weak);
        assert_eq!(RiskTier::from_margin(44.999), RiskTier::Weak);
        assert_eq!(RiskTier::from_margin(45.0), RiskTier::Moderate);
        assert_eq!(RiskTier::from_margin(59.999), RiskTier::Moderate);
        assert_eq!(RiskTier::from_margin(60.0), RiskTier::Healthy);
    }

    #[test]
    fn from_margin_handles_losses_and_full_margin() {
        assert_eq!(RiskTier::from_margin(-250.0), RiskTier::Critical);
        assert_eq!(RiskTier::from_margin(0.0), RiskTier::Critical);
        assert_eq!(RiskTier::from_margin(100.0), RiskTier::Healthy);
    }

    #[test]
    fn risk_tier_serializes_in_snake_case() {
        let yaml = serde_yaml::to_string(&RiskTier::Moderate).unwrap();
        assert_eq!(yaml.trim(), "moderate");
    }
}
