use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be between 0 and 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: i64 },
    #[error("complexity_level must be between 1 and 5 (got {0})")]
    ComplexityOutOfRange(i64),
}

/// The six figures a pricing simulation starts from.
///
/// Amounts are plain currency units; the percent fields are whole numbers in
/// `0..=100`. Whoever builds the value is responsible for keeping it inside
/// that domain, see [`SimulationInputs::validate`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SimulationInputs {
    pub gross_fee: f64,
    pub estimated_hours: f64,
    pub fixed_cost: f64,
    pub variable_cost: f64,
    pub discount_percent: u8,
    pub complexity_level: u8,
    pub success_probability_percent: u8,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            gross_fee: 0.0,
            estimated_hours: 0.0,
            fixed_cost: 0.0,
            variable_cost: 0.0,
            discount_percent: 0,
            complexity_level: 3,
            success_probability_percent: 80,
        }
    }
}

impl SimulationInputs {
    /// Both the fee and the hours have to be positive before anything can be derived.
    pub fn has_sufficient_data(&self) -> bool {
        self.estimated_hours > 0.0 && self.gross_fee > 0.0
    }

    pub fn validate(&self) -> Result<(), InputError> {
        check_amount("gross_fee", self.gross_fee)?;
        check_amount("estimated_hours", self.estimated_hours)?;
        check_amount("fixed_cost", self.fixed_cost)?;
        check_amount("variable_cost", self.variable_cost)?;
        check_percent("discount_percent", i64::from(self.discount_percent))?;
        check_percent(
            "success_probability_percent",
            i64::from(self.success_probability_percent),
        )?;
        check_complexity(i64::from(self.complexity_level))?;
        Ok(())
    }
}

pub(crate) fn check_amount(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InputError::NegativeAmount { field, value })
    }
}

pub(crate) fn check_percent(field: &'static str, value: i64) -> Result<u8, InputError> {
    if (0..=100).contains(&value) {
        Ok(value as u8)
    } else {
        Err(InputError::PercentOutOfRange { field, value })
    }
}

pub(crate) fn check_complexity(value: i64) -> Result<u8, InputError> {
    if (1..=5).contains(&value) {
        Ok(value as u8)
    } else {
        Err(InputError::ComplexityOutOfRange(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_mirror_form_defaults_and_lack_data() {
        let inputs = SimulationInputs::default();
        assert_eq!(inputs.complexity_level, 3);
        assert_eq!(inputs.success_probability_percent, 80);
        assert!(!inputs.has_sufficient_data());
    }

    #[test]
    fn has_sufficient_data_requires_fee_and_hours() {
        let mut inputs = SimulationInputs {
            gross_fee: 1000.0,
            estimated_hours: 0.0,
            ..SimulationInputs::default()
        };
        assert!(!inputs.has_sufficient_data());

        inputs.estimated_hours = 2.5;
        assert!(inputs.has_sufficient_data());

        inputs.gross_fee = 0.0;
        assert!(!inputs.has_sufficient_data());
    }

    #[test]
    fn validate_rejects_negative_amounts() {
        let inputs = SimulationInputs {
            fixed_cost: -1.0,
            ..SimulationInputs::default()
        };
        assert_eq!(
            inputs.validate(),
            Err(InputError::NegativeAmount {
                field: "fixed_cost",
                value: -1.0
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_percent_and_level() {
        let inputs = SimulationInputs {
            discount_percent: 101,
            ..SimulationInputs::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(InputError::PercentOutOfRange { field: "discount_percent", value: 101 })
        ));

        let inputs = SimulationInputs {
            complexity_level: 0,
            ..SimulationInputs::default()
        };
        assert_eq!(inputs.validate(), Err(InputError::ComplexityOutOfRange(0)));
    }

    #[test]
    fn validate_accepts_domain_edges() {
        let inputs = SimulationInputs {
            discount_percent: 100,
            success_probability_percent: 0,
            complexity_level: 5,
            ..SimulationInputs::default()
        };
        assert_eq!(inputs.validate(), Ok(()));
    }
}
