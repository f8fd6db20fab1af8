//! Locale formatting for displayed figures.
//!
//! Amounts use `.` to group thousands and `,` as the decimal mark
//! (`R$ 1.000,50`). Formatting never feeds back into calculations.

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn format(&self, value: f64) -> String {
        if self.symbol.is_empty() {
            format_amount(value)
        } else {
            format!("{} {}", self.symbol, format_amount(value))
        }
    }
}

/// Two-decimal amount with grouped thousands, e.g. `-1.234.567,89`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.2}", value.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{},{cents}", group_thousands(whole))
}

/// Percentage with `,` as the decimal mark, e.g. `61,5%`.
pub fn format_percent(value: f64, places: usize) -> String {
    format!("{}%", format_decimal(value, places))
}

pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{value:.places$}").replace('.', ",")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
