/// Cost multiplier for a case-complexity level.
///
/// Levels outside `1..=5` are treated as neutral (`1.00`).
pub fn complexity_factor(level: u8) -> f64 {
    match level {
        1 => 0.90,
        2 => 1.00,
        3 => 1.10,
        4 => 1.25,
        5 => 1.50,
        _ => 1.00,
    }
}
