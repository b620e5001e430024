// number.rs
use serde_json::Number;

/// Largest integer an f64 holds exactly (2^53 - 1).
pub const MAX_SAFE_INT: i64 = (1i64 << 53) - 1;

/// Rewrites integral floats the way ECMAScript prints them: `1e2` and `100.0`
/// become `100`, `-0` becomes `0`. Only floats inside the safe-integer range
/// are rewritten; fractional values and integers pass through unchanged.
pub fn integral_number(n: Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INT as f64 => {
            Number::from(f as i64)
        }
        _ => n,
    }
}
