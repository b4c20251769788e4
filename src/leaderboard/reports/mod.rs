pub mod boards;
pub mod scores;
pub mod standings;

/// Half-up at the tenths digit: a .x5 halfway case always moves toward
/// positive infinity, unlike `f64::round` which moves away from zero.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
