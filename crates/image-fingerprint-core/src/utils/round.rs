/// Round `value` to 2, 4, 6 or 8 decimal places.
///
/// Odd precisions are bumped to the next even number, then the result is
/// clamped to 2..=8. Halves round up for positive values.
pub fn round_to(value: f32, precision: i64) -> f32 {
    let mut precision = precision;
    if precision % 2 > 0 {
        precision = precision.saturating_add(1);
    }
    let scale = match precision.clamp(2, 8) {
        2 => 1e2_f32,
        4 => 1e4,
        6 => 1e6,
        _ => 1e8,
    };
    ((value * scale + 0.5) as i64) as f32 / scale
}
