//! Linear range mapping.

/// Map `value` from the range `[x_min, x_max]` onto `[y_min, y_max]`.
///
/// Pure and unclamped: a value outside the input range extrapolates beyond
/// the output range. Callers that need saturation must clamp the result
/// themselves (see `color::unit_to_byte`).
///
/// The input span must be non-zero; `x_min == x_max` divides by zero.
pub fn linear_map(value: f32, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> f32 {
    y_min + (value - x_min) / (x_max - x_min) * (y_max - y_min)
}
