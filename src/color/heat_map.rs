//! Four-stop heat map gradient
//!
//! Blue -> green -> yellow -> red, evenly spaced over `[0, 1]`.

const ANCHORS: [[f32; 3]; 4] = [
    [0.0, 0.0, 1.0], // Blue
    [0.0, 1.0, 0.0], // Green
    [1.0, 1.0, 0.0], // Yellow
    [1.0, 0.0, 0.0], // Red
];

const LAST: usize = ANCHORS.len() - 1;

/// Get the `[red, green, blue]` intensities (0.0-1.0) for `value`
///
/// Values outside `[0, 1]` are clamped; NaN is treated as 0.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn heat_map(value: f32) -> [f32; 3] {
    if value.is_nan() || value <= 0.0 {
        return ANCHORS[0];
    }
    if value >= 1.0 {
        return ANCHORS[LAST];
    }

    let scaled = value * LAST as f32;
    let lower = (libm::floorf(scaled) as usize).min(LAST - 1);
    let fract = scaled - lower as f32;

    let from = ANCHORS[lower];
    let to = ANCHORS[lower + 1];
    [
        (to[0] - from[0]) * fract + from[0],
        (to[1] - from[1]) * fract + from[1],
        (to[2] - from[2]) * fract + from[2],
    ]
}
