use crate::{DetectionOutput, HandResult, InferError, Landmark, RawDetection, PIXEL_SENTINEL};

fn is_normalized(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Map a normalized point onto the `width x height` pixel grid.
///
/// Returns `None` when either coordinate lies outside `[0, 1]` (or is NaN),
/// which the hand engine does for points it extrapolates past the frame.
/// `1.0` maps to the last row/column.
pub fn to_pixel(x: f32, y: f32, width: usize, height: usize) -> Option<(i32, i32)> {
    if width == 0 || height == 0 || !is_normalized(x) || !is_normalized(y) {
        return None;
    }
    let px = ((x as f64 * width as f64).floor() as usize).min(width - 1);
    let py = ((y as f64 * height as f64).floor() as usize).min(height - 1);
    Some((
        px.min(i32::MAX as usize) as i32,
        py.min(i32::MAX as usize) as i32,
    ))
}

/// Convert raw engine output into fixed-shape landmark records.
///
/// Hands and points keep the engine's order; nothing is sorted or dropped.
/// Points without a pixel position carry [`PIXEL_SENTINEL`] in both `px`
/// and `py`. A NaN or infinite coordinate has no float representation in
/// the egress records and is reported as an engine error.
pub fn normalize(
    raw: &RawDetection,
    width: usize,
    height: usize,
) -> Result<DetectionOutput, InferError> {
    let Some(hands) = raw.hands.as_ref() else {
        return Ok(Vec::new());
    };

    hands
        .iter()
        .enumerate()
        .map(|(hand_index, hand)| {
            let landmarks = hand
                .landmarks
                .iter()
                .enumerate()
                .map(|(point_index, lm)| {
                    if !(lm.x.is_finite() && lm.y.is_finite() && lm.z.is_finite()) {
                        return Err(InferError::Engine(format!(
                            "non-finite landmark at hand {hand_index} point {point_index}: ({}, {}, {})",
                            lm.x, lm.y, lm.z
                        )));
                    }
                    let (px, py) =
                        to_pixel(lm.x, lm.y, width, height).unwrap_or((PIXEL_SENTINEL, PIXEL_SENTINEL));
                    Ok(Landmark {
                        x: lm.x,
                        y: lm.y,
                        z: lm.z,
                        px,
                        py,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(HandResult { landmarks })
        })
        .collect()
}
