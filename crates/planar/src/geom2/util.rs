use nalgebra::Vector2;

/// Angle of `v` from the positive X axis, in `[0, 2π)`.
#[inline]
pub(crate) fn theta_of(v: Vector2<f64>) -> f64 {
    let angle = v.y.atan2(v.x);
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// Unit-length copy of `v`; the zero vector maps to itself.
#[inline]
pub(crate) fn normalized_or_self(v: Vector2<f64>) -> Vector2<f64> {
    v.try_normalize(0.0).unwrap_or(v)
}
