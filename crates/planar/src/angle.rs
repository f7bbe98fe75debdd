//! Angle units and conversion.

use std::fmt;

/// Unit an angle value is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degrees,
    #[default]
    Radians,
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

/// Convert `angle` from `input` to `output`.
///
/// Same-unit conversions return `angle` untouched. Otherwise the value goes
/// through degrees. `AngleUnit` is a closed two-value enum, so there is no
/// invalid-unit failure path.
pub fn convert_angle(input: AngleUnit, angle: f64, output: AngleUnit) -> f64 {
    if input == output {
        return angle;
    }
    let degrees = match input {
        AngleUnit::Degrees => angle,
        AngleUnit::Radians => angle * 180.0 / std::f64::consts::PI,
    };
    match output {
        AngleUnit::Degrees => degrees,
        AngleUnit::Radians => degrees * std::f64::consts::PI / 180.0,
    }
}

/// Shorthand for `convert_angle(unit, angle, AngleUnit::Radians)`.
#[inline]
pub(crate) fn to_radians(angle: f64, unit: AngleUnit) -> f64 {
    convert_angle(unit, angle, AngleUnit::Radians)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn degrees_to_radians_and_back() {
        assert!((convert_angle(AngleUnit::Degrees, 180.0, AngleUnit::Radians) - PI).abs() < 1e-12);
        assert!((convert_angle(AngleUnit::Radians, FRAC_PI_2, AngleUnit::Degrees) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn same_unit_is_identity() {
        let a = 0.1 + 0.2;
        assert_eq!(convert_angle(AngleUnit::Radians, a, AngleUnit::Radians), a);
        assert_eq!(convert_angle(AngleUnit::Degrees, a, AngleUnit::Degrees), a);
    }

    #[test]
    fn default_unit_is_radians() {
        assert_eq!(AngleUnit::default(), AngleUnit::Radians);
        assert!((to_radians(90.0, AngleUnit::Degrees) - FRAC_PI_2).abs() < 1e-12);
    }
}
