//! Parsing helpers for comma-separated numeric arguments.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use planar::AngleUnit;

/// Angle unit as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Deg,
    Rad,
}

impl From<UnitArg> for AngleUnit {
    fn from(u: UnitArg) -> Self {
        match u {
            UnitArg::Deg => AngleUnit::Degrees,
            UnitArg::Rad => AngleUnit::Radians,
        }
    }
}

/// Parse exactly `N` comma-separated floats, e.g. `"1,2.5,-3"`.
pub fn floats<const N: usize>(raw: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("expected {N} comma-separated numbers, got {} in {raw:?}", parts.len());
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .with_context(|| format!("not a number: {part:?}"))?;
    }
    Ok(out)
}
