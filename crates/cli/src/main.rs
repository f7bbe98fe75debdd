use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use planar::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;

use args::{floats, UnitArg};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Evaluate planar geometry primitives and print JSON")]
struct Cmd {
    /// Log library diagnostics at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersection point of two lines, each given as x1,y1,x2,y2
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Signed distance and position of a point relative to a circle
    Locate {
        /// cx,cy,r
        #[arg(long, allow_hyphen_values = true)]
        circle: String,
        /// x,y
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Numeric set {start, start+step, ...} with its aggregates
    Range {
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,
        /// Refuse ranges that would hold more elements than this
        #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
        max_items: usize,
    },
    /// Convert an angle between degrees and radians
    Angle {
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        #[arg(long, value_enum)]
        from: UnitArg,
        #[arg(long, value_enum)]
        to: UnitArg,
    },
    /// Rotate a vector x,y counterclockwise
    Rotate {
        #[arg(long, allow_hyphen_values = true)]
        vector: String,
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        #[arg(long, value_enum, default_value_t = UnitArg::Deg)]
        unit: UnitArg,
    },
    /// Print library version and build revision
    Report,
}

const DEFAULT_MAX_ITEMS: usize = 100_000;

#[derive(Serialize)]
struct RangeReport {
    items: Vec<f64>,
    min: f64,
    max: f64,
    range: f64,
    sum: f64,
    average: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let out = match cmd.action {
        Action::Intersect { a, b } => intersect(&a, &b)?,
        Action::Locate { circle, point } => locate(&circle, &point)?,
        Action::Range {
            start,
            end,
            step,
            max_items,
        } => range(start, end, step, max_items)?,
        Action::Angle { value, from, to } => angle(value, from, to),
        Action::Rotate { vector, angle, unit } => rotate(&vector, angle, unit)?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn xy(p: Point) -> [f64; 2] {
    [p.x(), p.y()]
}

fn line_arg(raw: &str) -> Result<Line> {
    let [x1, y1, x2, y2] = floats::<4>(raw)?;
    Ok(Line::from_coords(x1, y1, x2, y2)?)
}

fn intersect(a: &str, b: &str) -> Result<Value> {
    tracing::info!(a, b, "intersect");
    let (la, lb) = (line_arg(a)?, line_arg(b)?);
    let hit = la.intersection(&lb).map(xy);
    Ok(json!({
        "a": la.to_string(),
        "b": lb.to_string(),
        "parallel": la.is_parallel_to(&lb),
        "intersection": hit,
    }))
}

fn locate(circle: &str, point: &str) -> Result<Value> {
    tracing::info!(circle, point, "locate");
    let [cx, cy, r] = floats::<3>(circle)?;
    let [x, y] = floats::<2>(point)?;
    let c = Circle::new(Point::new(cx, cy), r)?;
    let p = Point::new(x, y);
    let position = match c.locate(p) {
        Position::Outside => "outside",
        Position::On => "on",
        Position::Inside => "inside",
    };
    Ok(json!({
        "circle": c.to_string(),
        "distance": c.distance(p),
        "position": position,
    }))
}

fn range(start: f64, end: f64, step: f64, max_items: usize) -> Result<Value> {
    tracing::info!(start, end, step, max_items, "range");
    // Invalid bounds and steps are left to the library's own checks.
    if step > 0.0 && end >= start {
        let expected = ((end - start) / step).floor() + 1.0;
        if expected > max_items as f64 {
            bail!("range would hold about {expected} elements, above --max-items {max_items}");
        }
    }
    let s = Set::from_range_by(start, end, step)?;
    let report = RangeReport {
        items: s.iter().copied().collect(),
        min: s.min()?,
        max: s.max()?,
        range: s.range()?,
        sum: s.sum(),
        average: s.average(),
    };
    Ok(serde_json::to_value(report)?)
}

fn angle(value: f64, from: UnitArg, to: UnitArg) -> Value {
    tracing::info!(value, from = ?from, to = ?to, "angle");
    let (from, to) = (AngleUnit::from(from), AngleUnit::from(to));
    json!({
        "input": value,
        "from": from.to_string(),
        "to": to.to_string(),
        "value": convert_angle(from, value, to),
    })
}

fn rotate(vector: &str, angle: f64, unit: UnitArg) -> Result<Value> {
    tracing::info!(vector, angle, unit = ?unit, "rotate");
    let [x, y] = floats::<2>(vector)?;
    let r = Vector::new(x, y).rotated_by(angle, unit.into());
    Ok(json!({ "rotated": [r.x(), r.y()], "magnitude": r.magnitude() }))
}

fn report() -> Value {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    json!({ "version": planar::VERSION, "code_rev": rev })
}
