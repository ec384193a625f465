//! Space Vector Demonstration Tool
//!
//! This binary builds a vector from its command line arguments and prints the
//! result of every vector operation on it: formatting, products, division,
//! normalization and rotation. It can optionally record a circular orbit of
//! the vector about the z axis and write it as an R table.
//!
//! Usage:
//!   cargo run --bin space_demo -- [--divisor 2] [--step-deg 10] [--record orbit.dat] X [Y] [Z]

use std::path::{Path, PathBuf};

use cartesian_space::{cross, dot, normalized, Rotator, Space, SpaceRecorder};
use clap::Parser;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Space Vector Demonstration Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Exercises the three-space vector operations on a vector given on the command line",
    long_about = None
)]
struct Args {
    /// X component
    x: String,

    /// Y component
    #[arg(default_value = "0")]
    y: String,

    /// Z component
    #[arg(default_value = "0")]
    z: String,

    /// Scalar to divide the vector by
    #[arg(short, long, default_value_t = 2.0)]
    divisor: f64,

    /// Orbit step about the z axis, in degrees
    #[arg(short, long, default_value_t = 10.0)]
    step_deg: f64,

    /// Record one orbit about the z axis and write it to this file
    #[arg(short, long)]
    record: Option<PathBuf>,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:>12}: {}", name, value);
}

fn display_basics(v: &Space) {
    print_section_header("Vector");
    print_named_value("display", v);
    print_named_value("debug", format!("{:?}", v));
    print_named_value("magnitude", v.magnitude());
    print_named_value("magnitude2", v.magnitude2());
}

fn display_products(v: &Space) {
    print_section_header("Products with unit vectors");
    for (name, unit) in [("Ux", Space::UX), ("Uy", Space::UY), ("Uz", Space::UZ)] {
        print_named_value(&format!("v . {}", name), dot(v, &unit));
        print_named_value(&format!("v x {}", name), format!("{:?}", cross(v, &unit)));
    }
}

fn display_division(v: &Space, divisor: f64) {
    print_section_header("Division");
    match *v / divisor {
        Ok(q) => print_named_value(&format!("v / {}", divisor), format!("{:?}", q)),
        Err(e) => print_named_value(&format!("v / {}", divisor), e),
    }
    match normalized(v) {
        Ok(unit) => print_named_value("normalized", format!("{:?}", unit)),
        Err(e) => print_named_value("normalized", e),
    }
}

/// Largest number of points a recorded orbit may hold
const MAX_ORBIT_STEPS: usize = 1_000_000;

/// Number of steps of `step_deg` degrees needed to cover one full orbit
fn orbit_steps(step_deg: f64) -> Result<usize> {
    if !step_deg.is_finite() || step_deg == 0.0 {
        return Err(format!("step-deg must be finite and non-zero, got {}", step_deg).into());
    }

    let steps = (360.0 / step_deg.abs()).ceil();
    if steps > MAX_ORBIT_STEPS as f64 {
        return Err(format!(
            "step-deg {} needs {} points per orbit, more than the limit of {}",
            step_deg, steps, MAX_ORBIT_STEPS
        )
        .into());
    }
    Ok(steps as usize)
}

fn record_orbit(v: &Space, step_deg: f64, path: &Path) -> Result<()> {
    print_section_header("Orbit about Uz");

    let steps = orbit_steps(step_deg)?;
    let mut rotator = Rotator::new(Space::UZ);
    let mut recorder = SpaceRecorder::new(steps);
    let mut heading = *v;

    for _ in 0..steps {
        recorder.push(heading);
        heading = rotator.rotate(&heading, Rotator::deg2rad(step_deg))?;
    }

    recorder.write_r_file(path, true)?;
    print_named_value("points", recorder.len());
    print_named_value("written to", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let v = Space::from_strs(&args.x, &args.y, &args.z)?;

    display_basics(&v);
    display_products(&v);
    display_division(&v, args.divisor);

    if let Some(path) = &args.record {
        record_orbit(&v, args.step_deg, path)?;
    }

    Ok(())
}
