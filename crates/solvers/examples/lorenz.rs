//! Integrates the Lorenz system with forward Euler and prints the trajectory.
//!
//! # Usage
//!
//! ```text
//! cargo run --example lorenz
//! cargo run --example lorenz -- 0.005
//! ```
//!
//! Each output line is one state, formatted as `x;y;z`. The optional argument
//! is the step size (default `0.02`) over 25 time units.

use std::error::Error;

use odestep_core::{Derivative, grid};
use odestep_solvers::transient::euler;

/// Lorenz system with `params = [sigma, rho, beta]`.
struct Lorenz;

impl Derivative for Lorenz {
    fn calculate(&self, _time: f64, state: &[f64], params: &[f64]) -> Vec<f64> {
        let (x, y, z) = (state[0], state[1], state[2]);
        let (sigma, rho, beta) = (params[0], params[1], params[2]);

        vec![sigma * (y - x), x * (rho - z) - y, x * y - beta * z]
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let dt = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(0.02);

    let xyz0 = [1.0, 1.0, 1.0];
    let params = [10.0, 28.0, 8.0 / 3.0];
    let times = grid::linspace(0.0, 25.0, dt)?;

    let trajectory = euler::solve(&Lorenz, &xyz0, &times, &params)?;

    for state in trajectory.iter() {
        println!("{};{};{}", state[0], state[1], state[2]);
    }

    Ok(())
}
