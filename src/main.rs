//! This program reconstructs the trajectory of a rock that passes through
//! every hailstone in a storm, then reports the sum of the rock's starting
//! coordinates.
//!
//! Run:
//! ```bash
//! $ hailstorm -h
//! ```
//! to see the accepted arguments.

use clap::Parser;

use hailstorm::data::Data;
use hailstorm::params::Params;
use hailstorm::solver::Solver;

fn main() {
    // Parse arguments
    let params = Params::parse();

    // Read the hailstones
    let data = match Data::from_file(&params.file_name) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    // Solve!
    let answer = match Solver::new(data).solve().and_then(|s| s.position_sum()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    // Print the answer
    println!("{answer}");
}
