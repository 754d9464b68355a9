//! Minimize `sin x + sin 2x + sin 4x + sin 8x + y` on `[-2, 2]^2`.
//!
//! Run with: cargo run --example sine_sum
//!
//! Dump the per-iteration rectangles as TSV:
//! cargo run --example sine_sum -- trace.tsv
//!
//! Iteration logs: RUST_LOG=divided_rectangles=debug cargo run --example sine_sum

use std::fs::File;
use std::io::BufWriter;

use divided_rectangles::{Direct, DirectOptions, TraceScope, TsvWriter};
use tracing_subscriber::EnvFilter;

fn sine_sum(x: &[f64]) -> f64 {
    x[0].sin() + (2.0 * x[0]).sin() + (4.0 * x[0]).sin() + (8.0 * x[0]).sin() + x[1]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let lower = [-2.0, -2.0];
    let upper = [2.0, 2.0];
    let options = DirectOptions {
        max_iterations: 100,
        ..Default::default()
    };

    let result = match std::env::args().nth(1) {
        Some(path) => {
            let writer = TsvWriter::new(BufWriter::new(File::create(&path)?), TraceScope::All);
            let mut direct = Direct::new(sine_sum, &lower, &upper, options)?.with_observer(writer);
            let result = direct.minimize()?;
            let rows = direct.observer().rows_written();
            direct.into_observer().finish()?;
            tracing::info!(path = %path, rows, "trace written");
            result
        }
        None => Direct::new(sine_sum, &lower, &upper, options)?.minimize()?,
    };

    println!("{}", result);
    Ok(())
}
