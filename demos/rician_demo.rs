//! CLI consumer for the Rician fading model
//!
//! Reads the three raw parameters from argv, builds the model, and prints
//! peak locations, elapsed time, and an ASCII sketch of the theoretical
//! curves with the simulated density sampled alongside.
//!
//! Usage: rician_demo <K> <r̂²> <φ>
//! Example: rician_demo 10 1 0

use std::process::ExitCode;
use std::time::Instant;

use rician_stats::{build_model, ModelResult};

const PLOT_COLUMNS: usize = 72;
const PLOT_ROWS: usize = 12;

fn ascii_plot(label: &str, grid: &[f64], values: &[f64]) {
    let max = values.iter().cloned().fold(0.0f64, f64::max);
    if max <= 0.0 {
        return;
    }

    // Downsample the curve to one value per column
    let stride = grid.len() / PLOT_COLUMNS;
    let columns: Vec<f64> = (0..PLOT_COLUMNS)
        .map(|c| values[(c * stride).min(values.len() - 1)] / max)
        .collect();

    println!("\n{}", label);
    for row in 0..PLOT_ROWS {
        let threshold = 1.0 - row as f64 / PLOT_ROWS as f64;
        let line: String = columns
            .iter()
            .map(|&v| if v >= threshold { '█' } else { ' ' })
            .collect();
        println!("  |{}", line);
    }
    println!(
        "  +{}\n   {:<36.2}{:>36.2}",
        "-".repeat(PLOT_COLUMNS),
        grid[0],
        grid[grid.len() - 1]
    );
}

fn peak(grid: &[f64], values: &[f64]) -> f64 {
    let idx = values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap_or(0);
    grid[idx]
}

fn report(result: &ModelResult, elapsed_s: f64) {
    println!(
        "Envelope peak: theoretical r = {:.3}, simulated r = {:.3}",
        peak(
            &result.envelope_theoretical.grid,
            &result.envelope_theoretical.values
        ),
        peak(&result.envelope_simulated.x, &result.envelope_simulated.density),
    );
    println!(
        "Phase peak:    theoretical θ = {:.3}, simulated θ = {:.3}",
        peak(
            &result.phase_theoretical.grid,
            &result.phase_theoretical.values
        ),
        peak(&result.phase_simulated.x, &result.phase_simulated.density),
    );
    println!("Time (s): {:.3}", elapsed_s);

    ascii_plot(
        "Envelope PDF f_R(r)",
        &result.envelope_theoretical.grid,
        &result.envelope_theoretical.values,
    );
    ascii_plot(
        "Phase PDF f_Θ(θ)",
        &result.phase_theoretical.grid,
        &result.phase_theoretical.values,
    );
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <K> <r̂²> <φ>", args[0]);
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    match build_model(&args[1], &args[2], &args[3]) {
        Ok(result) => {
            report(&result, start.elapsed().as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Shown verbatim, exactly as a GUI error box would display it
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
