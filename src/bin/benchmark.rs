//! Performance benchmark for grid generation

use std::time::Instant;

use elementary_ca::domain::{Grid, GridConfig, InitialState, Rule};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

fn config(rule: u8, width: usize, generations: usize) -> GridConfig {
    GridConfig {
        rule: Rule::new(rule),
        width,
        generations,
        initial_state: InitialState::Random,
    }
}

fn benchmark_generate(width: usize, generations: usize, iterations: u32) -> f64 {
    let config = config(30, width, generations);
    let mut rng = StdRng::seed_from_u64(30);

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(Grid::generate(&config, &mut rng));
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Generate one grid per rule number and return total live cells
fn all_rules(width: usize, generations: usize, parallel: bool) -> (f64, usize) {
    let generate = |rule: u8| {
        let mut rng = StdRng::seed_from_u64(u64::from(rule));
        Grid::generate(&config(rule, width, generations), &mut rng).count_alive()
    };

    let start = Instant::now();
    let alive = if parallel {
        (0..=u8::MAX).into_par_iter().map(generate).sum()
    } else {
        (0..=u8::MAX).map(generate).sum()
    };
    (start.elapsed().as_secs_f64() * 1000.0, alive)
}

fn main() {
    env_logger::init();

    println!("=== Elementary CA Generation Benchmark ===\n");

    let sizes = [(201, 150), (401, 300), (1001, 1000), (4001, 4000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>16}", "Size", "ms/grid", "M cells/sec");
    println!("{:-<42}", "");

    for (width, generations) in sizes {
        let ms = benchmark_generate(width, generations, iterations);
        let cells = (width * generations) as f64;
        println!(
            "{:>12} {:>12.3} {:>16.1}",
            format!("{width}x{generations}"),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }

    println!("\n=== All 256 rules at 401x300 ===\n");

    let (serial_ms, serial_alive) = all_rules(401, 300, false);
    let (parallel_ms, parallel_alive) = all_rules(401, 300, true);
    info!("live cells: serial {serial_alive}, parallel {parallel_alive}");

    println!("Serial:   {serial_ms:>10.2} ms");
    println!("Parallel: {parallel_ms:>10.2} ms");
    println!("Speedup:  {:>10.1}x", serial_ms / parallel_ms);
}
