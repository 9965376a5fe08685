//! Hint solver benchmark: serial vs rayon light chasing

use std::time::Instant;

use lights_out::domain::{self, GameConfig, solve, solve_parallel};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_solver(
    size: usize,
    boards: u32,
    solver: fn(&domain::Board) -> Option<domain::Solution>,
) -> (f64, u32) {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let config = GameConfig::default().with_dimensions(size, size);
    let mut solved = 0;
    let mut total_ms = 0.0;

    for _ in 0..boards {
        let board = match domain::initialize(&config, &mut rng) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("Could not build {}x{} board: {}", size, size, err);
                return (0.0, 0);
            }
        };

        let start = Instant::now();
        if solver(&board).is_some() {
            solved += 1;
        }
        total_ms += start.elapsed().as_secs_f64() * 1000.0;
    }

    (total_ms / boards as f64, solved)
}

fn main() {
    println!("=== Lights Out Hint Solver Benchmark ===\n");

    let sizes = [3, 5, 8, 10, 12, 14, 16, 18, 20];
    let boards = 10;

    println!("{:>10} {:>12} {:>12} {:>10} {:>10}",
        "Size", "Serial", "Parallel", "Speedup", "Solvable");
    println!("{:-<60}", "");

    for size in sizes {
        // Serial search gets slow past 2^16 masks
        let (serial_ms, _) = if size <= 16 {
            benchmark_solver(size, boards, solve)
        } else {
            (0.0, 0)
        };
        let (parallel_ms, solved) = benchmark_solver(size, boards, solve_parallel);

        let serial_str = if serial_ms > 0.0 {
            format!("{:>12.3}", serial_ms)
        } else {
            format!("{:>12}", "-")
        };
        let speedup_str = if serial_ms > 0.0 && parallel_ms > 0.0 {
            format!("{:>9.1}x", serial_ms / parallel_ms)
        } else {
            format!("{:>10}", "-")
        };

        println!(
            "{:>10} {} {:>12.3} {} {:>7}/{}",
            format!("{}x{}", size, size),
            serial_str,
            parallel_ms,
            speedup_str,
            solved,
            boards
        );
    }
}
