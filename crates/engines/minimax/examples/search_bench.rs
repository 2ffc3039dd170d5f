//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Runs each search strategy on a handful of tic-tac-toe and small
//! k-in-a-row positions and reports node counts and throughput, which makes
//! the effect of alpha-beta pruning directly visible.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p minimax_engine

use game_core::{detailed_evaluation, GameState, Gomoku, Move};
use minimax_engine::{alpha_beta, cutting_off_alpha_beta, minimax};
use std::time::Instant;

/// (name, width, height, n_in_row, opening moves)
const TEST_POSITIONS: &[(&str, usize, usize, usize, &[(u8, u8)])] = &[
    ("Empty 3x3", 3, 3, 3, &[]),
    ("Center 3x3", 3, 3, 3, &[(1, 1)]),
    ("Corner reply", 3, 3, 3, &[(1, 1), (0, 0)]),
    ("Midgame 4x4", 4, 4, 3, &[(1, 1), (2, 2), (1, 2), (1, 3), (0, 0), (3, 3)]),
];

fn main() {
    println!("=== Search Benchmark ===");
    println!();

    let mut total_time = std::time::Duration::ZERO;

    for &(name, width, height, n_in_row, opening) in TEST_POSITIONS {
        let moves: Vec<Move> = opening.iter().map(|&(r, c)| Move::new(r, c)).collect();
        let Ok(pos) = Gomoku::new(width, height, n_in_row).and_then(|g| g.with_moves(&moves)) else {
            eprintln!("{name}: invalid benchmark position");
            continue;
        };
        let player = pos.current_player();
        println!("{name}");

        // Exhaustive minimax is hopeless on the 4x4 board
        if width * height <= 9 {
            let mut nodes = 0u64;
            let start = Instant::now();
            let (value, _) = minimax(&pos, player, &mut nodes);
            let elapsed = start.elapsed();
            total_time += elapsed;
            report("minimax", value, nodes, elapsed);
        }

        let mut nodes = 0u64;
        let start = Instant::now();
        let (value, _) = alpha_beta(&pos, player, f64::NEG_INFINITY, f64::INFINITY, &mut nodes);
        let elapsed = start.elapsed();
        total_time += elapsed;
        report("alpha-beta", value, nodes, elapsed);

        for depth in 1..=2 {
            let mut nodes = 0u64;
            let start = Instant::now();
            let (value, _) = cutting_off_alpha_beta(
                &pos,
                player,
                depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                detailed_evaluation::<Gomoku>,
                &mut nodes,
            );
            let elapsed = start.elapsed();
            total_time += elapsed;
            report(&format!("cutoff d={depth}"), value, nodes, elapsed);
        }
        println!();
    }

    println!("{:=<70}", "");
    println!("TOTAL search time: {total_time:.3?}");
}

fn report(label: &str, value: f64, nodes: u64, elapsed: std::time::Duration) {
    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    println!("  {label:.<20} value {value:>6.2}, {nodes:>10} nodes, {nps:>12.0} nodes/sec ({elapsed:>8.3?})");
}
