use std::time::Instant;

use anyhow::{Context, Result};
use pinray_core::{ArrayBoard, Position, STARTING_PLACEMENT, divide};
use tracing::info;

const DEFAULT_DEPTH: usize = 4;

/// Usage: `pinray [depth] [placement]`. Runs perft from the given placement
/// (White to move) and prints the per-move split.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("pinray starting");

    let mut args = std::env::args().skip(1);
    let depth = match args.next() {
        Some(text) => text
            .parse::<usize>()
            .with_context(|| format!("invalid perft depth: {text:?}"))?,
        None => DEFAULT_DEPTH,
    };
    let placement = args.next().unwrap_or_else(|| STARTING_PLACEMENT.to_string());

    let board: ArrayBoard = placement
        .parse()
        .with_context(|| format!("invalid placement: {placement:?}"))?;
    let position = Position::new(&board).context("cannot build position")?;
    println!("{position}\n");

    let start = Instant::now();
    let split = divide(&position, depth);
    let nodes: u64 = split.iter().map(|(_, count)| count).sum();
    for (mv, count) in &split {
        println!("{mv}: {count}");
    }
    let elapsed = start.elapsed();
    println!("\nNodes searched: {nodes}");
    info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, "perft finished");
    Ok(())
}
