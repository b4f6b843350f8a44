use anyhow::{Context, Result};
use clap::Parser;
use grid3::Array3D;
use tracing::info;
use tracing_subscriber::EnvFilter;

type Grid = Array3D<i64, 2, 3, 4>;

/// Builds a 2x3x4 grid and prints it in flattened order
#[derive(Parser, Debug)]
#[command(name = "grid3")]
struct Args {
    /// Fill every cell with this value instead of its flat offset
    #[arg(short, long)]
    fill: Option<i64>,

    /// Coordinate to look up with range checking, as `i,j,k`
    #[arg(short, long, value_parser = parse_coords)]
    probe: Option<(usize, usize, usize)>,

    /// Print from the last element back to the first
    #[arg(long)]
    reverse: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut grid = Grid::from_fn(|pos| Grid::offset(pos) as i64);
    if let Some(value) = args.fill {
        grid.fill(value);
    }
    info!(
        shape = ?(grid.size_1d(), grid.size_2d(), grid.size_3d()),
        len = grid.len(),
        "built grid"
    );

    let cells: Vec<String> = if args.reverse {
        grid.iter_rev().map(ToString::to_string).collect()
    } else {
        grid.iter().map(ToString::to_string).collect()
    };
    println!("[{}]", cells.join(", "));

    if let Some(pos) = args.probe {
        let value = grid
            .at(pos)
            .with_context(|| format!("probing {pos:?}"))?;
        println!("{pos:?} = {value}");
    }

    Ok(())
}

fn parse_coords(s: &str) -> Result<(usize, usize, usize), String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<usize>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [i, j, k] => Ok((i, j, k)),
        _ => Err(format!("expected three coordinates, got {}", parts.len())),
    }
}
