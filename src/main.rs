// main.rs
//
// Writes the eight kites of the hat monotile as STL, each as a tile body plus
// an inset groove solid. Given -r, it produces the reflected (reversed) tile.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use monotile::{Monotile, TileConfig, float_types::Real, io::stl};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One named `solid` block per kite solid
    Ascii,
    /// A single binary body holding every facet
    Binary,
}

/// STL description of the "einstein hat" aperiodic monotile
#[derive(Parser, Debug)]
#[command(name = "monotile")]
#[command(about = "STL solids for the einstein hat monotile", long_about = None)]
#[command(version)]
struct Cli {
    /// Produce the reflected tile
    #[arg(short, long)]
    reflect: bool,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Millimetres per kite unit
    #[arg(long, default_value_t = TileConfig::default().unit)]
    unit: Real,

    /// Groove inset as a fraction of a unit
    #[arg(long, default_value_t = TileConfig::default().inset)]
    inset: Real,

    /// Tile thickness in kite units
    #[arg(long, default_value_t = TileConfig::default().base_height)]
    height: Real,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = TileConfig::default()
        .with_unit(cli.unit)
        .with_inset(cli.inset)
        .with_base_height(cli.height);

    let tile = Monotile::new(config).reflected(cli.reflect);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    match cli.format {
        Format::Ascii => {
            let written =
                stl::write_ascii(&mut out, tile.solids()).context("writing ascii stl")?;
            info!(solids = written, reflect = cli.reflect, "wrote ascii stl");
        },
        Format::Binary => write_binary(&mut out, &tile)?,
    }
    Ok(())
}

#[cfg(feature = "stl-io")]
fn write_binary(out: &mut impl Write, tile: &Monotile) -> Result<()> {
    #[cfg(feature = "parallel")]
    let solids = tile.solids_par()?;
    #[cfg(not(feature = "parallel"))]
    let solids = tile.build()?;

    stl::write_binary(out, &solids)?;
    info!(solids = solids.len(), "wrote binary stl");
    Ok(())
}

#[cfg(not(feature = "stl-io"))]
fn write_binary(_out: &mut impl Write, _tile: &Monotile) -> Result<()> {
    anyhow::bail!("binary output needs the `stl-io` feature")
}
