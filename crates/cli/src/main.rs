use anyhow::Result;
use clap::{Parser, Subcommand};
use hypercell::{Attribute, Dimension};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod describe;
mod export;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect and export hypercube cell topology tables")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print counts and face tables of one dimension
    Show {
        #[arg(long)]
        dim: Dimension,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a single count, e.g. `count lines_per_cell --dim 3`
    Count {
        attribute: Attribute,
        #[arg(long)]
        dim: Dimension,
    },
    /// Face opposite `face`
    Opposite {
        #[arg(long)]
        dim: Dimension,
        #[arg(long)]
        face: usize,
    },
    /// Child cell adjacent to `subface` of `face`
    Child {
        #[arg(long)]
        dim: Dimension,
        #[arg(long)]
        face: usize,
        #[arg(long)]
        subface: usize,
    },
    /// Write all lookup tables (CSV or Parquet, by extension) plus provenance
    Export {
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Show { dim, json } => show(dim, json),
        Action::Count { attribute, dim } => count(attribute, dim),
        Action::Opposite { dim, face } => opposite(dim, face),
        Action::Child { dim, face, subface } => child(dim, face, subface),
        Action::Export { out } => export::run(&out),
        Action::Report => report(),
    }
}

fn show(dim: Dimension, json: bool) -> Result<()> {
    tracing::info!(dim = dim.get(), json, "show");
    let report = describe::DescriptorReport::new(dim);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn count(attribute: Attribute, dim: Dimension) -> Result<()> {
    let value = hypercell::count_of(attribute, dim);
    tracing::debug!(dim = dim.get(), attribute = attribute.name(), value, "count");
    println!("{value}");
    Ok(())
}

fn opposite(dim: Dimension, face: usize) -> Result<()> {
    let value = hypercell::opposite_face(dim, face)?;
    tracing::debug!(dim = dim.get(), face, value, "opposite");
    println!("{value}");
    Ok(())
}

fn child(dim: Dimension, face: usize, subface: usize) -> Result<()> {
    let value = hypercell::child_cell_on_face(dim, face, subface)?;
    tracing::debug!(dim = dim.get(), face, subface, value, "child");
    println!("{value}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hypercell_version": hypercell::VERSION,
        "max_dim": hypercell::cfg::MAX_DIM,
        "checks_enabled": hypercell::cfg::CHECKS_ENABLED,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
