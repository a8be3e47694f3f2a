use clap::Parser;
use std::path::PathBuf;

mod graph;
mod log;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "netmap-analyser")]
#[command(about = "Derive a delivery-rate edge list from per-host harness logs", long_about = None)]
struct Cli {
    /// Root directory holding the <host>/<file>.log tree.
    #[arg(long, default_value = ".pyterm")]
    root: PathBuf,

    /// Emit a JSON object instead of the plain two-line listing.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Parse logs into the record store.
    let store = log::load_records(&cli.root, log::host_from_parent_dir)?;

    // 2) Cross-reference node identifiers into edges.
    let (edges, labels) = graph::build_edges(&store);

    // 3) Print.
    if cli.json {
        println!("{}", render::render_json(&edges, &labels)?);
    } else {
        println!("{}", render::render_plain(&edges, &labels));
    }

    Ok(())
}
