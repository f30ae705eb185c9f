use clap::Parser;
use stonecut::cli::{run, Cli};
use stonecut::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    run(Cli::parse())
}
