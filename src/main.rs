//! CLI entry point for masonry collage composition

use clap::Parser;
use masonrycollage::io::cli::{Cli, CollageProcessor, init_logging};

fn main() -> masonrycollage::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let mut processor = CollageProcessor::new(cli);
    processor.process()?;
    Ok(())
}
