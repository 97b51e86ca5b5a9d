//! CLI entry point for FlexTiles session analysis

use std::process::ExitCode;

use clap::Parser;
use flextiles::io::cli::{Cli, FileProcessor};
use flextiles::io::logging;

fn main() -> flextiles::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut processor = FileProcessor::new(cli);
    let outcome = processor.process()?;

    Ok(if outcome.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
