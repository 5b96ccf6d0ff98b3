//! Germinator CLI Binary

use clap::Parser;
use germinator::logging::init_logging;
use germinator::tooling::cli::{Cli, CliContext};
use std::path::Path;
use std::process;

/// Returns whether the command succeeded.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let context = CliContext::new(Path::new("."), cli.config.as_deref())?;
    init_logging(&cli.logging_config(&context.config().logging))?;

    let output = context.execute(&cli.command)?;
    println!("{}", output.text);
    Ok(output.success)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
