//! Command dispatch logic for deptrace

mod analyze;
mod generate;

use std::path::Path;

use deptrace_core::error::Result;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        // Bare invocation analyzes the conventional input file.
        None => analyze::execute(cli, Path::new(analyze::DEFAULT_INPUT)),
        Some(Commands::Analyze { input }) => analyze::execute(cli, input),
        Some(Commands::Generate { output, seed }) => generate::execute(cli, output, *seed),
    }
}
