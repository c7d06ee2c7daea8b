//! Generate command: write a random dependency fixture

use std::path::Path;
use std::time::Instant;

use deptrace_core::error::Result;
use deptrace_core::generate::{generate_edges, rng_for_seed};
use deptrace_core::records;

use crate::cli::{Cli, OutputFormat};

/// Execute the generate command
pub fn execute(cli: &Cli, output: &Path, seed: Option<u64>) -> Result<()> {
    let start = Instant::now();

    let mut rng = rng_for_seed(seed);
    let edges = generate_edges(&mut rng);
    records::write_edges(output, &edges)?;

    tracing::debug!(elapsed = ?start.elapsed(), edges = edges.len(), "generate");

    match cli.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "output": output.display().to_string(),
                "edges": edges.len(),
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote {} edges to {}", edges.len(), output.display());
            }
        }
    }

    Ok(())
}
