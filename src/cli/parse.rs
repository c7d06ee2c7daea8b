//! Value parsers for clap arguments

use deptrace_core::error::DeptraceError;
use deptrace_core::format::OutputFormat;

/// Parse an output format name for clap
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: DeptraceError| e.to_string())
}
