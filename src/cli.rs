use crate::metrics;
use crate::samples;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "latency-stats",
    version,
    about = "Summarise latency samples (seconds, one per line) as millisecond statistics"
)]
pub struct Cli {
    /// Text file with one latency value in seconds per line; blank lines are ignored
    pub latency_file: PathBuf,

    /// Print a text summary instead of JSON
    #[arg(long)]
    pub text: bool,

    /// Also write the JSON result to this file
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Log level for diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

pub fn run(args: Cli) -> Result<()> {
    let samples = samples::read_latency_file(&args.latency_file)
        .context("failed to load latency samples")?;
    let stats = metrics::compute_latency_stats(&samples)?;
    tracing::debug!(?stats, "computed latency stats");

    if let Some(p) = args.export_json.as_deref() {
        crate::storage::export_json(p, &stats)?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.text {
        let summary = crate::text_summary::build_text_summary(&stats);
        for line in summary.lines {
            writeln!(out, "{}", line)?;
        }
    } else {
        writeln!(out, "{}", crate::storage::to_pretty_json(&stats)?)?;
    }
    out.flush()?;
    Ok(())
}
