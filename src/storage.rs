use crate::model::LatencyStats;
use anyhow::{Context, Result};
use std::path::Path;

/// Render stats as pretty JSON (two-space indent), the same text printed to stdout.
pub fn to_pretty_json(stats: &LatencyStats) -> Result<String> {
    serde_json::to_string_pretty(stats).context("failed to serialize latency stats")
}

/// Export stats as JSON to `path`, creating parent directories as needed.
pub fn export_json(path: &Path, stats: &LatencyStats) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut out = to_pretty_json(stats)?;
    out.push('\n');
    std::fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported latency stats");
    Ok(())
}
