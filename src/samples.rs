//! Loading latency samples from text input.
//!
//! Input is one value in seconds per line. Blank lines are skipped; anything
//! else must parse as a finite `f64`.

use crate::error::AnalyzeError;
use std::path::Path;

/// Non-empty latency samples in seconds, sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    sorted: Vec<f64>,
}

impl SampleSet {
    /// Parse text lines into a sample set. Line numbers in errors are 1-based
    /// and count blank lines too, so they match what an editor shows.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, AnalyzeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Vec::new();
        let mut skipped = 0usize;
        for (idx, line) in lines.into_iter().enumerate() {
            let text = line.as_ref().trim();
            if text.is_empty() {
                skipped += 1;
                continue;
            }
            values.push(parse_seconds(idx + 1, text)?);
        }
        tracing::debug!(parsed = values.len(), skipped, "parsed latency samples");
        Self::from_seconds(values)
    }

    /// Build a sample set from already-parsed seconds.
    pub fn from_seconds(mut values: Vec<f64>) -> Result<Self, AnalyzeError> {
        if values.is_empty() {
            return Err(AnalyzeError::EmptyData);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnalyzeError::NonFinite {
                index,
                value: values[index],
            });
        }
        values.sort_by(f64::total_cmp);
        Ok(Self { sorted: values })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn as_sorted(&self) -> &[f64] {
        &self.sorted
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Arithmetic mean. Falls back to summing pre-divided values when the
    /// plain sum overflows, so the result is finite for any finite samples.
    pub fn mean(&self) -> f64 {
        let n = self.sorted.len() as f64;
        let sum = self.sorted.iter().sum::<f64>();
        if sum.is_finite() {
            sum / n
        } else {
            self.sorted.iter().map(|v| v / n).sum()
        }
    }
}

fn parse_seconds(line: usize, text: &str) -> Result<f64, AnalyzeError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AnalyzeError::Parse {
            line,
            value: text.to_string(),
        }),
    }
}

/// Split text on `\n`, `\r\n` and lone `\r` line endings.
pub fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Read a latency file into memory and parse it. The file is closed before
/// parsing starts.
pub fn read_latency_file(path: &Path) -> Result<SampleSet, AnalyzeError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        bytes = contents.len(),
        lines = split_lines(&contents).count(),
        "read latency file"
    );
    SampleSet::from_lines(split_lines(&contents))
}
