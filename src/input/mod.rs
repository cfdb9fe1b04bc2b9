use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::subjects::{Subject, subject_order};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawScores {
    #[serde(rename = "math score")]
    pub math_score: f64,
    #[serde(rename = "reading score")]
    pub reading_score: f64,
    #[serde(rename = "writing score")]
    pub writing_score: f64,
}

impl RawScores {
    pub fn score(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Math => self.math_score,
            Subject::Reading => self.reading_score,
            Subject::Writing => self.writing_score,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input file not found: {} (put the CSV in the working directory)", .path.display())]
    Missing { path: PathBuf },
    #[error("{}: missing required column(s): {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
    #[error("malformed input at data row {row}: {message}")]
    Malformed { row: usize, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_students(path: &Path) -> Result<Vec<RawScores>, InputError> {
    if !path.is_file() {
        return Err(InputError::Missing {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let rows = parse_students(file, path)?;
    tracing::info!(
        path = %path.display(),
        students = rows.len(),
        "loaded student records"
    );
    Ok(rows)
}

/// Parses the whole table, failing on the first bad row. The header is
/// checked before any data row is read.
pub fn parse_students<R: Read>(reader: R, source: &Path) -> Result<Vec<RawScores>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(InputError::MissingColumns {
            path: source.to_path_buf(),
            columns: missing,
        });
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<RawScores>().enumerate() {
        let row = idx + 1;
        let scores = result.map_err(|e| malformed_or_io(row, e))?;
        for &subject in subject_order() {
            let value = scores.score(subject);
            if !value.is_finite() {
                return Err(InputError::Malformed {
                    row,
                    message: format!("'{}' is not a finite number ({value})", subject.column()),
                });
            }
        }
        rows.push(scores);
    }
    Ok(rows)
}

fn missing_columns(headers: &csv::StringRecord) -> Vec<String> {
    subject_order()
        .iter()
        .filter(|s| !headers.iter().any(|h| h == s.column()))
        .map(|s| s.column().to_string())
        .collect()
}

fn malformed_or_io(row: usize, err: csv::Error) -> InputError {
    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
        return InputError::Csv(err);
    }
    InputError::Malformed {
        row,
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
