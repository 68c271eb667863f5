//! Discovery and parsing of per-molecule trajectory files.
//!
//! Each `.dat` file holds one molecule's transition events as
//! whitespace-delimited text, three real columns per line:
//! initial FRET, final FRET, dwell time in frames. No header.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::{AnalysisError, AnalysisResult, TransitionRecord};

/// Find every `*.dat` file directly under `data_dir`, sorted by path so
/// downstream output is reproducible regardless of directory order.
pub fn discover_trace_files(data_dir: &Path) -> AnalysisResult<Vec<PathBuf>> {
    let pattern = data_dir.join("*.dat");
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    let matches = glob::glob(&pattern)
        .map_err(|e| AnalysisError::Configuration(format!("bad data path {pattern}: {e}")))?;
    for entry in matches {
        let path = entry.map_err(|e| AnalysisError::Io {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        files.push(path);
    }
    files.sort();

    if files.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    info!("Found {} trace files in {}", files.len(), data_dir.display());
    Ok(files)
}

/// Load one molecule's transition records.
///
/// Blank lines are skipped. A line that cannot be tokenized into three
/// non-negative-dwell floats aborts the load with an error naming the file
/// and 1-based line number; this file then contributes nothing.
pub fn load_trace_file(path: &Path) -> AnalysisResult<Vec<TransitionRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| AnalysisError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if let Some(record) = parse_line(line, path, idx + 1)? {
            records.push(record);
        }
    }
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn parse_line(
    line: &str,
    path: &Path,
    line_no: usize,
) -> AnalysisResult<Option<TransitionRecord>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let malformed = |detail: String| AnalysisError::MalformedRecord {
        path: path.to_path_buf(),
        line: line_no,
        detail,
    };

    if tokens.len() != 3 {
        return Err(malformed(format!(
            "expected 3 columns, found {}",
            tokens.len()
        )));
    }

    let mut values = [0.0f64; 3];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|_| malformed(format!("`{token}` is not a number")))?;
    }
    let [initial_fret, final_fret, dwell_frames] = values;

    if dwell_frames < 0.0 || dwell_frames.is_nan() {
        return Err(malformed(format!(
            "dwell time {dwell_frames} is negative or not a number"
        )));
    }

    Ok(Some(TransitionRecord {
        initial_fret,
        final_fret,
        dwell_frames,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_trace(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parses_three_column_lines_and_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_trace(dir.path(), "mol.dat", "0.1 0.9 5\n\n0.3\t0.4\t2.5\n");
        let records = load_trace_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].initial_fret, 0.1);
        assert_eq!(records[1].dwell_frames, 2.5);
    }

    #[test]
    fn two_column_line_reports_file_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_trace(dir.path(), "bad.dat", "0.1 0.9 5\n0.2 0.3\n");
        let err = load_trace_file(&path).unwrap_err();
        match err {
            AnalysisError::MalformedRecord { path: p, line, .. } => {
                assert_eq!(p, path);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_token_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_trace(dir.path(), "bad.dat", "0.1 abc 5\n");
        assert!(matches!(
            load_trace_file(&path),
            Err(AnalysisError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn negative_or_nan_dwell_time_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        for body in ["0.1 0.9 -5\n", "0.1 0.9 NaN\n"] {
            let path = write_trace(dir.path(), "bad.dat", body);
            let err = load_trace_file(&path).unwrap_err();
            match err {
                AnalysisError::MalformedRecord { detail, .. } => {
                    assert!(detail.contains("negative or not a number"), "{detail}");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn discovery_only_matches_dat_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        write_trace(dir.path(), "b.dat", "0.1 0.2 1\n");
        write_trace(dir.path(), "a.dat", "0.1 0.2 1\n");
        write_trace(dir.path(), "notes.txt", "ignore me\n");
        let files = discover_trace_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.dat", "b.dat"]);
    }

    #[test]
    fn empty_directory_is_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover_trace_files(dir.path()),
            Err(AnalysisError::EmptyInput)
        ));
    }
}
