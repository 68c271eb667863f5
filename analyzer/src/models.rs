//! Core data types shared across the analysis pipeline.

use std::path::PathBuf;

use ndarray::Array2;
use thiserror::Error;

/// One transition event from a molecule's trajectory file:
/// FRET efficiency before and after the transition, and how long the
/// molecule dwelt in the initial state (in frames).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRecord {
    pub initial_fret: f64,
    pub final_fret: f64,
    pub dwell_frames: f64,
}

/// An N×N map over (initial-bin, final-bin). Row index is the initial
/// FRET bin, column index the final FRET bin.
pub type Grid = Array2<f64>;

/// One occupied cell of the POKIT summary: bin-center coordinates, the
/// dwell time averaged over every event that landed in the cell (already
/// multiplied by the frame duration), and the fraction of molecules that
/// showed the transition at least once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PokitEntry {
    pub initial_fret: f64,
    pub final_fret: f64,
    pub avg_dwell_time: f64,
    pub fraction: f64,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("malformed record in {} at line {line}: {detail}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("no trace files to analyze")]
    EmptyInput,

    #[error("{what} value {value} falls below every configured range")]
    Unclassifiable { what: &'static str, value: f64 },

    #[error("bad classification config: {0}")]
    Configuration(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rendering failed: {0}")]
    Render(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
