//! Threshold classification of POKIT values into visual categories.

use crate::data_handling::conditions::ClassificationTable;
use crate::models::{AnalysisError, AnalysisResult};

/// Color label for an averaged dwell time. The first half-open range that
/// contains the value wins; a value below every range (a negative dwell
/// time, say) is an explicit error, never a silent default.
pub fn classify_dwell_time(value: f64, table: &ClassificationTable) -> AnalysisResult<&str> {
    let idx = table
        .classify(value)
        .ok_or_else(|| AnalysisError::Unclassifiable {
            what: "dwell time",
            value,
        })?;
    Ok(&table.categories()[idx].label)
}

/// Number of concentric circles (1-based) for a fraction of molecules.
pub fn classify_fraction(value: f64, table: &ClassificationTable) -> AnalysisResult<u8> {
    let idx = table
        .classify(value)
        .ok_or_else(|| AnalysisError::Unclassifiable {
            what: "fraction",
            value,
        })?;
    Ok(idx as u8 + 1)
}
