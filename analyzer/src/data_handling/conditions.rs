//! Classification-condition tables for the POKIT plot.
//!
//! Two JSON tables map continuous values onto discrete visual categories:
//! average dwell time onto a circle color, fraction of molecules onto a
//! concentric-circle count. Each table is an ordered set of half-open
//! `[lower, upper)` ranges; the last category is open-ended, so its
//! configured upper value is kept in the file for readability but ignored.
//! Tables are validated once at load time and immutable afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::models::{AnalysisError, AnalysisResult};

/// Dwell-time categories, fastest transitions first.
pub const DWELL_CATEGORIES: [&str; 5] = ["red", "purple", "green", "blue", "black"];

/// Fraction categories; index + 1 is the number of circles drawn.
pub const FRACTION_CATEGORIES: [&str; 4] =
    ["one circle", "two circle", "three circle", "four circle"];

const DEFAULT_DWELL_JSON: &str = include_str!("../../config/dwell_time_conditions.json");
const DEFAULT_FRACTION_JSON: &str = include_str!("../../config/fraction_conditions.json");

#[derive(Debug, Clone)]
pub struct Category {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
}

/// An ordered run of contiguous half-open ranges, last one open-ended.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    categories: Vec<Category>,
}

impl ClassificationTable {
    /// Build and validate a table from already-ordered `(label, [low, high])`
    /// pairs. Ranges must be increasing and contiguous: each category's upper
    /// bound is the next category's lower bound.
    pub fn from_ranges(ordered: &[(&str, [f64; 2])]) -> AnalysisResult<Self> {
        if ordered.is_empty() {
            return Err(AnalysisError::Configuration(
                "classification table has no categories".into(),
            ));
        }

        let categories: Vec<Category> = ordered
            .iter()
            .map(|(label, range)| Category {
                label: (*label).to_string(),
                lower: range[0],
                upper: range[1],
            })
            .collect();

        for pair in categories.windows(2) {
            let (cur, next) = (&pair[0], &pair[1]);
            if !(cur.lower < cur.upper) {
                return Err(AnalysisError::Configuration(format!(
                    "category `{}` range [{}, {}) is not increasing",
                    cur.label, cur.lower, cur.upper
                )));
            }
            if next.lower != cur.upper {
                return Err(AnalysisError::Configuration(format!(
                    "categories `{}` and `{}` are not contiguous ({} vs {})",
                    cur.label, next.label, cur.upper, next.lower
                )));
            }
        }

        Ok(Self { categories })
    }

    fn from_json(json: &str, required: &[&str], table_name: &str) -> AnalysisResult<Self> {
        let raw: HashMap<String, [f64; 2]> = serde_json::from_str(json).map_err(|e| {
            AnalysisError::Configuration(format!("cannot parse {table_name} table: {e}"))
        })?;

        let mut ordered = Vec::with_capacity(required.len());
        for &label in required {
            let range = raw.get(label).ok_or_else(|| {
                AnalysisError::Configuration(format!(
                    "{table_name} table is missing category `{label}`"
                ))
            })?;
            ordered.push((label, *range));
        }
        Self::from_ranges(&ordered)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Index of the first category whose half-open range contains `value`.
    /// The last category matches any value at or above its lower bound.
    /// `None` means the value falls below the first category.
    pub fn classify(&self, value: f64) -> Option<usize> {
        let last = self.categories.len() - 1;
        for (idx, cat) in self.categories.iter().enumerate() {
            if idx == last {
                if value >= cat.lower {
                    return Some(idx);
                }
            } else if value >= cat.lower && value < cat.upper {
                return Some(idx);
            }
        }
        None
    }
}

/// Both POKIT tables, loaded together before any analysis runs.
#[derive(Debug, Clone)]
pub struct PokitConditions {
    pub dwell_time: ClassificationTable,
    pub fraction: ClassificationTable,
}

impl PokitConditions {
    /// Load the tables, falling back to the bundled defaults when no path
    /// is supplied. Fails fast on a missing category or bad ranges.
    pub fn load(dwell_path: Option<&Path>, fraction_path: Option<&Path>) -> AnalysisResult<Self> {
        let dwell_json = read_or_default(dwell_path, DEFAULT_DWELL_JSON)?;
        let fraction_json = read_or_default(fraction_path, DEFAULT_FRACTION_JSON)?;

        let conditions = Self {
            dwell_time: ClassificationTable::from_json(
                &dwell_json,
                &DWELL_CATEGORIES,
                "dwell-time",
            )?,
            fraction: ClassificationTable::from_json(
                &fraction_json,
                &FRACTION_CATEGORIES,
                "fraction",
            )?,
        };
        info!("Loaded POKIT classification conditions");
        Ok(conditions)
    }
}

fn read_or_default(path: Option<&Path>, default: &str) -> AnalysisResult<String> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|e| AnalysisError::Io {
            path: p.to_path_buf(),
            source: e,
        }),
        None => Ok(default.to_string()),
    }
}
