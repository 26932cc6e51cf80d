//! Validation report returned next to the generated seats.
//!
//! The report is the primary review artifact: nothing here aborts generation.
//! A row or section is "clean" when no count-related warning is attached;
//! degraded placements and overflows are flagged but do not make it unclean.

use serde::Serialize;

use crate::error::LayoutError;
use crate::numbering::{ContinuityBreak, NumberRange};
use crate::rows::Strategy;
use crate::section::Zone;

/// Non-fatal findings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Generated numbers disagree in length with the declared seat count.
    RowCountMismatch {
        row: String,
        declared: u32,
        generated: usize,
    },
    /// Range bounds imply a different count than declared.
    DeclaredRangeMismatch {
        row: String,
        declared: u32,
        range: NumberRange,
        implied: u64,
    },
    /// Scan line met the outline fewer than twice; bounding-box fallback used.
    InsufficientIntersections { row: String, crossings: usize },
    /// Seats at minimum spacing do not fit the row extent.
    SpacingOverflow {
        row: String,
        needed: f64,
        available: f64,
    },
    SectionTotalMismatch { declared: u32, computed: u64 },
    NonPositiveNumber { row: String, number: i64 },
    /// An explicit number list repeats a value; seat ids would collide.
    DuplicateSeatNumber { row: String, number: i64 },
}

impl Warning {
    /// Count-related warnings make a report unclean.
    pub fn is_count_error(&self) -> bool {
        matches!(
            self,
            Warning::RowCountMismatch { .. }
                | Warning::SectionTotalMismatch { .. }
                | Warning::DuplicateSeatNumber { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowReport {
    pub label: String,
    pub declared: u32,
    pub generated: usize,
    /// `generated == declared`.
    pub count_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_number: Option<i64>,
    /// Bounding-box fallback was used.
    pub degraded: bool,
    pub overflow: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section_id: String,
    pub zone: Zone,
    pub strategy: Strategy,
    pub capacity: usize,
    /// Sum of declared per-row seat counts.
    pub computed_total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_total: Option<u32>,
    pub rows: Vec<RowReport>,
    pub warnings: Vec<Warning>,
}

impl SectionReport {
    pub fn is_clean(&self) -> bool {
        self.rows.iter().all(|r| r.count_ok) && !self.warnings.iter().any(Warning::is_count_error)
    }
}

/// A section that produced no seats.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFailure {
    pub section_id: String,
    pub error: String,
}

impl SectionFailure {
    pub fn new(section_id: impl Into<String>, err: &LayoutError) -> Self {
        Self {
            section_id: section_id.into(),
            error: err.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueReport {
    pub sections: Vec<SectionReport>,
    pub failures: Vec<SectionFailure>,
    /// Informational only.
    pub continuity: Vec<ContinuityBreak>,
    pub total_seats: usize,
}

impl VenueReport {
    /// No failed section and every section clean.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.sections.iter().all(SectionReport::is_clean)
    }

    pub fn warning_count(&self) -> usize {
        self.sections.iter().map(|s| s.warnings.len()).sum()
    }
}
