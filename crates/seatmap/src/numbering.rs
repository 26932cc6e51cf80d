//! Numbering reconciler.
//!
//! Policy
//! - The declared seat count is authoritative. A range only supplies the first
//!   number and the step sign (`start <= end` ascends, otherwise descends);
//!   its `end` never changes how many numbers are produced.
//! - `Rtl` reverses the sequence so physical left-to-right order matches the
//!   declared reading order.
//! - No range means `1..=seat_count` ascending.
//! - An explicit `numbers` list is used verbatim; a length that disagrees with
//!   the seat count is reported, never truncated or padded.
//!
//! Continuity (documented, not enforced): sub-sections that share a zone and
//! row label continue one another's numbering, e.g. 1–43 | 44–100 | 101–143.

use serde::{Deserialize, Serialize};

use crate::section::{RowSpec, Zone};

/// Inclusive numbering range as written in the source material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub start: i64,
    pub end: i64,
}

impl NumberRange {
    #[inline]
    pub fn is_ascending(&self) -> bool {
        self.start <= self.end
    }

    /// Count implied by the range bounds (`|end - start| + 1`).
    #[inline]
    pub fn declared_len(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }
}

/// Reading order of seat numbers across a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Exactly `seat_count` numbers for a row, in physical left-to-right order.
pub fn generate_seat_numbers(
    seat_count: u32,
    range: Option<NumberRange>,
    direction: Direction,
) -> Vec<i64> {
    let (start, step) = match range {
        Some(r) if r.is_ascending() => (r.start, 1),
        Some(r) => (r.start, -1),
        None => (1, 1),
    };
    let mut numbers: Vec<i64> = (0..i64::from(seat_count))
        .map(|i| start + step * i)
        .collect();
    if direction == Direction::Rtl {
        numbers.reverse();
    }
    numbers
}

/// Where a row's numbers came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberSource {
    Implicit,
    Range,
    Explicit,
}

/// Reconciled numbering of one row.
#[derive(Clone, Debug, PartialEq)]
pub struct Reconciled {
    pub numbers: Vec<i64>,
    pub source: NumberSource,
    pub declared_count: u32,
}

impl Reconciled {
    /// Post-condition `len(numbers) == seat_count`.
    #[inline]
    pub fn count_matches(&self) -> bool {
        self.numbers.len() == self.declared_count as usize
    }
}

pub fn reconcile(row: &RowSpec) -> Reconciled {
    if let Some(explicit) = &row.numbers {
        return Reconciled {
            numbers: explicit.clone(),
            source: NumberSource::Explicit,
            declared_count: row.seat_count,
        };
    }
    Reconciled {
        numbers: generate_seat_numbers(row.seat_count, row.number_range, row.direction),
        source: if row.number_range.is_some() {
            NumberSource::Range
        } else {
            NumberSource::Implicit
        },
        declared_count: row.seat_count,
    }
}

/// Consecutive ascending ranges for adjacent sub-sections starting at `start`.
pub fn chain_ranges(start: i64, counts: &[u32]) -> Vec<NumberRange> {
    let mut next = start;
    counts
        .iter()
        .map(|&c| {
            let r = NumberRange {
                start: next,
                end: next + i64::from(c) - 1,
            };
            next += i64::from(c);
            r
        })
        .collect()
}

/// One sub-section's numbers for a logical row.
#[derive(Clone, Copy, Debug)]
pub struct SubRow<'a> {
    pub section_id: &'a str,
    pub zone: Zone,
    pub row: &'a str,
    pub numbers: &'a [i64],
}

/// Gap or overlap between adjacent sub-sections of one logical row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuityBreak {
    pub zone: Zone,
    pub row: String,
    pub previous_section: String,
    pub next_section: String,
    pub previous_max: i64,
    pub next_min: i64,
}

/// Check continuity between consecutive sub-rows (input order) sharing zone
/// and row label. Empty sub-rows are ignored. Output is sorted by zone, row.
pub fn continuity_breaks<'a>(rows: impl IntoIterator<Item = SubRow<'a>>) -> Vec<ContinuityBreak> {
    let mut groups: std::collections::BTreeMap<(Zone, &'a str), Vec<SubRow<'a>>> =
        std::collections::BTreeMap::new();
    for r in rows {
        if !r.numbers.is_empty() {
            groups.entry((r.zone, r.row)).or_default().push(r);
        }
    }
    let mut out = Vec::new();
    for ((zone, row), members) in groups {
        for pair in members.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let (Some(&prev_max), Some(&next_min)) =
                (prev.numbers.iter().max(), next.numbers.iter().min())
            else {
                continue;
            };
            if prev_max + 1 != next_min {
                out.push(ContinuityBreak {
                    zone,
                    row: row.to_string(),
                    previous_section: prev.section_id.to_string(),
                    next_section: next.section_id.to_string(),
                    previous_max: prev_max,
                    next_min,
                });
            }
        }
    }
    out
}
