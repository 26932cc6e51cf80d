//! Section and venue generation pipeline.
//!
//! Flow (per section)
//! outline -> row frame (locator) -> per row: reconcile numbers, place seats,
//! assemble records -> seats in input row order + `SectionReport`.
//!
//! Isolation
//! - A section that cannot be laid out (malformed outline, duplicate row
//!   label, bad reference edge, id already used earlier in the venue) is
//!   recorded as a `SectionFailure`; its siblings still run. Only an invalid `LayoutCfg` aborts a venue.
//! - Everything is sequential and deterministic: same input, same bytes out.
//!
//! Row order
//! - Input row `i` of `n` maps to stage slot `k` via `RowOrder`, and stage slot
//!   `k` to canvas slot `j` (0 = minimum y) via `StageSide`.

pub mod cfg;

pub use cfg::{LayoutCfg, StageSide};

use std::collections::BTreeSet;

use crate::error::LayoutError;
use crate::numbering::{continuity_breaks, reconcile, NumberSource, SubRow};
use crate::place::{min_spacing, place_row, seat_radius};
use crate::report::{RowReport, SectionFailure, SectionReport, VenueReport, Warning};
use crate::rows::locate_rows;
use crate::seat::{Seat, SeatAssembler};
use crate::section::{RowOrder, SectionSpec, VenueSpec, Zone};

/// Canvas slot (0 = top) of input row `i` out of `n`. Requires `i < n`.
#[inline]
pub fn canvas_slot(i: usize, n: usize, order: RowOrder, stage: StageSide) -> usize {
    let k = match order {
        RowOrder::StageToBack => i,
        RowOrder::BackToStage => n - 1 - i,
    };
    match stage {
        StageSide::Top => k,
        StageSide::Bottom => n - 1 - k,
    }
}

/// Seats and report of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedSection {
    pub id: String,
    pub name: String,
    pub zone: Zone,
    pub radius: f64,
    /// Seats in input row order, left to right within a row.
    pub seats: Vec<Seat>,
    pub report: SectionReport,
}

impl GeneratedSection {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }
}

/// Generate all seats of one section.
pub fn generate_section(
    section: &SectionSpec,
    cfg: &LayoutCfg,
) -> Result<GeneratedSection, LayoutError> {
    cfg.validate()?;
    let outline = section.outline()?;
    section.check_row_labels()?;

    let strategy = section.strategy.unwrap_or(cfg.strategy);
    let n = section.rows.len();
    let frame = locate_rows(&outline, n, strategy, cfg)?;
    let radius = seat_radius(frame.row_spacing, cfg);
    let floor = min_spacing(radius, cfg);
    let assembler = SeatAssembler::new(section, radius, cfg.position_decimals);

    let mut seats = Vec::new();
    let mut rows = Vec::with_capacity(n);
    let mut warnings = Vec::new();

    for (i, row) in section.rows.iter().enumerate() {
        let extent = frame.extents[canvas_slot(i, n, section.row_order, cfg.stage)];
        let numbering = reconcile(row);
        let placement = place_row(extent.start, extent.end, numbering.numbers.len(), floor)?;

        if !numbering.count_matches() {
            warnings.push(Warning::RowCountMismatch {
                row: row.label.clone(),
                declared: row.seat_count,
                generated: numbering.numbers.len(),
            });
        }
        if let Some(range) = row.number_range {
            let implied = range.declared_len();
            if numbering.source == NumberSource::Range && implied != u64::from(row.seat_count) {
                warnings.push(Warning::DeclaredRangeMismatch {
                    row: row.label.clone(),
                    declared: row.seat_count,
                    range,
                    implied,
                });
            }
        }
        if let Some(&number) = numbering.numbers.iter().find(|&&v| v <= 0) {
            warnings.push(Warning::NonPositiveNumber {
                row: row.label.clone(),
                number,
            });
        }
        let mut seen = BTreeSet::new();
        if let Some(&number) = numbering.numbers.iter().find(|&&v| !seen.insert(v)) {
            warnings.push(Warning::DuplicateSeatNumber {
                row: row.label.clone(),
                number,
            });
        }
        if let Some(crossings) = extent.fallback {
            warnings.push(Warning::InsufficientIntersections {
                row: row.label.clone(),
                crossings,
            });
        }
        if let Some(o) = placement.overflow {
            warnings.push(Warning::SpacingOverflow {
                row: row.label.clone(),
                needed: o.needed,
                available: o.available,
            });
        }

        tracing::debug!(
            section = %section.id,
            row = %row.label,
            seats = numbering.numbers.len(),
            spacing = placement.spacing,
            "row placed"
        );

        rows.push(RowReport {
            label: row.label.clone(),
            declared: row.seat_count,
            generated: numbering.numbers.len(),
            count_ok: numbering.count_matches(),
            first_number: numbering.numbers.first().copied(),
            last_number: numbering.numbers.last().copied(),
            degraded: extent.fallback.is_some(),
            overflow: placement.overflow.is_some(),
        });
        seats.extend(
            numbering
                .numbers
                .iter()
                .zip(&placement.positions)
                .map(|(&number, &pos)| assembler.assemble(&row.label, number, pos)),
        );
    }

    let computed_total = section.declared_row_total();
    if let Some(declared) = section.declared_total {
        if u64::from(declared) != computed_total {
            warnings.push(Warning::SectionTotalMismatch {
                declared,
                computed: computed_total,
            });
        }
    }
    for w in &warnings {
        tracing::warn!(section = %section.id, warning = ?w, "layout warning");
    }

    let report = SectionReport {
        section_id: section.id.clone(),
        zone: section.zone,
        strategy: frame.strategy,
        capacity: seats.len(),
        computed_total,
        declared_total: section.declared_total,
        rows,
        warnings,
    };
    Ok(GeneratedSection {
        id: section.id.clone(),
        name: section.name.clone(),
        zone: section.zone,
        radius: assembler.radius(),
        seats,
        report,
    })
}

/// Generated sections of a venue plus the sections that failed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VenueLayout {
    pub sections: Vec<GeneratedSection>,
    pub failures: Vec<SectionFailure>,
    pub continuity: Vec<crate::numbering::ContinuityBreak>,
}

impl VenueLayout {
    /// All seats, section by section.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.sections.iter().flat_map(|s| s.seats.iter())
    }

    pub fn report(&self) -> VenueReport {
        VenueReport {
            sections: self.sections.iter().map(|s| s.report.clone()).collect(),
            failures: self.failures.clone(),
            continuity: self.continuity.clone(),
            total_seats: self.sections.iter().map(GeneratedSection::capacity).sum(),
        }
    }
}

/// Generate every section of `venue`; per-section failures are isolated.
pub fn generate_venue(venue: &VenueSpec, cfg: &LayoutCfg) -> Result<VenueLayout, LayoutError> {
    cfg.validate()?;
    let mut out = VenueLayout::default();
    let mut ids = BTreeSet::new();
    let mut laid_out = Vec::with_capacity(venue.sections.len());
    for section in &venue.sections {
        let result = if ids.insert(section.id.as_str()) {
            generate_section(section, cfg)
        } else {
            Err(LayoutError::DuplicateSectionId {
                id: section.id.clone(),
            })
        };
        match result {
            Ok(g) => {
                out.sections.push(g);
                laid_out.push(section);
            }
            Err(e) => {
                tracing::error!(section = %section.id, error = %e, "section rejected");
                out.failures.push(SectionFailure::new(&section.id, &e));
            }
        }
    }

    let numbered: Vec<(&SectionSpec, Vec<(&str, Vec<i64>)>)> = laid_out
        .into_iter()
        .map(|s| {
            let rows = s
                .rows
                .iter()
                .map(|r| (r.label.as_str(), reconcile(r).numbers))
                .collect();
            (s, rows)
        })
        .collect();
    let sub_rows = numbered.iter().flat_map(|(s, rows)| {
        rows.iter().map(move |(label, numbers)| SubRow {
            section_id: &s.id,
            zone: s.zone,
            row: label,
            numbers,
        })
    });
    out.continuity = continuity_breaks(sub_rows);
    if !out.continuity.is_empty() {
        tracing::info!(
            breaks = out.continuity.len(),
            "numbering not continuous across sub-sections"
        );
    }

    let total: usize = out.sections.iter().map(GeneratedSection::capacity).sum();
    tracing::info!(
        sections = out.sections.len(),
        failed = out.failures.len(),
        seats = total,
        "venue generated"
    );
    Ok(out)
}
