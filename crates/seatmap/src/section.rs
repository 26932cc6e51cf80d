//! Input model: venue, sections and row specifications.
//!
//! Everything here is plain serde data resolved once at load time: zones are a
//! closed enum, row ordering is explicit, numbering is typed.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geom2::{CanvasPoint, Polygon};
use crate::numbering::{Direction, NumberRange};
use crate::rows::Strategy;

/// Pricing/quality tier of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    Vip,
    Plus,
    Preferente,
    Diamante,
    General,
}

impl Zone {
    /// Default render color for seats of this zone.
    pub fn default_color(self) -> &'static str {
        match self {
            Zone::Vip => "#0EA5E9",
            Zone::Plus => "#86B063",
            Zone::Preferente => "#E69E4C",
            Zone::Diamante => "#D946EF",
            Zone::General => "#666666",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Vip => "VIP",
            Zone::Plus => "PLUS",
            Zone::Preferente => "PREFERENTE",
            Zone::Diamante => "DIAMANTE",
            Zone::General => "GENERAL",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the input row list is ordered relative to the stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// First listed row is nearest the stage.
    #[default]
    StageToBack,
    /// First listed row is farthest from the stage.
    BackToStage,
}

/// One row of a section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSpec {
    pub label: String,
    /// Authoritative seat count.
    pub seat_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_range: Option<NumberRange>,
    #[serde(default)]
    pub direction: Direction,
    /// Explicit numbering, used verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Vec<i64>>,
}

impl RowSpec {
    /// Row with implicit `1..=seat_count` numbering.
    pub fn new(label: impl Into<String>, seat_count: u32) -> Self {
        Self {
            label: label.into(),
            seat_count,
            number_range: None,
            direction: Direction::Ltr,
            numbers: None,
        }
    }

    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.number_range = Some(NumberRange { start, end });
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// One polygonal section of the venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub id: String,
    pub name: String,
    pub zone: Zone,
    /// Ticket-facing label prefix, e.g. `VC`.
    pub prefix: String,
    pub polygon: Vec<CanvasPoint>,
    #[serde(default)]
    pub rows: Vec<RowSpec>,
    #[serde(default)]
    pub row_order: RowOrder,
    /// Total seats the source material declares for this section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    /// Overrides the zone color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SectionSpec {
    pub fn outline(&self) -> Result<Polygon, LayoutError> {
        Polygon::from_canvas(&self.polygon)
    }

    pub fn color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.zone.default_color())
    }

    /// Sum of declared per-row seat counts.
    pub fn declared_row_total(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.seat_count)).sum()
    }

    /// Row labels must be unique: seat ids are built from them.
    pub fn check_row_labels(&self) -> Result<(), LayoutError> {
        for (i, row) in self.rows.iter().enumerate() {
            if self.rows[..i].iter().any(|r| r.label == row.label) {
                return Err(LayoutError::DuplicateRowLabel {
                    label: row.label.clone(),
                });
            }
        }
        Ok(())
    }
}

/// All sections of one venue layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sections: Vec<SectionSpec>,
}
