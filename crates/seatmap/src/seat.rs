//! Seat record assembler.
//!
//! Identity
//! - `id = seat-{sectionId}-{row}-{number}`: venue-unique via the section id.
//! - `label = {prefix}-{row}-{number}`: ticket-facing, venue-unique.
//! - `displayLabel = {row}-{number}`: canvas text, unique within the section.
//!
//! Construction is pure; persistence belongs to the caller.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geom2::CanvasPoint;
use crate::section::{SectionSpec, Zone};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    /// The only status generation produces.
    #[default]
    Available,
    Reserved,
    Sold,
    Held,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatSize {
    pub width: f64,
    pub height: f64,
}

/// Editor-facing geometry of a seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasInfo {
    pub position: CanvasPoint,
    pub size: SeatSize,
    pub radius: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMetadata {
    pub section_id: String,
    pub section_name: String,
    pub zone: Zone,
    pub color: String,
    pub canvas: CanvasInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: String,
    pub label: String,
    pub display_label: String,
    pub row_label: String,
    pub number: i64,
    pub status: SeatStatus,
    pub position: CanvasPoint,
    pub metadata: SeatMetadata,
}

/// Section-level fields shared by every seat of one section.
#[derive(Clone, Debug)]
pub struct SeatAssembler<'a> {
    section: &'a SectionSpec,
    color: &'a str,
    radius: f64,
    decimals: u32,
}

impl<'a> SeatAssembler<'a> {
    pub fn new(section: &'a SectionSpec, radius: f64, decimals: u32) -> Self {
        Self {
            section,
            color: section.color(),
            radius: round_to(radius, decimals),
            decimals,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn assemble(&self, row_label: &str, number: i64, position: Vector2<f64>) -> Seat {
        let position = CanvasPoint::from(position).rounded(self.decimals);
        let display_label = format!("{row_label}-{number}");
        let diameter = 2.0 * self.radius;
        Seat {
            id: format!("seat-{}-{row_label}-{number}", self.section.id),
            label: format!("{}-{row_label}-{number}", self.section.prefix),
            row_label: row_label.to_string(),
            number,
            status: SeatStatus::Available,
            position,
            metadata: SeatMetadata {
                section_id: self.section.id.clone(),
                section_name: self.section.name.clone(),
                zone: self.section.zone,
                color: self.color.to_string(),
                canvas: CanvasInfo {
                    position,
                    size: SeatSize {
                        width: diameter,
                        height: diameter,
                    },
                    radius: self.radius,
                    label: display_label.clone(),
                },
            },
            display_label,
        }
    }
}

fn round_to(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::RowOrder;
    use nalgebra::vector;

    fn section() -> SectionSpec {
        SectionSpec {
            id: "vip-central".into(),
            name: "VIP Central".into(),
            zone: Zone::Vip,
            prefix: "VC".into(),
            polygon: Vec::new(),
            rows: Vec::new(),
            row_order: RowOrder::StageToBack,
            declared_total: None,
            strategy: None,
            color: None,
        }
    }

    #[test]
    fn identifiers_follow_section_and_row() {
        let s = section();
        let asm = SeatAssembler::new(&s, 6.3333, 2);
        let seat = asm.assemble("8", 23, vector![100.123, 200.456]);
        assert_eq!(seat.id, "seat-vip-central-8-23");
        assert_eq!(seat.label, "VC-8-23");
        assert_eq!(seat.display_label, "8-23");
        assert_eq!(seat.status, SeatStatus::Available);
        assert_eq!(seat.position, CanvasPoint::new(100.12, 200.46));
        assert_eq!(seat.metadata.color, "#0EA5E9");
        assert_eq!(seat.metadata.canvas.radius, 6.33);
        assert_eq!(seat.metadata.canvas.size.width, 12.66);
        assert_eq!(seat.metadata.canvas.label, "8-23");
    }

    #[test]
    fn wire_names() {
        let s = section();
        let seat = SeatAssembler::new(&s, 5.0, 2).assemble("A", 1, vector![1.0, 2.0]);
        let v = serde_json::to_value(&seat).unwrap();
        assert_eq!(v["displayLabel"], "A-1");
        assert_eq!(v["status"], "AVAILABLE");
        assert_eq!(v["metadata"]["sectionId"], "vip-central");
        assert_eq!(v["metadata"]["zone"], "VIP");
        assert_eq!(v["metadata"]["canvas"]["size"]["height"], 10.0);
    }
}
