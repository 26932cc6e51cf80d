//! Lay out one logical row split over three adjacent sub-sections.
//!
//! Usage:
//!   cargo run -p seatmap --example sub_sections
//!
//! Numbering is chained across the sub-sections (43/57/43 seats), so the
//! continuity check in the printed report stays empty.

use seatmap::prelude::*;

fn trapezoid(x0: f64, width: f64, slant: f64) -> Vec<CanvasPoint> {
    vec![
        CanvasPoint::new(x0, 300.0),
        CanvasPoint::new(x0 + width, 300.0),
        CanvasPoint::new(x0 + width + slant, 420.0),
        CanvasPoint::new(x0 - slant, 420.0),
    ]
}

fn main() {
    let counts = [43u32, 57, 43];
    let ranges = chain_ranges(1, &counts);
    let parts = [("plus-right", "R"), ("plus-center", "C"), ("plus-left", "L")];
    let sections = parts
        .iter()
        .zip(counts.iter().zip(&ranges))
        .enumerate()
        .map(|(i, ((id, prefix), (&count, range)))| SectionSpec {
            id: id.to_string(),
            name: id.replace('-', " ").to_uppercase(),
            zone: Zone::Plus,
            prefix: prefix.to_string(),
            polygon: trapezoid(100.0 + 1400.0 * i as f64, 1300.0, 30.0),
            rows: vec![RowSpec::new("P", count).with_range(range.start, range.end)],
            row_order: RowOrder::StageToBack,
            declared_total: Some(count),
            strategy: Some(Strategy::EdgeInterpolated),
            color: None,
        })
        .collect();
    let venue = VenueSpec {
        name: Some("demo".into()),
        sections,
    };

    match generate_venue(&venue, &LayoutCfg::default()) {
        Ok(layout) => {
            for s in &layout.sections {
                let first = s.seats.first().map(|x| x.label.as_str()).unwrap_or("-");
                let last = s.seats.last().map(|x| x.label.as_str()).unwrap_or("-");
                println!("{:<12} capacity={:<3} {first} .. {last}", s.id, s.capacity());
            }
            match serde_json::to_string_pretty(&layout.report()) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("report: {e}"),
            }
        }
        Err(e) => eprintln!("layout failed: {e}"),
    }
}
