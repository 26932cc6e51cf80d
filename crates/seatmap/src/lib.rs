//! Seat-layout generation for polygonal venue sections.
//!
//! Given a section outline and per-row seat counts with numbering, compute
//! seat positions, numbers and labels deterministically, together with a
//! validation report meant for review before anything is persisted.
//!
//! Module map
//! - `geom2`: point-in-polygon, bounds, interpolation, edge lists.
//! - `rows`: row-boundary locator (horizontal scan, edge interpolation,
//!   edge-aligned frames).
//! - `place`: even seat spacing with a minimum-spacing floor.
//! - `numbering`: seat-number reconciliation and sub-section continuity.
//! - `seat`: seat record assembly.
//! - `layout`: per-section and per-venue pipeline, `LayoutCfg`.
//!
//! No I/O happens here; callers load specs and persist seats.

pub mod error;
pub mod geom2;
pub mod layout;
pub mod numbering;
pub mod place;
pub mod report;
pub mod rows;
pub mod seat;
pub mod section;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::LayoutError;
pub use layout::{generate_section, generate_venue, GeneratedSection, LayoutCfg, VenueLayout};
pub use report::{VenueReport, Warning};
pub use seat::Seat;
pub use section::{SectionSpec, VenueSpec};

/// Common exports for callers building specs by hand.
pub mod prelude {
    pub use crate::geom2::{CanvasPoint, Polygon};
    pub use crate::layout::{
        generate_section, generate_venue, GeneratedSection, LayoutCfg, StageSide, VenueLayout,
    };
    pub use crate::numbering::{chain_ranges, Direction, NumberRange};
    pub use crate::report::{SectionReport, VenueReport, Warning};
    pub use crate::rows::Strategy;
    pub use crate::seat::{Seat, SeatStatus};
    pub use crate::section::{RowOrder, RowSpec, SectionSpec, VenueSpec, Zone};
    pub use nalgebra::Vector2 as Vec2;
}
