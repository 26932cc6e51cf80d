//! Row specs from a spreadsheet export.
//!
//! Columns: `section,row,seats[,start,end,direction]`. `start`/`end` must be
//! given together; `direction` is `LTR` (default) or `RTL`. Rows keep file
//! order and replace the rows of the named section.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use seatmap::numbering::{Direction, NumberRange};
use seatmap::section::{RowSpec, VenueSpec};
use std::path::Path;

/// One CSV line resolved to its section.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvRow {
    pub section: String,
    pub row: RowSpec,
}

fn int_column(df: &DataFrame, name: &str) -> Result<Option<Int64Chunked>> {
    match df.column(name) {
        Ok(s) => {
            let cast = s
                .cast(&DataType::Int64)
                .with_context(|| format!("column {name} is not integer"))?;
            Ok(Some(cast.i64()?.clone()))
        }
        Err(_) => Ok(None),
    }
}

fn str_column(df: &DataFrame, name: &str) -> Result<Option<StringChunked>> {
    match df.column(name) {
        Ok(s) => {
            let cast = s.cast(&DataType::String)?;
            Ok(Some(cast.str()?.clone()))
        }
        Err(_) => Ok(None),
    }
}

fn parse_direction(raw: Option<&str>, line: usize) -> Result<Direction> {
    match raw.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
        None | Some("") | Some("LTR") => Ok(Direction::Ltr),
        Some("RTL") => Ok(Direction::Rtl),
        Some(other) => bail!("line {line}: unknown direction {other:?}"),
    }
}

pub fn read_rows_csv(path: &Path) -> Result<Vec<CsvRow>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading rows from {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "rows_csv_shape");

    let sections = str_column(&df, "section")?.ok_or_else(|| anyhow!("missing column section"))?;
    let labels = str_column(&df, "row")?.ok_or_else(|| anyhow!("missing column row"))?;
    let seats = int_column(&df, "seats")?.ok_or_else(|| anyhow!("missing column seats"))?;
    let starts = int_column(&df, "start")?;
    let ends = int_column(&df, "end")?;
    let directions = str_column(&df, "direction")?;

    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        // Header is line 1.
        let line = i + 2;
        let section = sections
            .get(i)
            .ok_or_else(|| anyhow!("line {line}: empty section"))?;
        let label = labels
            .get(i)
            .ok_or_else(|| anyhow!("line {line}: empty row label"))?;
        let count = seats
            .get(i)
            .ok_or_else(|| anyhow!("line {line}: empty seat count"))?;
        let count = u32::try_from(count)
            .with_context(|| format!("line {line}: seat count {count} out of range"))?;
        let start = starts.as_ref().and_then(|c| c.get(i));
        let end = ends.as_ref().and_then(|c| c.get(i));
        let number_range = match (start, end) {
            (Some(start), Some(end)) => Some(NumberRange { start, end }),
            (None, None) => None,
            _ => bail!("line {line}: start and end must be given together"),
        };
        let direction = parse_direction(directions.as_ref().and_then(|c| c.get(i)), line)?;
        out.push(CsvRow {
            section: section.trim().to_string(),
            row: RowSpec {
                label: label.trim().to_string(),
                seat_count: count,
                number_range,
                direction,
                numbers: None,
            },
        });
    }
    Ok(out)
}

/// Replace the rows of every section named in `rows`; returns how many
/// sections changed. Unknown section ids are an error.
pub fn apply_rows(venue: &mut VenueSpec, rows: Vec<CsvRow>) -> Result<usize> {
    let mut touched: Vec<String> = Vec::new();
    for r in rows {
        let section = venue
            .sections
            .iter_mut()
            .find(|s| s.id == r.section)
            .ok_or_else(|| anyhow!("rows csv names unknown section {:?}", r.section))?;
        if !touched.contains(&r.section) {
            section.rows.clear();
            touched.push(r.section.clone());
        }
        section.rows.push(r.row);
    }
    Ok(touched.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatmap::section::{RowOrder, SectionSpec, Zone};
    use std::fs;
    use tempfile::tempdir;

    fn venue() -> VenueSpec {
        let section = |id: &str| SectionSpec {
            id: id.into(),
            name: id.into(),
            zone: Zone::Preferente,
            prefix: "P".into(),
            polygon: Vec::new(),
            rows: vec![RowSpec::new("old", 1)],
            row_order: RowOrder::StageToBack,
            declared_total: None,
            strategy: None,
            color: None,
        };
        VenueSpec {
            name: None,
            sections: vec![section("pref-right"), section("pref-left")],
        }
    }

    #[test]
    fn reads_ranges_and_directions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        fs::write(
            &path,
            "section,row,seats,start,end,direction\n\
             pref-right,P,43,1,43,LTR\n\
             pref-right,O,22,37,1,rtl\n\
             pref-left,P,10,,,\n",
        )
        .unwrap();
        let rows = read_rows_csv(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].row.number_range, Some(NumberRange { start: 37, end: 1 }));
        assert_eq!(rows[1].row.direction, Direction::Rtl);
        assert_eq!(rows[2].row.number_range, None);
        assert_eq!(rows[2].row.seat_count, 10);

        let mut v = venue();
        assert_eq!(apply_rows(&mut v, rows).unwrap(), 2);
        let labels: Vec<&str> = v.sections[0].rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["P", "O"]);
        assert_eq!(v.sections[1].rows.len(), 1);
    }

    #[test]
    fn half_range_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        fs::write(&path, "section,row,seats,start,end\npref-left,A,5,1,\n").unwrap();
        let err = read_rows_csv(&path).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn unknown_section_is_an_error() {
        let rows = vec![CsvRow {
            section: "balcony".into(),
            row: RowSpec::new("A", 3),
        }];
        assert!(apply_rows(&mut venue(), rows).is_err());
    }
}
