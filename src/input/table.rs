/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Parameter tables: CSV input rows and the counts written back out.
//!
//! Expected input header:
//!
//! ```text
//! r (A),R (A),Theta,Element,Interface Facet,Surface Facet
//! ```
//!
//! Facet cells carry tuples like `"(1, 1, 1)"` (quoted, since they
//! contain commas) or are left blank. Theta and the element are
//! mandatory per row; of the two radii at least one must be present,
//! and the footprint radius wins when both are (documented,
//! non-configurable).

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::errors::{InputError, Result};
use crate::crystal::Facet;
use crate::estimator::AtomCounts;

/// Column labels of the input table, in canonical order
const EXPECTED_COLUMNS: [&str; 6] = [
    "r (A)",
    "R (A)",
    "Theta",
    "Element",
    "Interface Facet",
    "Surface Facet",
];

/// One parsed parameter row
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    /// Footprint radius r in Å, if given
    pub footprint_radius: Option<f64>,
    /// Curvature radius R in Å, if given
    pub curvature_radius: Option<f64>,
    /// Contact angle in degrees
    pub theta: f64,
    /// Nanoparticle element symbol
    pub element: String,
    /// Facet facing the support
    pub interface_facet: Option<Facet>,
    /// Facet facing vacuum
    pub surface_facet: Option<Facet>,
}

impl InputRow {
    /// The footprint radius to compute with: r wins over R; otherwise
    /// r = R·sin θ. `line` is only used for error reporting.
    pub fn resolved_radius(&self, line: usize) -> Result<f64> {
        match (self.footprint_radius, self.curvature_radius) {
            (Some(r), _) => Ok(r),
            (None, Some(big_r)) => Ok(big_r * self.theta.to_radians().sin()),
            (None, None) => Err(InputError::MissingRadius { line }),
        }
    }
}

/// Split one CSV line into cells, honoring double-quoted fields
fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

fn parse_optional_f64(cell: &str, line: usize, label: &str) -> Result<Option<f64>> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse()
        .map(Some)
        .map_err(|_| InputError::Parse {
            line,
            message: format!("cannot parse {} from {:?}", label, cell),
        })
}

fn parse_optional_facet(cell: &str) -> Result<Option<Facet>> {
    if cell.is_empty() {
        return Ok(None);
    }
    Ok(Some(cell.parse::<Facet>()?))
}

/// Parse a parameter table from any buffered reader
pub fn parse_table_from<R: BufRead>(reader: R) -> Result<Vec<InputRow>> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((number, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break (number + 1, line);
                }
            }
            None => {
                return Err(InputError::ColumnMismatch {
                    found: Vec::new(),
                    expected: EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect(),
                })
            }
        }
    };

    let found = split_csv_line(&header.1);
    let expected: Vec<String> = EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect();
    // presence and multiplicity must both match; order may differ
    let mut found_sorted = found.clone();
    let mut expected_sorted = expected.clone();
    found_sorted.sort();
    expected_sorted.sort();
    if found_sorted != expected_sorted {
        return Err(InputError::ColumnMismatch { found, expected });
    }

    let column = |label: &str| -> usize {
        found
            .iter()
            .position(|c| c == label)
            .expect("label checked against header")
    };
    let r_col = column("r (A)");
    let big_r_col = column("R (A)");
    let theta_col = column("Theta");
    let element_col = column("Element");
    let interface_col = column("Interface Facet");
    let surface_col = column("Surface Facet");

    let mut rows = Vec::new();
    for (number, line) in lines {
        let line = line?;
        let line_number = number + 1;
        if line.trim().is_empty() {
            continue;
        }

        let cells = split_csv_line(&line);
        if cells.len() != found.len() {
            return Err(InputError::Parse {
                line: line_number,
                message: format!(
                    "expected {} cells, found {}",
                    found.len(),
                    cells.len()
                ),
            });
        }

        let theta = parse_optional_f64(&cells[theta_col], line_number, "Theta")?
            .ok_or_else(|| InputError::Parse {
                line: line_number,
                message: "Theta is mandatory".to_string(),
            })?;
        let element = cells[element_col].to_string();
        if element.is_empty() {
            return Err(InputError::Parse {
                line: line_number,
                message: "Element is mandatory".to_string(),
            });
        }

        rows.push(InputRow {
            footprint_radius: parse_optional_f64(&cells[r_col], line_number, "r (A)")?,
            curvature_radius: parse_optional_f64(&cells[big_r_col], line_number, "R (A)")?,
            theta,
            element,
            interface_facet: parse_optional_facet(&cells[interface_col])?,
            surface_facet: parse_optional_facet(&cells[surface_col])?,
        });
    }

    Ok(rows)
}

/// Parse a parameter table from a CSV file
pub fn parse_table<P: AsRef<Path>>(path: P) -> Result<Vec<InputRow>> {
    let file = File::open(path)?;
    parse_table_from(BufReader::new(file))
}

/// Write atom counts as CSV, one row per input row, in input order
pub fn write_counts<W: Write>(mut writer: W, counts: &[AtomCounts]) -> Result<()> {
    writeln!(writer, "Perimeter,Interface,Surface,Total")?;
    for row in counts {
        writeln!(
            writer,
            "{},{},{},{}",
            row.perimeter, row.interface, row.surface, row.total
        )?;
    }
    Ok(())
}

/// Write atom counts to a CSV file
pub fn write_counts_file<P: AsRef<Path>>(path: P, counts: &[AtomCounts]) -> Result<()> {
    let file = File::create(path)?;
    write_counts(file, counts)
}
