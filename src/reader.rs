//! Spreadsheet decode boundary.
//!
//! Decoding the binary format itself is delegated to `calamine`; this module
//! only reshapes its output into the loosely-typed [`RawSheet`] the row
//! normalizer consumes, and maps failures onto the crate error taxonomy.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use crate::data::dataset::{normalize_sheet, Dataset, RawCell, RawSheet, TIME_HEADER};

/// Why one uploaded file could not become a [`Dataset`]. Per-file failures
/// are isolated: they never affect other in-flight or loaded files.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file is not a readable spreadsheet.
    #[error("unreadable spreadsheet: {0}")]
    Decode(#[from] calamine::Error),
    /// The workbook has no sheet with a header row.
    #[error("sheet has no header row")]
    EmptySheet,
    /// No time axis is possible without the "Heure programme" header.
    #[error("sheet has no \"{TIME_HEADER}\" column")]
    MissingTimeColumn,
}

fn raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::Float(v) => RawCell::Number(*v),
        Data::Int(v) => RawCell::Number(*v as f64),
        Data::String(s) => RawCell::Text(s.clone()),
        // Bools, errors and date/duration cells carry no counter data.
        _ => RawCell::Empty,
    }
}

/// Validate the first decoded row as the header set. A sheet without any
/// row has no headers, and without the "Heure programme" header no time
/// axis is possible.
pub fn header_row(first: Option<Vec<String>>) -> Result<Vec<String>, ReadError> {
    let headers = first.ok_or(ReadError::EmptySheet)?;
    if !headers.iter().any(|h| h == TIME_HEADER) {
        return Err(ReadError::MissingTimeColumn);
    }
    Ok(headers)
}

/// Decode the first sheet of the workbook at `path` into a [`RawSheet`].
///
/// The first row defines the header set; every following row becomes a
/// loosely-typed cell vector aligned with those headers.
pub fn read_sheet(path: &Path) -> Result<RawSheet, ReadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ReadError::EmptySheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let headers = header_row(rows.next().map(|r| {
        r.iter()
            .map(|c| match c {
                Data::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }))?;

    Ok(RawSheet {
        headers,
        rows: rows.map(|r| r.iter().map(raw_cell).collect()).collect(),
    })
}

/// Decode and normalize one uploaded file. The dataset name is the file
/// name, which doubles as the series namespace prefix.
pub fn load_dataset(path: &Path) -> Result<Dataset, ReadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let sheet = read_sheet(path)?;
    Ok(normalize_sheet(&name, &sheet))
}
