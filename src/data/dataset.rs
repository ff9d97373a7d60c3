//! Dataset types and row normalization for decoded spreadsheet sheets.
//!
//! The spreadsheet decoder hands us a loosely-typed [`RawSheet`]; this module
//! turns it into a typed [`Dataset`]: one `Temps` value plus a column→value
//! map per row, with locale decimal-comma normalization applied.

use std::collections::HashMap;

/// Header carrying the time axis in the source exports.
pub const TIME_HEADER: &str = "Heure programme";

/// Bookkeeping headers that are never chart data.
pub const EXCLUDED_HEADERS: [&str; 2] = ["Numéro de mesure", TIME_HEADER];

/// One cell as produced by the spreadsheet decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Number(f64),
    Text(String),
}

/// One decoded sheet: header row plus loosely-typed data rows.
///
/// `rows[i][j]` is the cell under `headers[j]`; short rows are allowed and
/// treated as trailing empty cells.
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

/// One normalized data row: the time value plus values for the columns that
/// were populated in the source. Absent columns stay absent, never 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    pub time: f64,
    pub values: HashMap<String, f64>,
}

/// One uploaded file's normalized content. Immutable once created; owned by
/// the session state.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// File name; unique key and the namespace prefix for series keys.
    pub name: String,
    /// Data columns in original sheet order (bookkeeping headers excluded).
    pub columns: Vec<String>,
    pub rows: Vec<DataRow>,
}

impl Dataset {
    /// Namespaced series key for one of this dataset's columns.
    pub fn key(&self, column: &str) -> String {
        namespaced_key(&self.name, column)
    }

    /// All of this dataset's namespaced series keys, in column order.
    pub fn keys(&self) -> Vec<String> {
        self.columns.iter().map(|c| self.key(c)).collect()
    }
}

/// Build the unique identifier for one displayable series.
pub fn namespaced_key(dataset: &str, column: &str) -> String {
    format!("{dataset}__{column}")
}

/// Parse a cell as a number, accepting a decimal comma in text cells.
///
/// Returns `None` for empty cells, unparsable text and non-finite results.
pub fn parse_cell(cell: &RawCell) -> Option<f64> {
    let v = match cell {
        RawCell::Empty => return None,
        RawCell::Number(n) => *n,
        RawCell::Text(s) => s.trim().replace(',', ".").parse::<f64>().ok()?,
    };
    v.is_finite().then_some(v)
}

/// Normalize one decoded sheet into a [`Dataset`].
///
/// The column set is the header row minus [`EXCLUDED_HEADERS`], in original
/// order. The time value comes from the `"Heure programme"` header. A row
/// whose time cell is missing or does not normalize to a finite number is
/// dropped (with a warning); a data cell that does not normalize stays
/// absent for that row. Zero data rows yield an empty dataset.
pub fn normalize_sheet(name: &str, sheet: &RawSheet) -> Dataset {
    let time_idx = sheet.headers.iter().position(|h| h == TIME_HEADER);

    let columns: Vec<String> = sheet
        .headers
        .iter()
        .filter(|h| !EXCLUDED_HEADERS.contains(&h.as_str()))
        .cloned()
        .collect();

    let mut rows: Vec<DataRow> = Vec::with_capacity(sheet.rows.len());
    let mut dropped = 0usize;
    for raw in &sheet.rows {
        let time = time_idx
            .and_then(|i| raw.get(i))
            .and_then(parse_cell);
        let Some(time) = time else {
            dropped += 1;
            continue;
        };
        let mut values = HashMap::new();
        for (i, header) in sheet.headers.iter().enumerate() {
            if EXCLUDED_HEADERS.contains(&header.as_str()) {
                continue;
            }
            if let Some(v) = raw.get(i).and_then(parse_cell) {
                values.insert(header.clone(), v);
            }
        }
        rows.push(DataRow { time, values });
    }

    if dropped > 0 {
        log::warn!("{name}: dropped {dropped} row(s) without a usable time value");
    }

    Dataset {
        name: name.to_string(),
        columns,
        rows,
    }
}
