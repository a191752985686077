/// Spreadsheet history adapter.
///
/// The historical log lives in an external spreadsheet published as a CSV
/// export URL. This module fetches that export with a bounded timeout and
/// parses it into a `HistorySnapshot`: a read-only table whose column
/// labels have been normalized (trimmed, lower-cased) so the engine can
/// address them by canonical parameter name.
///
/// Failures here are never fatal — callers substitute
/// `HistorySnapshot::empty()` and every forecast degrades to
/// "insufficient history".

use std::collections::HashMap;
use std::time::Duration;

use crate::model::SnapshotError;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Canonicalizes a raw column label: trim surrounding whitespace and
/// lower-case. No aliasing or renaming — a column is either already one of
/// the canonical names after this, or it is carried through uninterpreted.
/// Idempotent: normalizing an already-normalized label is a no-op.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// HistorySnapshot
// ---------------------------------------------------------------------------

/// A read-only snapshot of the historical log.
///
/// Row order is chronological: row index `i` is the `i`-th observation.
/// Cells that are blank or non-numeric are `None` — absent data, never
/// zero. Unrecognized columns are preserved inertly alongside the
/// recognized ones.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    row_count: usize,
    columns: HashMap<String, Vec<Option<f64>>>,
}

impl HistorySnapshot {
    /// The zero-history snapshot, used whenever the real one is
    /// unavailable.
    pub fn empty() -> Self {
        HistorySnapshot {
            row_count: 0,
            columns: HashMap::new(),
        }
    }

    /// Builds a snapshot from normalized label / column pairs. Columns are
    /// padded with `None` to the length of the longest column so every row
    /// index is addressable in every column.
    pub fn from_columns(pairs: Vec<(String, Vec<Option<f64>>)>) -> Self {
        let row_count = pairs.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        let mut columns = HashMap::new();
        for (label, mut values) in pairs {
            values.resize(row_count, None);
            columns.insert(label, values);
        }
        HistorySnapshot { row_count, columns }
    }

    /// Number of chronological rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// The cells of a column by normalized label, oldest first.
    /// `None` if the column is absent entirely.
    pub fn column(&self, label: &str) -> Option<&[Option<f64>]> {
        self.columns.get(label).map(|v| v.as_slice())
    }

    pub fn has_column(&self, label: &str) -> bool {
        self.columns.contains_key(label)
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parses a CSV document into a `HistorySnapshot`.
///
/// The first line is the header; labels are normalized with
/// `normalize_label`. Data cells are parsed individually: anything that is
/// not a finite number becomes `None`. Rows shorter than the header are
/// padded; cells beyond the header are dropped. A header-only document
/// yields a valid zero-row snapshot.
///
/// `Malformed` is returned only when the body is not tabular at all: an
/// empty document, or an HTML error page (a wrong or revoked export URL
/// answers with HTML, not CSV).
pub fn parse_history_csv(text: &str) -> Result<HistorySnapshot, SnapshotError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SnapshotError::Malformed("empty document".to_string()));
    }
    if trimmed.starts_with('<') {
        return Err(SnapshotError::Malformed(
            "response is HTML, not CSV (check the export URL)".to_string(),
        ));
    }

    let mut lines = trimmed.lines();
    let header_line = lines.next().unwrap_or_default();
    let labels: Vec<String> = header_line.split(',').map(normalize_label).collect();

    let mut columns: Vec<(String, Vec<Option<f64>>)> =
        labels.iter().map(|l| (l.clone(), Vec::new())).collect();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').collect();
        for (i, (_, values)) in columns.iter_mut().enumerate() {
            values.push(cells.get(i).copied().and_then(parse_cell));
        }
    }

    Ok(HistorySnapshot::from_columns(columns))
}

/// Parses one cell. Blank cells, sentinels like "null"/"nan", and
/// non-numeric text all read as absent data.
fn parse_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Sheet client
// ---------------------------------------------------------------------------

/// HTTP adapter for the spreadsheet CSV export.
///
/// The export URL is injected at construction, never read from a global,
/// so tests drive the parser directly on CSV text instead of the network.
pub struct SheetClient {
    client: reqwest::blocking::Client,
    csv_url: String,
    timeout: Duration,
}

impl SheetClient {
    pub fn new(csv_url: String, timeout: Duration) -> Self {
        SheetClient {
            client: reqwest::blocking::Client::new(),
            csv_url,
            timeout,
        }
    }

    /// Fetches and parses the current historical snapshot.
    ///
    /// Any failure maps to a `SnapshotError`; the caller degrades to
    /// `HistorySnapshot::empty()` rather than propagating.
    pub fn fetch_history(&self) -> Result<HistorySnapshot, SnapshotError> {
        let response = self
            .client
            .get(&self.csv_url)
            .timeout(self.timeout)
            .send()
            .map_err(|e| SnapshotError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SnapshotError::Http(response.status().as_u16()));
        }

        let text = response
            .text()
            .map_err(|e| SnapshotError::Transport(e.to_string()))?;

        parse_history_csv(&text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- normalize_label ----------------------------------------------------

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_label("  pH "), "ph");
        assert_eq!(normalize_label("TDS"), "tds");
        assert_eq!(normalize_label("Turbidity\t"), "turbidity");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  pH ", "TDS", "turbidity", "Temperature (°C)"] {
            let once = normalize_label(raw);
            assert_eq!(
                normalize_label(&once),
                once,
                "normalizing '{}' twice should equal normalizing once",
                raw
            );
        }
    }

    #[test]
    fn test_normalize_does_not_alias() {
        // "turb" stays "turb" — alias mapping is the transport's concern,
        // not the normalizer's.
        assert_eq!(normalize_label(" Turb "), "turb");
    }

    // --- parse_history_csv --------------------------------------------------

    #[test]
    fn test_parse_basic_document() {
        let csv = "pH,TDS,Turbidity,Temperature\n7.0,250,2.0,25.0\n7.1,260,2.1,25.1\n";
        let snapshot = parse_history_csv(csv).expect("well-formed CSV should parse");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.column("ph"),
            Some([Some(7.0), Some(7.1)].as_slice())
        );
        assert_eq!(
            snapshot.column("tds"),
            Some([Some(250.0), Some(260.0)].as_slice())
        );
    }

    #[test]
    fn test_extra_columns_pass_through_inertly() {
        let csv = "ph,tds,Operator Notes\n7.0,250,looks fine\n";
        let snapshot = parse_history_csv(csv).expect("extra columns should not fail parsing");
        assert!(snapshot.has_column("operator notes"));
        // Non-numeric cells in the extra column read as absent, not zero.
        assert_eq!(snapshot.column("operator notes"), Some([None].as_slice()));
        assert_eq!(snapshot.column("ph"), Some([Some(7.0)].as_slice()));
    }

    #[test]
    fn test_blank_and_garbage_cells_are_absent_not_zero() {
        let csv = "ph,tds\n7.0,\n,abc\n6.9,300\n";
        let snapshot = parse_history_csv(csv).expect("should parse");
        assert_eq!(snapshot.len(), 3);
        assert_eq!(
            snapshot.column("tds"),
            Some([None, None, Some(300.0)].as_slice())
        );
        assert_eq!(
            snapshot.column("ph"),
            Some([Some(7.0), None, Some(6.9)].as_slice())
        );
    }

    #[test]
    fn test_short_rows_are_padded_with_absent_cells() {
        let csv = "ph,tds,turbidity\n7.0,250\n";
        let snapshot = parse_history_csv(csv).expect("short rows should parse");
        assert_eq!(snapshot.column("turbidity"), Some([None].as_slice()));
    }

    #[test]
    fn test_header_only_document_is_zero_history() {
        let csv = "ph,tds,turbidity,temperature\n";
        let snapshot = parse_history_csv(csv).expect("header-only CSV should parse");
        assert!(snapshot.is_empty());
        assert!(snapshot.has_column("ph"));
    }

    #[test]
    fn test_empty_document_is_malformed() {
        let result = parse_history_csv("");
        assert!(
            matches!(result, Err(SnapshotError::Malformed(_))),
            "empty document should be Malformed, got {:?}",
            result
        );
    }

    #[test]
    fn test_html_error_page_is_malformed() {
        let result = parse_history_csv("<html><body>Moved</body></html>");
        assert!(
            matches!(result, Err(SnapshotError::Malformed(_))),
            "HTML body should be Malformed, got {:?}",
            result
        );
    }

    #[test]
    fn test_missing_column_reports_absent() {
        let csv = "ph,tds\n7.0,250\n7.1,260\n7.2,270\n";
        let snapshot = parse_history_csv(csv).expect("should parse");
        assert!(!snapshot.has_column("turbidity"));
        assert_eq!(snapshot.column("turbidity"), None);
    }

    // --- network (ignored) --------------------------------------------------

    #[test]
    #[ignore] // Don't run in CI - depends on a live export URL in AQUAMON_CSV_URL
    fn sheet_export_returns_parseable_csv() {
        let url = std::env::var(crate::config::ENV_CSV_URL)
            .expect("set AQUAMON_CSV_URL to run this test");
        let client = SheetClient::new(url, Duration::from_secs(10));
        let snapshot = client.fetch_history().expect("live export should parse");
        assert!(snapshot.has_column("ph") || snapshot.is_empty());
    }
}
