//! CSV ingestion
//!
//! Parses an uploaded price CSV into a chronologically sorted series of raw
//! bars. The whole file is parsed or the upload fails; there is no partial
//! output.

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::debug;

use crate::constants::{DATE_FORMATS, REQUIRED_COLUMNS};
use crate::error::{AppError, Result};
use crate::models::PriceBar;

/// Resolved positions of the required columns in this file's header
struct ColumnIndex {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    adj_close: usize,
    volume: usize,
}

impl ColumnIndex {
    /// Locate required columns by header name (trimmed, case-insensitive)
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| AppError::Schema(format!("missing required column: {}", name)))
        };

        Ok(Self {
            date: find(REQUIRED_COLUMNS[0])?,
            open: find(REQUIRED_COLUMNS[1])?,
            high: find(REQUIRED_COLUMNS[2])?,
            low: find(REQUIRED_COLUMNS[3])?,
            close: find(REQUIRED_COLUMNS[4])?,
            adj_close: find(REQUIRED_COLUMNS[5])?,
            volume: find(REQUIRED_COLUMNS[6])?,
        })
    }
}

/// Parse raw CSV bytes into price bars sorted ascending by date
///
/// The `Date` column may mix formats row to row; each value is tried against
/// [`DATE_FORMATS`] independently. The sort is stable, so rows sharing a date
/// keep their input order.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<PriceBar>> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| AppError::Schema(format!("unreadable header row: {}", e)))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut bars = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1; // 1-based data row, header excluded
        let record = result.map_err(|e| AppError::Parse {
            row,
            message: format!("malformed record: {}", e),
        })?;

        bars.push(parse_record(&record, &columns, row)?);
    }

    // Stable sort keeps input order for equal dates
    bars.sort_by_key(|bar| bar.date);

    debug!(rows = bars.len(), "parsed price CSV");
    Ok(bars)
}

/// Parse a single data record into a bar
fn parse_record(record: &StringRecord, columns: &ColumnIndex, row: usize) -> Result<PriceBar> {
    let date = parse_date(cell(record, columns.date, "Date", row)?, row)?;
    let open = parse_price(cell(record, columns.open, "Open", row)?, "Open", row)?;
    let high = parse_price(cell(record, columns.high, "High", row)?, "High", row)?;
    let low = parse_price(cell(record, columns.low, "Low", row)?, "Low", row)?;
    let close = parse_price(cell(record, columns.close, "Close", row)?, "Close", row)?;
    let adj_close = parse_price(cell(record, columns.adj_close, "Adj Close", row)?, "Adj Close", row)?;
    let volume_text = cell(record, columns.volume, "Volume", row)?;
    let volume = volume_text.parse::<u64>().map_err(|_| AppError::Parse {
        row,
        message: format!("invalid value for column 'Volume': '{}'", volume_text),
    })?;

    Ok(PriceBar::new(date, open, high, low, close, adj_close, volume))
}

/// Fetch one trimmed cell, failing if the record is too short
fn cell<'r>(record: &'r StringRecord, index: usize, name: &str, row: usize) -> Result<&'r str> {
    record.get(index).map(str::trim).ok_or_else(|| AppError::Parse {
        row,
        message: format!("missing value for column '{}'", name),
    })
}

/// Parse one date value, trying each accepted format in order
fn parse_date(value: &str, row: usize) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| AppError::Parse {
            row,
            message: format!("unrecognized date '{}'", value),
        })
}

fn parse_price(value: &str, column: &str, row: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|_| AppError::Parse {
        row,
        message: format!("invalid value for column '{}': '{}'", column, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Date,Open,High,Low,Close,Adj Close,Volume\n";

    fn csv_bytes(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text.into_bytes()
    }

    #[test]
    fn test_parse_basic_file() {
        let bytes = csv_bytes(&[
            "2024-01-02,10,11,9,10.5,10.5,1000",
            "2024-01-03,10.5,12,10,11,11,2000",
        ]);
        let bars = parse_csv(&bytes).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(bars[0].adj_close, 10.5);
        assert_eq!(bars[1].volume, 2000);
    }

    #[test]
    fn test_parse_mixed_date_formats() {
        let bytes = csv_bytes(&[
            "2024-01-02,10,11,9,10.5,10.5,1000",
            "01/03/2024,10.5,12,10,11,11,2000",
            "04-Jan-2024,11,12,10,11.5,11.5,1500",
        ]);
        let bars = parse_csv(&bytes).unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(bars[2].date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_rows_sorted_by_date() {
        let bytes = csv_bytes(&[
            "2024-01-05,1,1,1,1,1,10",
            "2024-01-02,2,2,2,2,2,20",
            "2024-01-03,3,3,3,3,3,30",
        ]);
        let bars = parse_csv(&bytes).unwrap();
        let dates: Vec<_> = bars.iter().map(|b| b.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let bytes = csv_bytes(&[
            "2024-01-03,9,9,9,9,9,99",
            "2024-01-02,1,1,1,1,1,10",
            "2024-01-02,2,2,2,2,2,20",
        ]);
        let bars = parse_csv(&bytes).unwrap();
        assert_eq!(bars[0].volume, 10);
        assert_eq!(bars[1].volume, 20);
        assert_eq!(bars[2].volume, 99);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let text = "Date,Open,High,Low,Close,Volume\n2024-01-02,1,1,1,1,10\n";
        let err = parse_csv(text.as_bytes()).unwrap_err();
        match err {
            AppError::Schema(message) => assert!(message.contains("Adj Close")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_identifies_row() {
        let bytes = csv_bytes(&[
            "2024-01-02,1,1,1,1,1,10",
            "not-a-date,2,2,2,2,2,20",
        ]);
        let err = parse_csv(&bytes).unwrap_err();
        match err {
            AppError::Parse { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("not-a-date"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_number_identifies_row_and_column() {
        let bytes = csv_bytes(&["2024-01-02,1,1,1,oops,1,10"]);
        let err = parse_csv(&bytes).unwrap_err();
        match err {
            AppError::Parse { row, message } => {
                assert_eq!(row, 1);
                assert!(message.contains("Close"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let text = "date,open,high,low,close,adj close,volume\n2024-01-02,1,1,1,1,1,10\n";
        let bars = parse_csv(text.as_bytes()).unwrap();
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let text = "Symbol,Date,Open,High,Low,Close,Adj Close,Volume\nAAPL,2024-01-02,1,1,1,1,1,10\n";
        let bars = parse_csv(text.as_bytes()).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].volume, 10);
    }

    #[test]
    fn test_empty_file_yields_no_bars() {
        let bars = parse_csv(HEADER.as_bytes()).unwrap();
        assert!(bars.is_empty());
    }
}
