//! # bidstore-ingest
//!
//! Turns a delimited export file into in-memory [`Bid`] records. The
//! stores never touch files; this crate is the ingestion collaborator
//! that feeds them.
//!
//! The default [`CsvLayout`] matches the municipal eBid monthly-sales
//! export, where the interesting columns sit at fixed positions in a
//! wide header row. Rows missing a mapped column are skipped with a
//! warning rather than failing the whole load.

use std::path::Path;

use bidstore_core::Bid;
use tracing::warn;

/// Column positions of the bid fields within a CSV row.
///
/// Defaults to the eBid monthly-sales export: title first, id second,
/// winning amount in column 4, fund in column 8.
#[derive(Debug, Clone)]
pub struct CsvLayout {
    /// Zero-based column of the unique bid id.
    pub id: usize,
    /// Zero-based column of the title.
    pub title: usize,
    /// Zero-based column of the fund.
    pub fund: usize,
    /// Zero-based column of the winning amount (currency-formatted).
    pub amount: usize,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            id: 1,
            title: 0,
            fund: 8,
            amount: 4,
        }
    }
}

/// Errors raised while reading a bid export.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("failed to read bid export: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not parseable as CSV.
    #[error("failed to parse bid export: {0}")]
    Csv(#[from] csv::Error),
}

/// Load bids from a headered CSV file using the default [`CsvLayout`].
pub fn load_bids(path: impl AsRef<Path>) -> Result<Vec<Bid>, IngestError> {
    load_bids_with_layout(path, &CsvLayout::default())
}

/// Load bids from a headered CSV file with an explicit column layout.
///
/// Rows that lack one of the mapped columns, or whose id column is
/// empty, are skipped with a `tracing` warning. An unparsable amount
/// is not a skip: it defaults to `0.0`.
pub fn load_bids_with_layout(
    path: impl AsRef<Path>,
    layout: &CsvLayout,
) -> Result<Vec<Bid>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut bids = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        match extract_bid(&record, layout) {
            Some(bid) => bids.push(bid),
            None => warn!(row, "skipping row without a usable bid"),
        }
    }
    Ok(bids)
}

/// Pull one bid out of a raw CSV record, or `None` if a mapped column
/// is missing or the id is empty.
fn extract_bid(record: &csv::StringRecord, layout: &CsvLayout) -> Option<Bid> {
    let id = record.get(layout.id)?.trim();
    if id.is_empty() {
        return None;
    }
    let title = record.get(layout.title)?;
    let fund = record.get(layout.fund)?;
    let amount = parse_money(record.get(layout.amount)?);
    Some(Bid::new(id, title, fund, amount))
}

/// Parse a currency-formatted amount, stripping the `$` symbol and
/// thousands separators. Unparsable input defaults to `0.0`.
pub fn parse_money(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Header and column positions mirror the eBid export shape.
    const HEADER: &str = "Title,ArticleID,Department,CloseDate,WinningBid,CC,Fee,Paid,Fund";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp csv");
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn loads_bids_from_the_default_layout() {
        let file = write_csv(&[
            "Office Chairs,98109,D,2016-12-10,$74.50,n,5.0,y,Enterprise",
            "\"Desks, Surplus\",98110,D,2016-12-11,\"$1,200.00\",n,5.0,y,General Fund",
        ]);

        let bids = load_bids(file.path()).unwrap();
        assert_eq!(bids.len(), 2);

        assert_eq!(bids[0].id(), "98109");
        assert_eq!(bids[0].title, "Office Chairs");
        assert_eq!(bids[0].fund, "Enterprise");
        assert_eq!(bids[0].amount, 74.5);

        // Quoted comma in the title, thousands separator in the amount.
        assert_eq!(bids[1].title, "Desks, Surplus");
        assert_eq!(bids[1].amount, 1200.0);
    }

    #[test]
    fn short_and_idless_rows_are_skipped() {
        let file = write_csv(&[
            "Truncated,98111",
            "No Id,,D,2016-12-10,$10.00,n,5.0,y,General Fund",
            "Kept,98112,D,2016-12-10,$10.00,n,5.0,y,General Fund",
        ]);

        let bids = load_bids(file.path()).unwrap();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].id(), "98112");
    }

    #[test]
    fn custom_layout_remaps_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,title,amount,fund").unwrap();
        writeln!(file, "7,Mowers,$19.99,Parks").unwrap();

        let layout = CsvLayout {
            id: 0,
            title: 1,
            amount: 2,
            fund: 3,
        };
        let bids = load_bids_with_layout(file.path(), &layout).unwrap();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].id(), "7");
        assert_eq!(bids[0].fund, "Parks");
        assert_eq!(bids[0].amount, 19.99);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_bids("/definitely/not/here.csv").is_err());
    }

    #[test]
    fn parse_money_handles_currency_formatting() {
        assert_eq!(parse_money("$74.50"), 74.5);
        assert_eq!(parse_money("$4,500.00"), 4500.0);
        assert_eq!(parse_money(" 12.25 "), 12.25);
        assert_eq!(parse_money("129"), 129.0);
    }

    #[test]
    fn parse_money_defaults_unparsable_input_to_zero() {
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("free"), 0.0);
        assert_eq!(parse_money("$"), 0.0);
    }
}
