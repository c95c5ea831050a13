//! Order history loading
//!
//! Reads a store's order CSV into typed records and derives the
//! calendar month used as a model feature. Columns beyond
//! `Order Date`, `Category`, and `Supplier` are ignored.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::errors::{CoreError, Result};

/// Date formats accepted for the `Order Date` column.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// A single historical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRecord {
    pub order_date: NaiveDate,
    pub category: String,
    pub supplier: String,
}

impl OrderRecord {
    /// Calendar month of the order, 1 through 12.
    pub fn month(&self) -> u32 {
        self.order_date.month()
    }
}

/// Raw CSV row before date parsing.
#[derive(Debug, Deserialize)]
struct RawOrderRow {
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Supplier")]
    supplier: String,
}

/// Load order records from a headered CSV file.
pub fn load_orders<P: AsRef<Path>>(path: P) -> Result<Vec<OrderRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    load_orders_from_reader(file)
}

/// Load order records from any CSV reader.
pub fn load_orders_from_reader<R: Read>(reader: R) -> Result<Vec<OrderRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize().enumerate() {
        let raw: RawOrderRow = row?;
        // Header is line 1, the first data row is line 2.
        let line = idx + 2;
        let order_date =
            parse_order_date(&raw.order_date).ok_or_else(|| CoreError::InvalidDate {
                row: line,
                value: raw.order_date.clone(),
            })?;

        records.push(OrderRecord {
            order_date,
            category: raw.category,
            supplier: raw.supplier,
        });
    }

    tracing::debug!("loaded {} order records", records.len());
    Ok(records)
}

fn parse_order_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(rows: &[&str]) -> std::io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Order ID,Order Date,Category,Supplier,Quantity")?;
        for row in rows {
            writeln!(file, "{row}")?;
        }
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_orders() -> Result<()> {
        let file = create_test_csv(&[
            "1,2024-01-15,Food,SupplierA,3",
            "2,2024-07-02,Toys,SupplierB,1",
        ])
        .map_err(CoreError::Io)?;

        let records = load_orders(file.path())?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "Food");
        assert_eq!(records[0].supplier, "SupplierA");
        assert_eq!(records[0].month(), 1);
        assert_eq!(records[1].month(), 7);

        Ok(())
    }

    #[test]
    fn test_alternate_date_formats() -> Result<()> {
        let file = create_test_csv(&[
            "1,2024/03/09,Food,SupplierA,1",
            "2,03/09/2024,Food,SupplierA,1",
            "3,09-03-2024,Food,SupplierA,1",
        ])
        .map_err(CoreError::Io)?;

        let records = load_orders(file.path())?;

        assert_eq!(records[0].month(), 3);
        assert_eq!(records[1].month(), 3);
        assert_eq!(records[2].month(), 3);

        Ok(())
    }

    #[test]
    fn test_invalid_date_is_fatal() -> std::io::Result<()> {
        let file = create_test_csv(&[
            "1,2024-01-15,Food,SupplierA,3",
            "2,not-a-date,Food,SupplierA,3",
        ])?;

        let err = load_orders(file.path()).unwrap_err();
        match err {
            CoreError::InvalidDate { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_orders("/nonexistent/orders.csv").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_header_only_file_yields_no_records() -> Result<()> {
        let file = create_test_csv(&[]).map_err(CoreError::Io)?;
        let records = load_orders(file.path())?;
        assert!(records.is_empty());
        Ok(())
    }
}
