use crate::error::DatasetError;
use crate::table::SalesTable;
use chrono::{NaiveDate, NaiveDateTime};
use core_types::Record;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// How to read the sales file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// `chrono` formats tried in order for both date columns. A format with
    /// time fields is accepted; the time of day is dropped.
    pub date_formats: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            date_formats: vec!["%Y-%m-%d".to_string(), "%m/%d/%Y".to_string()],
        }
    }
}

/// Opens the file at `path` and parses every row into a `SalesTable`.
///
/// A missing or unreadable file is a `DatasetError::Resource`. The first row
/// that cannot be parsed aborts the load; no partial table is returned.
pub fn load_records(path: &Path, options: &LoadOptions) -> Result<SalesTable, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Resource {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_records(file, options)?;

    let years = table.years();
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        first_year = years.first().copied(),
        last_year = years.last().copied(),
        "Dataset loaded."
    );

    Ok(table)
}

/// Parses delimited sales data from any reader.
pub fn read_records<R: Read>(reader: R, options: &LoadOptions) -> Result<SalesTable, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result?;
        // records() starts after the header; lines are 1-based.
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        let record = columns.parse_row(&row, line, &options.date_formats)?;
        if record.ship_date < record.order_date {
            tracing::debug!(line, order_id = %record.order_id, "Ship date precedes order date.");
        }
        records.push(record);
    }

    Ok(SalesTable::new(records))
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    order_date: usize,
    ship_date: usize,
    sales: usize,
    profit: usize,
    order_id: usize,
    customer_id: usize,
    region: usize,
    category: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let names: Vec<String> = headers.iter().map(normalize_header_name).collect();
        let find = |column: &'static str| {
            names
                .iter()
                .position(|name| name == column)
                .ok_or(DatasetError::MissingColumn(column))
        };

        Ok(Self {
            order_date: find("order_date")?,
            ship_date: find("ship_date")?,
            sales: find("sales")?,
            profit: find("profit")?,
            order_id: find("order_id")?,
            customer_id: find("customer_id")?,
            region: find("region")?,
            category: find("category")?,
        })
    }

    fn parse_row(
        &self,
        row: &StringRecord,
        line: u64,
        date_formats: &[String],
    ) -> Result<Record, DatasetError> {
        let field = |idx: usize| row.get(idx).unwrap_or_default();

        Ok(Record {
            order_date: parse_date(field(self.order_date), date_formats)
                .ok_or_else(|| parse_error(line, "order_date", field(self.order_date)))?,
            ship_date: parse_date(field(self.ship_date), date_formats)
                .ok_or_else(|| parse_error(line, "ship_date", field(self.ship_date)))?,
            sales: parse_amount(field(self.sales))
                .ok_or_else(|| parse_error(line, "sales", field(self.sales)))?,
            profit: parse_amount(field(self.profit))
                .ok_or_else(|| parse_error(line, "profit", field(self.profit)))?,
            order_id: field(self.order_id).to_string(),
            customer_id: field(self.customer_id).to_string(),
            region: field(self.region).to_string(),
            category: field(self.category).to_string(),
        })
    }
}

fn parse_error(line: u64, column: &'static str, value: &str) -> DatasetError {
    DatasetError::Parse {
        line,
        column,
        value: value.to_string(),
    }
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    name.trim()
        .trim_start_matches('\u{feff}')
        .to_ascii_lowercase()
}

/// Tries each format in order; the first that matches wins.
fn parse_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    formats.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .or_else(|_| NaiveDateTime::parse_from_str(value, format).map(|dt| dt.date()))
            .ok()
    })
}

fn parse_amount(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const HEADER: &str = "order_id,order_date,ship_date,customer_id,region,category,sales,profit";

    fn options() -> LoadOptions {
        LoadOptions {
            delimiter: b',',
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%m/%d/%Y".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
            ],
        }
    }

    fn read(body: &str) -> Result<SalesTable, DatasetError> {
        read_records(format!("{HEADER}\n{body}").as_bytes(), &options())
    }

    #[test]
    fn parses_rows_with_mixed_date_formats() {
        let table = read(
            "CA-1,2024-11-08,11/11/2024,CG-1,South,Furniture,261.96,41.9136\n\
             CA-2,2024-06-12 00:00:00,2024-06-16,DV-1,West,Office Supplies,14.62,6.8714\n",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.order_date, NaiveDate::from_ymd_opt(2024, 11, 8).unwrap());
        assert_eq!(first.ship_date, NaiveDate::from_ymd_opt(2024, 11, 11).unwrap());
        assert_eq!(first.sales, dec!(261.96));
        assert_eq!(first.profit, dec!(41.9136));
        assert_eq!(first.region, "South");
        assert_eq!(
            table.records()[1].order_date,
            NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
        );
    }

    #[test]
    fn malformed_date_reports_line_and_column() {
        let err = read(
            "CA-1,2024-11-08,2024-11-11,CG-1,South,Furniture,1,1\n\
             CA-2,yesterday,2024-11-11,CG-1,South,Furniture,1,1\n",
        )
        .unwrap_err();

        match err {
            DatasetError::Parse { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "order_date");
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_amount_is_a_parse_error() {
        let err = read("CA-1,2024-11-08,2024-11-11,CG-1,South,Furniture,n/a,1\n").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { column: "sales", .. }));
    }

    #[test]
    fn scientific_amounts_are_accepted() {
        let table = read("CA-1,2024-11-08,2024-11-11,CG-1,South,Furniture,1.5e3,-2e1\n").unwrap();
        assert_eq!(table.records()[0].sales, dec!(1500));
        assert_eq!(table.records()[0].profit, dec!(-20));
    }

    #[test]
    fn headers_are_matched_loosely_and_extra_columns_ignored() {
        let data = "\u{feff}Row_ID,Order_ID,Order_Date,Ship_Date,Customer_ID,Region,Category,Sales,Profit\n\
                    1,CA-1,2024-01-02,2024-01-05,CG-1,Central,Technology,99.5,10\n";
        let table = read_records(data.as_bytes(), &options()).unwrap();
        assert_eq!(table.records()[0].order_id, "CA-1");
        assert_eq!(table.records()[0].region, "Central");
    }

    #[test]
    fn missing_column_is_reported() {
        let data = "order_id,order_date,ship_date,customer_id,region,sales,profit\n";
        let err = read_records(data.as_bytes(), &options()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("category")));
    }

    #[test]
    fn custom_delimiter() {
        let data = "order_id;order_date;ship_date;customer_id;region;category;sales;profit\n\
                    CA-1;2024-01-02;2024-01-05;CG-1;East;Technology;5;1\n";
        let options = LoadOptions {
            delimiter: b';',
            ..options()
        };
        let table = read_records(data.as_bytes(), &options).unwrap();
        assert_eq!(table.records()[0].region, "East");
    }

    #[test]
    fn missing_file_is_a_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("nope.csv"), &options()).unwrap_err();
        assert!(matches!(err, DatasetError::Resource { .. }));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "CA-1,2023-02-01,2023-02-03,CG-1,West,Technology,10,2").unwrap();
        writeln!(file, "CA-2,2024-02-01,2024-02-03,CG-2,East,Technology,20,4").unwrap();

        let table = load_records(file.path(), &options()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.latest_year(), Some(2024));
    }
}
