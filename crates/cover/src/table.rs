use std::cmp::Ordering;
use std::path::Path;

use itertools::Itertools;

use crate::{Error, Result};

/// Column name of the predicted urban occupancy.
pub const URBAN_COLUMN: &str = "Urban";

const YEAR_COLUMN: &str = "Year";

/// Per-year land-cover coverage percentages.
/// One row per simulated year, one value column per land-cover class plus the
/// urban column. Columns are independent aggregates over the same grid, rows
/// are not guaranteed to sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageTable {
    years: Vec<i32>,
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl CoverageTable {
    pub fn new(years: Vec<i32>, columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if years.len() != rows.len() {
            return Err(Error::InvalidArgument(format!(
                "Coverage row count mismatch: {} years <-> {} rows",
                years.len(),
                rows.len()
            )));
        }

        if rows.iter().any(|row| row.len() != columns.len()) {
            return Err(Error::InvalidArgument("Ragged coverage rows".into()));
        }

        Ok(CoverageTable { years, columns, rows })
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn column_values(&self, name: &str) -> Option<Vec<f64>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// The value for a calendar year and column name.
    pub fn value(&self, year: i32, column: &str) -> Option<f64> {
        let row = self.years.iter().position(|&y| y == year)?;
        let column = self.column_index(column)?;
        Some(self.rows[row][column])
    }

    /// Column ordering for stacked-area charts: all-zero columns are dropped,
    /// the remainder is ordered by first-row value descending and the urban
    /// column is moved to the front when it survived the zero filter.
    pub fn stacked_column_order(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let mut names: Vec<String> = (0..self.columns.len())
            .filter(|&index| self.rows.iter().any(|row| row[index] != 0.0))
            .sorted_by(|&a, &b| self.rows[0][b].partial_cmp(&self.rows[0][a]).unwrap_or(Ordering::Equal))
            .map(|index| self.columns[index].clone())
            .collect();

        if let Some(position) = names.iter().position(|name| name == URBAN_COLUMN) {
            let urban = names.remove(position);
            names.insert(0, urban);
        }

        names
    }

    /// Persist the table as a CSV artifact, creating parent directories as needed.
    pub fn write_csv(&self, path: &Path) -> Result {
        grid::fs::create_directory_for_file(path)?;

        let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push(YEAR_COLUMN.to_string());
        header.extend(self.columns.iter().cloned());
        writer.write_record(&header).map_err(csv_error)?;

        for (year, row) in self.years.iter().zip(self.rows.iter()) {
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(year.to_string());
            record.extend(row.iter().map(f64::to_string));
            writer.write_record(&record).map_err(csv_error)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Load a table from a CSV artifact written by [`CoverageTable::write_csv`].
    pub fn read_csv(path: &Path) -> Result<CoverageTable> {
        let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;

        let headers = reader.headers().map_err(csv_error)?.clone();
        if headers.is_empty() || &headers[0] != YEAR_COLUMN {
            return Err(Error::InvalidArgument(format!(
                "Coverage artifact is missing the year column: {}",
                path.display()
            )));
        }

        let columns: Vec<String> = headers.iter().skip(1).map(String::from).collect();
        let mut years = Vec::new();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            years.push(record[0].parse::<i32>()?);
            rows.push(
                record
                    .iter()
                    .skip(1)
                    .map(str::parse::<f64>)
                    .collect::<std::result::Result<Vec<f64>, _>>()?,
            );
        }

        CoverageTable::new(years, columns, rows)
    }
}

fn csv_error(err: csv::Error) -> Error {
    Error::Runtime(format!("CSV error: {err}"))
}
