//! CSV codec for the sales history file.
//!
//! On-disk columns: `Tarih` (date), `Urun_Adi` (product name) and
//! `Satis_Adedi` (units sold). Extra columns are ignored. Rows are not
//! validated beyond parsing: a row that fails to parse fails the whole load.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::table::SalesTable;
use crate::domain::SalesRecord;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: unrecognized date '{value}' (expected YYYY-MM-DD, YYYY/MM/DD, MM/DD/YYYY or DD.MM.YYYY)")]
    InvalidDate { row: usize, value: String },

    #[error("write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Tarih")]
    date: String,
    #[serde(rename = "Urun_Adi")]
    product_name: String,
    #[serde(rename = "Satis_Adedi")]
    units_sold: u64,
}

#[derive(Debug, Serialize)]
struct OutRow<'a> {
    #[serde(rename = "Tarih")]
    date: NaiveDate,
    #[serde(rename = "Urun_Adi")]
    product_name: &'a str,
    #[serde(rename = "Satis_Adedi")]
    units_sold: u64,
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a calendar date. Date-times are accepted and truncated to their date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse sales records from CSV with a header row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<SalesRecord>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
        let row = row?;
        // Line 1 is the header.
        let date = parse_date(&row.date).ok_or_else(|| DataError::InvalidDate {
            row: i + 2,
            value: row.date.clone(),
        })?;
        records.push(SalesRecord {
            date,
            product_name: row.product_name,
            units_sold: row.units_sold,
        });
    }
    Ok(records)
}

/// Load the sales history at `path`.
///
/// A missing file is not an error: it yields `Ok(None)` so the caller can
/// halt with an instructional message instead of a failure.
pub fn load_dataset(path: &Path) -> Result<Option<SalesTable>, DataError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "sales dataset not found");
            return Ok(None);
        }
        Err(source) => {
            return Err(DataError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let records = read_records(file)?;
    let table = SalesTable::new(records);
    info!(
        path = %path.display(),
        rows = table.len(),
        products = table.products().len(),
        "loaded sales dataset"
    );
    Ok(Some(table))
}

/// Write records in the on-disk CSV format.
///
/// Writes are atomic: write to .tmp then rename.
pub fn write_dataset(path: &Path, records: &[SalesRecord]) -> Result<(), DataError> {
    let write_err = |reason: String| DataError::WriteFailed {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_err(format!("create dir: {e}")))?;
    }

    let tmp_path = path.with_extension("csv.tmp");
    {
        let mut wtr = csv::Writer::from_path(&tmp_path)?;
        for r in records {
            wtr.serialize(OutRow {
                date: r.date,
                product_name: &r.product_name,
                units_sold: r.units_sold,
            })?;
        }
        wtr.flush().map_err(|e| write_err(format!("flush: {e}")))?;
    }
    fs::rename(&tmp_path, path).map_err(|e| write_err(format!("rename: {e}")))?;

    debug!(path = %path.display(), rows = records.len(), "wrote sales dataset");
    Ok(())
}
