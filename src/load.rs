// src/load.rs

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::info;

use crate::process::{Record, Table};

pub const FIRST_NAME_COLUMN: &str = "First Name";
pub const LAST_NAME_COLUMN: &str = "Last Name";
pub const EMAIL_COLUMN: &str = "Email";

/// Read the registrant CSV at `path` into an in-memory table.
///
/// The header must contain the `First Name`, `Last Name` and `Email`
/// columns, matched exactly (case-sensitive). Extra columns are ignored.
/// Rows shorter than the header read as empty strings for the missing
/// fields. Each record remembers its 0-based position in the file.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_registrants<P: AsRef<Path>>(path: P) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("failed to open input CSV {:?}", path.as_ref()))?;

    let headers = rdr.headers().context("reading CSV header")?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let required = [FIRST_NAME_COLUMN, LAST_NAME_COLUMN, EMAIL_COLUMN];
    let missing: Vec<&str> = required
        .iter()
        .filter(|name| column(name).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        bail!("input is missing required column(s): {}", missing.join(", "));
    }
    let first_idx = column(FIRST_NAME_COLUMN).expect("column checked");
    let last_idx = column(LAST_NAME_COLUMN).expect("column checked");
    let email_idx = column(EMAIL_COLUMN).expect("column checked");

    let mut table = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error at record {}", row))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        table.push(Record::new(
            row,
            field(first_idx),
            field(last_idx),
            field(email_idx),
        ));
    }

    info!(rows = table.len(), "loaded registrants");
    Ok(table)
}
