// src/output.rs

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::process::Record;

/// One output row. Field order is the column order of the file; the
/// leading index column has an empty header name.
#[derive(Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "")]
    row: usize,
    #[serde(rename = "First Name")]
    first_name: &'a str,
    #[serde(rename = "Last Name")]
    last_name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Full Name")]
    full_name: &'a str,
    #[serde(rename = "First Initial")]
    first_initial: &'a str,
    #[serde(rename = "LN FI")]
    last_initial_key: &'a str,
    #[serde(rename = "Possible")]
    possible: &'a str,
}

/// Serialize the cleaned table to `path`.
///
/// Pure serialization; the index column carries each record's original
/// input ordinal, so surviving rows keep non-contiguous indices after
/// dedup. `Possible` is written as the literal `True` or `False`.
pub fn write_results<P: AsRef<Path>>(path: P, table: &[Record]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create output CSV {:?}", path.as_ref()))?;

    for r in table {
        wtr.serialize(OutputRow {
            row: r.row,
            first_name: &r.first_name,
            last_name: &r.last_name,
            email: &r.email,
            full_name: &r.full_name,
            first_initial: &r.first_initial,
            last_initial_key: &r.last_initial_key,
            possible: if r.possible_duplicate { "True" } else { "False" },
        })
        .with_context(|| format!("writing output row {}", r.row))?;
    }

    wtr.flush().context("flushing output CSV")?;
    info!(rows = table.len(), path = %path.as_ref().display(), "wrote results");
    Ok(())
}
