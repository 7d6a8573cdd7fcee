use std::collections::HashSet;

use tracing::debug;

use crate::process::{Record, Table};

/// Keep the first record per key in input order, drop the rest. A
/// forward scan over the table, so relative order of survivors is
/// untouched.
fn first_seen_wins<F>(table: Table, key: F) -> Table
where
    F: Fn(&Record) -> &str,
{
    let mut seen: HashSet<String> = HashSet::with_capacity(table.len());
    table
        .into_iter()
        .filter(|r| seen.insert(key(r).to_string()))
        .collect()
}

/// Drop exact duplicates: first by normalized email, then by normalized
/// full name over what the email pass left behind.
///
/// The two criteria are applied one at a time rather than as a combined
/// key: a shared email and a shared full name each independently signal
/// the same registration. Earlier records are assumed canonical; there
/// is no recency or quality tie-break.
pub fn dedup(table: Table) -> Table {
    let before = table.len();
    let table = first_seen_wins(table, |r| &r.email);
    debug!(dropped = before - table.len(), "email dedup pass");

    let before = table.len();
    let table = first_seen_wins(table, |r| &r.full_name);
    debug!(dropped = before - table.len(), "full name dedup pass");

    table
}
