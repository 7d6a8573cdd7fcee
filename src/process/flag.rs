use std::collections::HashMap;

use tracing::debug;

use crate::process::Table;

/// Flag records that share a last name + first initial with at least one
/// other surviving record.
///
/// Catches repeat registrants who used a materially different email and
/// a first name that doesn't match exactly (nickname, maiden name,
/// typo). Too risky to merge automatically, so every member of such a
/// group is only marked `possible_duplicate` for a manual check, the
/// earliest one included. Nothing is removed or reordered.
pub fn flag(table: Table) -> Table {
    let mut table: Table = table
        .into_iter()
        .map(|mut r| {
            r.first_initial = r.first_name.chars().next().map(String::from).unwrap_or_default();
            r.last_initial_key = format!("{} {}", r.last_name, r.first_initial);
            r
        })
        .collect();

    let mut groups: HashMap<&str, usize> = HashMap::with_capacity(table.len());
    for r in &table {
        *groups.entry(r.last_initial_key.as_str()).or_default() += 1;
    }
    let flags: Vec<bool> = table
        .iter()
        .map(|r| groups.get(r.last_initial_key.as_str()).copied().unwrap_or(0) >= 2)
        .collect();

    for (r, flagged) in table.iter_mut().zip(flags) {
        r.possible_duplicate = flagged;
    }

    let flagged = table.iter().filter(|r| r.possible_duplicate).count();
    debug!(flagged, "possible duplicate pass");
    table
}
