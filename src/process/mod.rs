// src/process/mod.rs

use tracing::info;

pub mod dedup;
pub mod flag;
pub mod normalize;

/// One registrant row, as loaded from the source file plus the fields
/// derived during the cleaning passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 0-based ordinal of this row in the input file. Survives dedup
    /// unchanged so output rows can be traced back to the source.
    pub row: usize,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `last_name + " " + first_name`, populated by normalization.
    pub full_name: String,
    /// First character of the normalized first name, empty for an empty
    /// first name. Populated by the flagging pass.
    pub first_initial: String,
    /// `last_name + " " + first_initial`. Populated by the flagging pass.
    pub last_initial_key: String,
    /// True when at least one other surviving record shares this
    /// record's `last_initial_key`.
    pub possible_duplicate: bool,
}

impl Record {
    pub fn new(row: usize, first_name: String, last_name: String, email: String) -> Self {
        Record {
            row,
            first_name,
            last_name,
            email,
            full_name: String::new(),
            first_initial: String::new(),
            last_initial_key: String::new(),
            possible_duplicate: false,
        }
    }
}

/// An ordered sequence of records. Order matters: "first occurrence"
/// during dedup means earliest in input order.
pub type Table = Vec<Record>;

/// Run the full cleaning pipeline: normalize casing, drop exact
/// duplicates (by email, then by full name), then flag groups sharing
/// last name + first initial for manual review.
pub fn run(table: Table) -> Table {
    let input_rows = table.len();

    let table = normalize::normalize(table);
    let table = dedup::dedup(table);
    let dropped = input_rows - table.len();

    let table = flag::flag(table);
    let flagged = table.iter().filter(|r| r.possible_duplicate).count();

    info!(
        input_rows,
        dropped,
        survivors = table.len(),
        flagged,
        "pipeline complete"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(row: usize, first: &str, last: &str, email: &str) -> Record {
        Record::new(row, first.to_string(), last.to_string(), email.to_string())
    }

    #[test]
    fn end_to_end_casing_collapse() {
        // Two spellings of the same registration plus one distinct one.
        let table = vec![
            record(0, "john", "doe", "J@A.com"),
            record(1, "John", "Doe", "j@a.com"),
            record(2, "Jane", "Doe", "jane@b.com"),
        ];

        let result = run(table);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].full_name, "Doe John");
        assert_eq!(result[0].email, "j@a.com");
        assert_eq!(result[0].row, 0);
        assert_eq!(result[1].full_name, "Doe Jane");
        assert_eq!(result[1].row, 2);

        // "Doe J" and "Doe Ja" are distinct keys, so nothing is flagged.
        assert!(result.iter().all(|r| !r.possible_duplicate));
    }

    #[test]
    fn no_duplicate_keys_survive() {
        let table = vec![
            record(0, "alice", "smith", "A@X.com"),
            record(1, "Alicia", "Smythe", "a@x.com"),
            record(2, "ALICE", "SMITH", "alice.smith@y.com"),
            record(3, "Bob", "Jones", "bob@z.com"),
        ];

        let result = run(table);

        let emails: HashSet<&str> = result.iter().map(|r| r.email.as_str()).collect();
        let names: HashSet<&str> = result.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(emails.len(), result.len());
        assert_eq!(names.len(), result.len());
    }

    #[test]
    fn survivors_keep_input_order() {
        let table = vec![
            record(0, "Carol", "Adams", "c@x.com"),
            record(1, "Carol", "Adams", "c2@x.com"),
            record(2, "Dave", "Brown", "d@x.com"),
            record(3, "Erin", "Clark", "e@x.com"),
        ];

        let result = run(table);

        let rows: Vec<usize> = result.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 2, 3]);
    }
}
