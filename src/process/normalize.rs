use crate::process::Table;

/// Title-case a name: each whitespace-delimited word gets its first
/// character upper-cased and the rest lower-cased, so "mary jane" →
/// "Mary Jane". Idempotent.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Canonicalize casing on every record and derive the full name.
///
/// Names are title-cased, emails fully lower-cased, and `full_name`
/// becomes `last_name + " " + first_name` from the normalized values.
/// Empty fields pass through as empty strings.
pub fn normalize(table: Table) -> Table {
    table
        .into_iter()
        .map(|mut r| {
            r.first_name = title_case(&r.first_name);
            r.last_name = title_case(&r.last_name);
            r.email = r.email.to_lowercase();
            r.full_name = format!("{} {}", r.last_name, r.first_name);
            r
        })
        .collect()
}
