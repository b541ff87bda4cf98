//! Delimited-text codec for the backing file.
//!
//! # Responsibility
//! - Encode one record per line with comma-separated fields.
//! - Parse the whole file back into raw field rows.
//!
//! # Invariants
//! - A field is quoted iff it contains the delimiter, a double quote, or a
//!   line break; embedded quotes are doubled.
//! - `parse_records(encode(rows))` reproduces `rows` field-for-field.
//! - Blank lines yield no row.

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Encodes one record as a single delimited line, without the trailing
/// newline.
pub(crate) fn encode_line(fields: &[&str]) -> String {
    let mut line = String::new();
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            line.push(DELIMITER);
        }
        if needs_quoting(field) {
            line.push(QUOTE);
            for ch in field.chars() {
                if ch == QUOTE {
                    line.push(QUOTE);
                }
                line.push(ch);
            }
            line.push(QUOTE);
        } else {
            line.push_str(field);
        }
    }
    line
}

/// Parses the whole backing file into raw field rows.
///
/// Quoted fields may span line breaks; record boundaries are unquoted
/// newlines (`\n` or `\r\n`). Structural validation (field count, id shape)
/// is the caller's job.
pub(crate) fn parse_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // Distinguishes a blank line from a record whose first field is empty.
    let mut saw_content = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    field.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            QUOTE if field.is_empty() => {
                in_quotes = true;
                saw_content = true;
            }
            DELIMITER => {
                fields.push(std::mem::take(&mut field));
                saw_content = true;
            }
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if saw_content || !fields.is_empty() {
                    fields.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut fields));
                }
                saw_content = false;
            }
            other => {
                field.push(other);
                saw_content = true;
            }
        }
    }

    // Final record without a trailing newline (or with an unterminated
    // quote, which the field-count check downstream will reject).
    if saw_content || !fields.is_empty() {
        fields.push(field);
        records.push(fields);
    }

    records
}

fn needs_quoting(field: &str) -> bool {
    field.contains([DELIMITER, QUOTE, '\n', '\r'])
}
