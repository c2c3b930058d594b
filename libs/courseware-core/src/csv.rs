//! Single-line CSV tokenizer.
//!
//! Splits on unquoted commas. A quoted field may contain commas, and `""` inside quotes
//! decodes to a single `"`. Malformed quoting is tolerated: an unterminated quote keeps
//! the rest of the line inside the current field.

/// Split one line of CSV text into its raw (untrimmed) fields.
///
/// The last field is always emitted, so `"a,"` yields `["a", ""]` and `""` yields `[""]`.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}
