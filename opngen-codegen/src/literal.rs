//! Python source literals.

use std::fmt::Write;

/// Render `value` as a single-quoted Python string literal.
///
/// Backslashes and quotes are escaped, control characters become `\xNN`
/// escapes. Anything printable is kept verbatim since generated files are
/// UTF-8.
pub fn python_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Render a list of strings as a Python list literal, e.g. `['a', 'b']`.
pub fn python_list_literal<S: AsRef<str>>(values: &[S]) -> String {
    let items: Vec<String> = values.iter().map(|v| python_literal(v.as_ref())).collect();
    format!("[{}]", items.join(", "))
}
