//! Naming conventions for the generated Python code.

use opngen_core::to_snake_case;

/// Language-specific naming conventions.
///
/// Defines how to transform model field names into parameter names and how
/// to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a field name to a parameter name
    pub field_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name can be used as a bare identifier.
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(c) => c.is_ascii_alphabetic() || c == '_',
            None => false,
        };
        valid && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !self.is_reserved(name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a parameter name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }
}

fn escape_with_trailing_underscore(name: &str) -> String {
    format!("{}_", name)
}

/// snake_case with every character outside `[a-z0-9_]` replaced, and a
/// leading underscore when the name would start with a digit.
fn python_field_name(name: &str) -> String {
    let snake: String = to_snake_case(name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    match snake.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{snake}"),
        Some(_) => snake,
    }
}

/// Python naming conventions.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    field_to_name: python_field_name,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    escape_reserved: escape_with_trailing_underscore,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_identifier() {
        assert!(PYTHON_NAMING.is_identifier("enabled"));
        assert!(PYTHON_NAMING.is_identifier("_private2"));
        assert!(!PYTHON_NAMING.is_identifier("2fa"));
        assert!(!PYTHON_NAMING.is_identifier("ssl.verify"));
        assert!(!PYTHON_NAMING.is_identifier("class"));
        assert!(!PYTHON_NAMING.is_identifier(""));
    }

    #[test]
    fn test_python_field_name() {
        assert_eq!(PYTHON_NAMING.field_name("linkedServer"), "linked_server");
        assert_eq!(PYTHON_NAMING.field_name("ssl.verify"), "ssl_verify");
        assert_eq!(PYTHON_NAMING.field_name("2fa"), "_2fa");
        assert_eq!(PYTHON_NAMING.field_name("class"), "class_");
        assert_eq!(PYTHON_NAMING.field_name("global"), "global_");
    }
}
