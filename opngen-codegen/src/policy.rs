//! Field inclusion policy.

use serde::Deserialize;

/// Decides which fields get options generated.
///
/// A field whose `type` is in `ignored_types` gets no options at all but is
/// still listed as a column. Name based rules only remove the field from one
/// of the two option lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    pub ignored_types: Vec<String>,
    pub ignored_create_names: Vec<String>,
    pub ignored_update_names: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            ignored_types: vec!["UniqueIdField".to_string()],
            // `name` is the positional argument of the generated create command
            ignored_create_names: vec!["name".to_string()],
            ignored_update_names: Vec::new(),
        }
    }
}

impl Policy {
    pub fn ignores_type(&self, field_type: Option<&str>) -> bool {
        field_type.is_some_and(|ty| self.ignored_types.iter().any(|t| t == ty))
    }

    pub fn skips_create(&self, name: &str) -> bool {
        self.ignored_create_names.iter().any(|n| n == name)
    }

    pub fn skips_update(&self, name: &str) -> bool {
        self.ignored_update_names.iter().any(|n| n == name)
    }
}
