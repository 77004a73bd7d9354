//! `@click.option(...)` decorator builder.

use crate::literal::python_literal;

/// Builder for a click option decorator.
///
/// Declarations are quoted here; parameter values are emitted verbatim and
/// must already be valid Python expressions.
#[derive(Debug, Clone)]
pub(crate) struct ClickOption {
    decls: Vec<String>,
    params: Vec<(&'static str, String)>,
}

impl ClickOption {
    pub fn new(flag: impl AsRef<str>) -> Self {
        Self {
            decls: vec![python_literal(flag.as_ref())],
            params: Vec::new(),
        }
    }

    /// Explicit Python parameter name, as a second declaration.
    pub fn param_name(mut self, name: impl AsRef<str>) -> Self {
        self.decls.push(python_literal(name.as_ref()));
        self
    }

    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    pub fn param_if(self, condition: bool, key: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.param(key, value)
        } else {
            self
        }
    }

    pub fn build(&self) -> String {
        let mut out = String::from("@click.option(\n");
        for decl in &self.decls {
            out.push_str(&format!("    {},\n", decl));
        }
        for (key, value) in &self.params {
            out.push_str(&format!("    {}={},\n", key, value));
        }
        out.push(')');
        out
    }
}

/// Python boolean literal.
pub(crate) fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
