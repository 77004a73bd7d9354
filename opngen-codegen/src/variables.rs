//! The template variables bundle.
//!
//! Both the command and the facade are rendered from the same
//! [`TemplateVariables`], derived once by [`derive_template_variables`], so
//! the two artifacts can never disagree about which fields exist.

use std::fmt;

use opngen_core::to_snake_case;
use opngen_model::Element;
use serde::{Deserialize, Serialize};

use crate::{literal::python_list_literal, options::classify, policy::Policy};

/// Where the generated command lives in the OPNsense API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Core,
    Plugin,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Core => "core",
            ModuleType::Plugin => "plugin",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the command being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Click group, e.g. `unbound`.
    pub group: String,
    /// Click command, e.g. `dnsbl`.
    pub command: String,
    pub module_type: ModuleType,
}

impl CommandSpec {
    pub fn new(group: impl Into<String>, command: impl Into<String>, module_type: ModuleType) -> Self {
        Self {
            group: group.into(),
            command: command.into(),
            module_type,
        }
    }
}

/// Values handed to the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVariables {
    pub click_group: String,
    pub click_command: String,
    /// `click_group` as a Python module name, matching the output directory.
    pub click_group_module: String,
    /// `click_command` as a Python module name, matching the output file.
    pub click_command_module: String,
    #[serde(rename = "click_options_create")]
    pub options_create: Vec<String>,
    #[serde(rename = "click_options_update")]
    pub options_update: Vec<String>,
    /// Every direct child of the model tag, in document order.
    pub column_names: Vec<String>,
    /// `column_names` as a Python list literal.
    pub column_list: String,
    pub module_type: ModuleType,
}

/// Walk the direct children of `root` and build the template variables.
pub fn derive_template_variables(
    root: &Element,
    policy: &Policy,
    spec: &CommandSpec,
) -> TemplateVariables {
    let mut options_create = Vec::new();
    let mut options_update = Vec::new();
    let mut column_names = Vec::with_capacity(root.children().len());

    for field in root.children() {
        column_names.push(field.name().to_string());

        if policy.ignores_type(field.field_type()) {
            tracing::debug!(field = field.name(), ty = ?field.field_type(), "ignored field type");
            continue;
        }

        let fragment = classify(field);
        tracing::trace!(field = field.name(), kind = ?fragment.kind(), "classified field");

        if !policy.skips_create(field.name()) {
            options_create.extend(fragment.code_for_create());
        }
        if !policy.skips_update(field.name()) {
            options_update.extend(fragment.code_for_update());
        }
    }

    let column_list = python_list_literal(&column_names);

    TemplateVariables {
        click_group: spec.group.clone(),
        click_command: spec.command.clone(),
        click_group_module: to_snake_case(&spec.group),
        click_command_module: to_snake_case(&spec.command),
        options_create,
        options_update,
        column_names,
        column_list,
        module_type: spec.module_type,
    }
}
