//! Click command and facade generation from OPNsense model documents.
//!
//! # Module Organization
//!
//! - [`options`] - Field classification and click option code fragments
//! - [`policy`] - Which fields are left out of the generated options
//! - [`variables`] - The template variables bundle shared by both artifacts
//! - [`template`] - Liquid template rendering
//! - [`generator`] - Command and facade generators
//! - [`config`] - `opngen.toml` loading

pub mod config;
mod error;
pub mod generator;
mod literal;
mod naming;
pub mod options;
pub mod policy;
pub mod template;
pub mod variables;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use generator::{
    ArtifactKind, ArtifactPaths, CodeGenerator, GenerateRequest, RenderedArtifact,
    WrittenArtifact, generate_all, render_all,
};
pub use literal::{python_list_literal, python_literal};
pub use naming::{NamingConvention, PYTHON_NAMING};
pub use options::{CodeFragment, OptionKind, classify};
pub use policy::Policy;
pub use template::TemplateEngine;
pub use variables::{CommandSpec, ModuleType, TemplateVariables, derive_template_variables};
