//! `opngen.toml` configuration.
//!
//! ```toml
//! [policy]
//! ignored_types = ["UniqueIdField", "ModelRelationField"]
//! ignored_update_names = ["name"]
//!
//! [paths]
//! template_basedir = "templates"
//! command_output_dir = "src/opnsense_cli/commands/plugin"
//! ```

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::{Error, Result, policy::Policy};

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub policy: Policy,
    pub paths: PathsConfig,
}

/// Path overrides; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub template_basedir: Option<PathBuf>,
    pub template_command: Option<PathBuf>,
    pub template_facade: Option<PathBuf>,
    pub command_output_dir: Option<PathBuf>,
    pub facade_output_dir: Option<PathBuf>,
}

impl Config {
    /// Looked up in the working directory when no config is given.
    pub const DEFAULT_FILE: &'static str = "opngen.toml";

    /// Load an explicitly given config, else `opngen.toml` if present, else
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None if Path::new(Self::DEFAULT_FILE).is_file() => Self::open(Self::DEFAULT_FILE),
            None => Ok(Self::default()),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config text. `filename` labels errors.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e: toml::de::Error| Error::Config {
            src: NamedSource::new(filename, content.to_string()),
            span: e.span().map(SourceSpan::from),
            message: e.message().to_string(),
        })
    }
}
