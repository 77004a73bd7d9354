use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for code generation
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] opngen_model::Error),

    #[error("failed to render template '{}': {message}", path.display())]
    #[diagnostic(
        code(opngen::template),
        help("templates are resolved relative to --template-basedir")
    )]
    Template { path: PathBuf, message: String },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(opngen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config '{}'", path.display())]
    #[diagnostic(code(opngen::config_io))]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {message}")]
    #[diagnostic(
        code(opngen::config),
        help("known tables are [policy] and [paths]")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// The distinguishable failure kinds of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedDocument,
    Unreachable,
    Template,
    Io,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Model(opngen_model::Error::NotFound { .. }) => ErrorKind::NotFound,
            Error::Model(opngen_model::Error::MalformedDocument { .. }) => {
                ErrorKind::MalformedDocument
            }
            Error::Model(opngen_model::Error::Unreachable { .. }) => ErrorKind::Unreachable,
            Error::Template { .. } => ErrorKind::Template,
            Error::Io { .. } => ErrorKind::Io,
            Error::ConfigIo { .. } | Error::Config { .. } => ErrorKind::Config,
        }
    }

    pub(crate) fn template(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::Template {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
