use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("tag '{tag}' not found in model '{locator}'")]
    #[diagnostic(
        code(opngen::model::not_found),
        help("tag names are case sensitive, e.g. 'dnsbl' for the unbound dnsbl command")
    )]
    NotFound { tag: String, locator: String },

    #[error("model '{locator}' is not well-formed XML: {message}")]
    #[diagnostic(code(opngen::model::malformed))]
    MalformedDocument {
        locator: String,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
    },

    #[error("could not retrieve model '{locator}'")]
    #[diagnostic(
        code(opngen::model::unreachable),
        help("check the url, or pass a path to a local model.xml")
    )]
    Unreachable {
        locator: String,
        #[source]
        source: FetchError,
    },
}

/// Why a locator could not be dereferenced.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("invalid locator: {0}")]
    InvalidLocator(String),
}

impl Error {
    /// Create an unreachable error for a locator
    pub fn unreachable(locator: impl Into<String>, source: impl Into<FetchError>) -> Self {
        Error::Unreachable {
            locator: locator.into(),
            source: source.into(),
        }
    }

    /// Create a malformed document error pointing at a byte offset in the source
    pub fn malformed(
        locator: &str,
        src: &str,
        message: impl Into<String>,
        offset: Option<usize>,
    ) -> Self {
        let message = message.into();
        let span = offset.map(|at| SourceSpan::from(at.min(src.len())..src.len().min(at + 1)));
        Error::MalformedDocument {
            locator: locator.to_string(),
            message,
            src: NamedSource::new(locator, src.to_string()),
            span,
        }
    }
}
