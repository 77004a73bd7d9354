//! Where a model document lives and how to retrieve it.

use std::{fmt, path::PathBuf, time::Duration};

use url::Url;

use crate::{Error, FetchError, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A dereferenceable reference to a model document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// `http://` or `https://` URL.
    Remote(Url),
    /// Local file, given as a path or a `file://` URL.
    Local(PathBuf),
}

impl Locator {
    /// Parse a user-supplied locator.
    ///
    /// GitHub `blob` URLs are rewritten to their raw form so that pasting the
    /// address of a model.xml page from the browser works.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::unreachable(
                input,
                FetchError::InvalidLocator("empty locator".to_string()),
            ));
        }

        let Ok(url) = Url::parse(input) else {
            return Ok(Locator::Local(PathBuf::from(input)));
        };

        match url.scheme() {
            "http" | "https" => Ok(Locator::Remote(raw_github_url(url))),
            "file" => url.to_file_path().map(Locator::Local).map_err(|()| {
                Error::unreachable(
                    input,
                    FetchError::InvalidLocator("file url has no usable path".to_string()),
                )
            }),
            // Windows drive letters parse as a one-letter scheme
            scheme if scheme.len() == 1 => Ok(Locator::Local(PathBuf::from(input))),
            scheme => Err(Error::unreachable(
                input,
                FetchError::InvalidLocator(format!("unsupported scheme '{scheme}'")),
            )),
        }
    }

    /// Retrieve the document text.
    pub fn fetch(&self) -> Result<String> {
        let bytes = match self {
            Locator::Remote(url) => {
                fetch_remote(url).map_err(|e| Error::unreachable(self.to_string(), e))?
            }
            Locator::Local(path) => {
                std::fs::read(path).map_err(|e| Error::unreachable(self.to_string(), e))?
            }
        };
        tracing::debug!(locator = %self, bytes = bytes.len(), "fetched model");

        String::from_utf8(bytes).map_err(|err| {
            let offset = err.utf8_error().valid_up_to();
            let lossy = String::from_utf8_lossy(err.as_bytes()).into_owned();
            Error::malformed(
                &self.to_string(),
                &lossy,
                "document is not valid UTF-8",
                Some(offset),
            )
        })
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Remote(url) => write!(f, "{url}"),
            Locator::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

fn fetch_remote(url: &Url) -> std::result::Result<Vec<u8>, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("opngen/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let resp = client.get(url.clone()).send()?;
    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status().as_u16()));
    }

    Ok(resp.bytes()?.to_vec())
}

/// `github.com/<owner>/<repo>/blob/<ref>/<path>` and the mistaken
/// `raw.githubusercontent.com/<owner>/<repo>/blob/<ref>/<path>` both map to
/// `raw.githubusercontent.com/<owner>/<repo>/<ref>/<path>`.
fn raw_github_url(url: Url) -> Url {
    let host = url.host_str().unwrap_or_default();
    if host != "github.com" && host != "raw.githubusercontent.com" {
        return url;
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.collect())
        .unwrap_or_default();
    if segments.len() < 5 || segments[2] != "blob" {
        return url;
    }

    let path = [&segments[..2], &segments[3..]].concat().join("/");
    Url::parse(&format!("https://raw.githubusercontent.com/{path}")).unwrap_or(url)
}
