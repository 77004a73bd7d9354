//! OPNsense model document access.
//!
//! A model document (`model.xml`) describes the configurable fields of an
//! OPNsense module. This crate fetches such a document from a [`Locator`],
//! parses it into an [`Element`] tree and resolves the subtree whose direct
//! children are the fields a command is generated for.
//!
//! ```ignore
//! let fields = opngen_model::resolve("Unbound.xml", "dnsbl")?;
//! for field in fields.children() {
//!     println!("{} ({:?})", field.name(), field.field_type());
//! }
//! ```

mod document;
mod element;
mod error;
mod locator;
mod parse;

pub use document::{ModelDocument, resolve};
pub use element::Element;
pub use error::{Error, FetchError, Result};
pub use locator::Locator;
pub use parse::parse_document;
