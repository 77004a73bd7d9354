//! Core utilities and types for the opngen code generator.
//!
//! This crate provides the file-writing and naming primitives shared by the
//! model parser, the code generators and the command-line front-end.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::to_snake_case;
