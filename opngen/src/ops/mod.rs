//! Core operations.
//!
//! This module contains the business logic for opngen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, generate};
