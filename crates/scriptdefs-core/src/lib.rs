#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for NWScript reference tables.
//!
//! Two layers:
//! - **Deserialization layer**: serde mapping of the definitions JSON handed
//!   over by the table extractor
//! - **Model layer**: the typed records (`ScriptConstant`, `ScriptFunction`,
//!   `LibraryTable`, ...) consumed by the C# emitter
//!
//! Everything in here is read-only input to code generation. Tables keep the
//! order they were declared in; only the include library is re-sorted, and
//! that happens at emission time.

mod data_type;
mod defs;
mod library;
mod value;

#[cfg(test)]
mod library_tests;
#[cfg(test)]
mod value_tests;

pub use data_type::DataType;
pub use defs::{Game, GameDefs, ScriptConstant, ScriptDefs, ScriptFunction, ScriptParam};
pub use library::LibraryTable;
pub use value::{Value, Vector3};

/// Errors raised while reading definition tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The definitions document is not valid JSON or does not match the schema.
    #[error("invalid definitions document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for table loading.
pub type Result<T> = std::result::Result<T, Error>;
