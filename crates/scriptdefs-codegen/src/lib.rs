//! C# literal emitter for NWScript reference tables.
//!
//! Turns the typed records from `scriptdefs-core` into C# source so the
//! patcher can embed them as static tables:
//! - `escape` - quoted vs. verbatim string escaping
//! - `value` - typed value to literal rules
//! - `record` - constant, parameter and function constructor expressions
//! - `library` - include-file dictionary entries
//! - `emitter` - document assembly for both passes

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod emitter;
mod error;
pub mod escape;
pub mod library;
pub mod record;
mod render;
mod report;
pub mod value;

#[cfg(test)]
mod library_tests;
#[cfg(test)]
mod record_tests;

pub use config::Config;
pub use emitter::{Emitter, emit_defs, emit_library};
pub use error::EmitError;
pub use report::{Document, EmitReport, Fallback, GroupCount};

/// Result type for emission.
pub type Result<T> = std::result::Result<T, EmitError>;
