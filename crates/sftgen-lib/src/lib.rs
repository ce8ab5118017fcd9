//! sftgen: compile strftime-style format specs into Rust source.
//!
//! The generated function formats a `jiff::Zoned` into a byte buffer without
//! interpreting the format string at runtime.
//!
//! This crate provides the code generation pipeline:
//! - `scanner` - splits the spec into literal runs and verbs
//! - `verbs` - the verb set and composite expansions
//! - `symbols` - value numbering for timestamp-derived expressions
//! - `emit` - buffer-write primitives and per-verb rules
//! - `assemble` - the final emitted unit
//! - `diagnostics` - error rendering against the spec source
//!
//! # Example
//!
//! ```
//! use sftgen_lib::{Config, Generator};
//!
//! let source = Generator::new("%Y-%m-%d", Config::new())
//!     .expect("valid spec")
//!     .to_string();
//! assert!(source.contains("pub fn format_time(mut buf: Vec<u8>, t: &Zoned) -> Vec<u8>"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod assemble;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod pretty;
pub mod scanner;
pub mod symbols;
pub mod verbs;

mod generator;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
mod scanner_tests;
#[cfg(test)]
mod symbols_tests;

pub use assemble::EmittedUnit;
pub use config::Config;
pub use generator::Generator;
pub use verbs::Verb;

/// Errors that can occur while compiling a format spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot compile an empty time format spec")]
    EmptySpec,

    /// A `%` was followed by a character that is not a known verb.
    #[error("cannot recognize format verb {verb:?} at index {index}")]
    UnknownVerb { verb: char, index: usize },

    /// The spec ended right after a `%`.
    #[error("unterminated verb at index {index}")]
    UnterminatedVerb { index: usize },

    /// The external pretty-printer failed on the finished text.
    #[error("cannot reformat generated source: {0}")]
    Reformat(String),
}

impl Error {
    /// Byte range of the spec responsible for this error, if any.
    pub fn span(&self) -> Option<std::ops::Range<usize>> {
        match *self {
            Error::UnknownVerb { verb, index } => {
                // Cover the `%` as well as the verb itself.
                Some(index.saturating_sub(1)..index + verb.len_utf8())
            }
            Error::UnterminatedVerb { index } => Some(index..index + 1),
            Error::EmptySpec | Error::Reformat(_) => None,
        }
    }

    /// Whether the error was caused by the spec the user supplied.
    pub fn is_spec_error(&self) -> bool {
        !matches!(self, Error::Reformat(_))
    }
}

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile `spec` with `config` and return the generated source text.
pub fn compile(spec: &str, config: Config) -> Result<String> {
    Ok(Generator::new(spec, config)?.into_string())
}
