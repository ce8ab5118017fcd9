//! Code emission for compiled verbs.
//!
//! This module turns verbs into buffer-write statements:
//! - `emitter` - the per-compilation session state and statement output
//! - `primitives` - digit groups, literals and slice copies
//! - `rules` - one rule per verb, composing primitives
//! - `tables` - the constant lookup tables the rules may reference

mod emitter;
mod primitives;
mod rules;
pub mod tables;


pub use emitter::{Emitter, OffsetMode};
pub use tables::Table;
