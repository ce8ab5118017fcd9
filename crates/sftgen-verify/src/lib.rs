//! Formatters generated by `sftgen` at build time, paired with a slow
//! reference implementation they are checked against.
//!
//! `build.rs` compiles every verb, plus a handful of mixed specs, once per
//! write strategy. Each generated module is registered in [`CASES`].

pub mod reference;

use jiff::Zoned;

/// How a generated function writes into its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Resizes up front, writes at indices, then truncates.
    Index,
    /// Pushes onto whatever the buffer already holds.
    Append,
}

/// One generated formatter.
#[derive(Clone, Copy)]
pub struct Case {
    pub spec: &'static str,
    pub strategy: Strategy,
    pub format: fn(Vec<u8>, &Zoned) -> Vec<u8>,
}

impl Case {
    /// Format into a fresh buffer.
    pub fn render(&self, t: &Zoned) -> Vec<u8> {
        (self.format)(Vec::new(), t)
    }
}

impl std::fmt::Debug for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Case")
            .field("spec", &self.spec)
            .field("strategy", &self.strategy)
            .finish()
    }
}

include!(concat!(env!("OUT_DIR"), "/generated.rs"));
