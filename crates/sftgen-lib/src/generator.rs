//! One compilation: scan, compile, assemble.

use std::fmt;

use crate::assemble::EmittedUnit;
use crate::config::Config;
use crate::emit::{Emitter, OffsetMode};
use crate::scanner::{self, Segment};
use crate::{Result, pretty};

/// The result of compiling one spec.
///
/// Construction runs the whole pipeline; nothing is emitted for a spec that
/// fails to scan.
#[derive(Debug, Clone)]
pub struct Generator {
    unit: EmittedUnit,
    mode: OffsetMode,
    max_len: usize,
}

impl Generator {
    pub fn new(spec: &str, config: Config) -> Result<Self> {
        log::debug!("compiling {spec:?}");

        let segments = scanner::scan(spec, config.allow_extra)?;

        let mut emitter = Emitter::new(config.use_append);
        for segment in &segments {
            match segment {
                Segment::Literal(text) => emitter.compile_literal(text),
                Segment::Verb { verb, .. } => emitter.compile_verb(*verb),
            }
        }

        let mut unit = EmittedUnit::assemble(spec, &emitter, &config);
        if config.pretty_print {
            let body = pretty::reformat(unit.body())?;
            unit = unit.with_body(body);
        }

        log::debug!(
            "compiled {spec:?}: {} declarations, max length {}, {:?}",
            emitter.symbols().len(),
            emitter.max_len(),
            emitter.mode(),
        );

        Ok(Self {
            unit,
            mode: emitter.mode(),
            max_len: emitter.max_len(),
        })
    }

    /// Offset mode at the end of compilation.
    pub fn mode(&self) -> OffsetMode {
        self.mode
    }

    /// Upper bound on the bytes the generated function writes.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn into_string(self) -> String {
        self.unit.to_string()
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.unit, f)
    }
}
