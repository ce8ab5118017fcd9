//! Buffer-write primitives.
//!
//! Each primitive writes one group of bytes in the current offset mode and
//! accounts for its width in the running maximum length. Fixed-width
//! primitives keep a static offset static; variable-width ones switch the
//! session to the runtime cursor first.

use crate::symbols::Symbol;

use super::emitter::OffsetMode;
use super::{Emitter, Table};

impl Emitter {
    /// Write `value` as exactly `width` decimal digits, most significant first.
    pub(super) fn zero_padded(&mut self, value: Symbol, width: usize) {
        assert!(width > 0, "digit group needs a width");
        let digits = self.use_table(Table::Digits);

        if width == 1 {
            self.store(0, &format!("{digits}[{value}]"));
            self.advance(1);
            return;
        }

        self.open_block();
        let mut source = value.to_string();
        for i in 0..width - 1 {
            let divisor = 10usize.pow((width - 1 - i) as u32);
            self.line(format!(
                "let (quotient, remainder) = ({source} / {divisor}, {source} % {divisor});"
            ));
            self.store(i, &format!("{digits}[quotient]"));
            source = "remainder".to_string();
        }
        self.store(width - 1, &format!("{digits}[remainder]"));
        self.close_block();
        self.advance(width);
    }

    /// Write a two-digit `value` with a space instead of a leading zero.
    pub(super) fn space_padded(&mut self, value: Symbol) {
        let digits = self.use_table(Table::Digits);

        self.open_block();
        self.line(format!(
            "let (quotient, remainder) = ({value} / 10, {value} % 10);"
        ));
        self.store(0, &format!("{digits}[10 + quotient]"));
        self.store(1, &format!("{digits}[remainder]"));
        self.close_block();
        self.advance(2);
    }

    /// Write a two-digit `value` without a leading zero (one or two bytes).
    pub(super) fn minimal(&mut self, value: Symbol) {
        if self.mode != OffsetMode::Append {
            self.ensure_dynamic();
        }
        let digits = self.use_table(Table::Digits);

        self.open_block();
        self.line(format!(
            "let (quotient, remainder) = ({value} / 10, {value} % 10);"
        ));
        self.line("if quotient > 0 {");
        self.indent += 1;
        self.store(0, &format!("{digits}[quotient]"));
        if self.mode == OffsetMode::Dynamic {
            self.line("offset += 1;");
        }
        self.indent -= 1;
        self.line("}");
        self.store(0, &format!("{digits}[remainder]"));
        self.close_block();

        // The optional tens digit.
        self.max_len += 1;
        self.advance(1);
    }

    /// Write fixed text.
    pub(super) fn literal(&mut self, text: &str) {
        let bytes = text.as_bytes();
        match bytes {
            [] => {}
            [byte] => {
                self.store(0, &format!("b'{}'", escape(&[*byte])));
                self.advance(1);
            }
            _ => {
                self.store_slice(bytes.len(), &format!("b\"{}\"", escape(bytes)));
                self.advance(bytes.len());
            }
        }
    }

    /// Write `width` bytes of `table` starting at the runtime index `start`.
    pub(super) fn copy_range(&mut self, table: Table, start: Symbol, width: usize) {
        let name = self.use_table(table);
        self.store_slice(width, &format!("&{name}[{start}..{start} + {width}]"));
        self.advance(width);
    }

    /// Write a runtime-length `&[u8]` expression of at most `bound` bytes.
    pub(super) fn copy_value(&mut self, source: &str, bound: usize) {
        self.copy_slice(source, bound, false);
    }

    /// Write a runtime-length `&[u8]` expression that is usually at most
    /// `estimate` bytes.
    ///
    /// In index modes a longer value grows the buffer by the overshoot, so
    /// the room left after the write still covers the rest of the estimate.
    pub(super) fn copy_estimated(&mut self, source: &str, estimate: usize) {
        self.copy_slice(source, estimate, true);
    }

    fn copy_slice(&mut self, source: &str, bound: usize, grow: bool) {
        self.max_len += bound;

        if self.mode == OffsetMode::Append {
            self.line(format!("buf.extend_from_slice({source});"));
            return;
        }

        self.ensure_dynamic();
        self.open_block();
        self.line(format!("let value = {source};"));
        if grow {
            self.line(format!("if value.len() > {bound} {{"));
            self.indent += 1;
            self.line(format!("buf.resize(buf.len() + value.len() - {bound}, 0);"));
            self.indent -= 1;
            self.line("}");
        }
        self.line("buf[offset..offset + value.len()].copy_from_slice(value);");
        self.line("offset += value.len();");
        self.close_block();
    }

    /// Write the decimal rendering of `value`, at most `bound` bytes.
    pub(super) fn display(&mut self, value: Symbol, bound: usize) {
        self.use_facility("std::io::Write");
        self.max_len += bound;

        if self.mode == OffsetMode::Append {
            self.line(format!("let _ = write!(buf, \"{{}}\", {value});"));
            return;
        }

        self.ensure_dynamic();
        self.open_block();
        self.line("let mut rest = &mut buf[offset..];");
        self.line("let available = rest.len();");
        self.line(format!("let _ = write!(rest, \"{{}}\", {value});"));
        self.line("offset += available - rest.len();");
        self.close_block();
    }
}

/// Escape bytes for a Rust byte or byte-string literal.
pub(crate) fn escape(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect()
}
