//! Compilation session state and statement output.

use std::collections::BTreeSet;

use crate::symbols::SymbolTable;

use super::Table;

/// How the next buffer write is located.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetMode {
    /// Every write so far had a fixed width; the next write starts at this
    /// compile-time index.
    Static(usize),
    /// A variable-width write happened; writes go through the runtime
    /// cursor `offset`.
    Dynamic,
    /// Every write is a push onto the end of the buffer.
    Append,
}

/// One compilation session.
///
/// Owns the symbol table, the offset mode, the running maximum output length
/// and the accumulated statements. Nothing here is shared between sessions.
#[derive(Debug)]
pub struct Emitter {
    pub(super) symbols: SymbolTable,
    /// Tables referenced by emitted statements
    pub(super) tables: BTreeSet<Table>,
    /// `use` paths required by emitted statements
    pub(super) facilities: BTreeSet<&'static str>,
    /// Caveats about the generated function, for the header
    pub(super) notes: BTreeSet<&'static str>,
    pub(super) mode: OffsetMode,
    /// Upper bound on the bytes written so far
    pub(super) max_len: usize,
    /// Statement text, relative to the function body
    pub(super) ops: String,
    pub(super) indent: usize,
}

/// Saved state at the start of a conditional.
#[derive(Debug)]
pub(super) struct Branch {
    start_mode: OffsetMode,
    start_len: usize,
    end_mode: Option<OffsetMode>,
    longest: usize,
}

impl Emitter {
    pub fn new(use_append: bool) -> Self {
        let mode = if use_append {
            OffsetMode::Append
        } else {
            OffsetMode::Static(0)
        };
        Self {
            symbols: SymbolTable::new(),
            tables: BTreeSet::new(),
            facilities: BTreeSet::new(),
            notes: BTreeSet::new(),
            mode,
            max_len: 0,
            ops: String::new(),
            indent: 0,
        }
    }

    pub fn mode(&self) -> OffsetMode {
        self.mode
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn tables(&self) -> impl Iterator<Item = Table> + '_ {
        self.tables.iter().copied()
    }

    pub fn facilities(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.facilities.iter().copied()
    }

    pub fn notes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.notes.iter().copied()
    }

    /// Accumulated statements, one per line, unindented at function level.
    pub fn ops(&self) -> &str {
        &self.ops
    }

    pub(super) fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.indent {
            self.ops.push_str("    ");
        }
        self.ops.push_str(text.as_ref());
        self.ops.push('\n');
    }

    pub(super) fn open_block(&mut self) {
        self.line("{");
        self.indent += 1;
    }

    pub(super) fn close_block(&mut self) {
        self.indent -= 1;
        self.line("}");
    }

    pub(super) fn use_table(&mut self, table: Table) -> &'static str {
        self.tables.insert(table);
        table.name()
    }

    pub(super) fn use_facility(&mut self, path: &'static str) {
        self.facilities.insert(path);
    }

    pub(super) fn add_note(&mut self, note: &'static str) {
        self.notes.insert(note);
    }

    /// Switch to the runtime cursor, declaring it at the current static offset.
    ///
    /// # Panics
    /// Panics when the cursor would be declared inside a nested scope.
    pub(super) fn ensure_dynamic(&mut self) {
        if let OffsetMode::Static(n) = self.mode {
            assert_eq!(
                self.indent, 0,
                "runtime cursor must be declared at function scope"
            );
            log::debug!("switching to runtime cursor at offset {n}");
            self.line(format!("let mut offset = {n};"));
            self.mode = OffsetMode::Dynamic;
        }
    }

    /// Index expression for the byte `i` positions after the write position.
    fn index(&self, i: usize) -> String {
        match self.mode {
            OffsetMode::Static(n) => (n + i).to_string(),
            OffsetMode::Dynamic if i == 0 => "offset".to_string(),
            OffsetMode::Dynamic => format!("offset + {i}"),
            OffsetMode::Append => unreachable!("append mode has no write index"),
        }
    }

    /// Store one byte `i` positions after the write position.
    pub(super) fn store(&mut self, i: usize, value: &str) {
        let text = match self.mode {
            OffsetMode::Append => format!("buf.push({value});"),
            _ => format!("buf[{}] = {value};", self.index(i)),
        };
        self.line(text);
    }

    /// Copy `len` bytes of `source` (a `&[u8]` expression) to the write position.
    pub(super) fn store_slice(&mut self, len: usize, source: &str) {
        let text = match self.mode {
            OffsetMode::Append => format!("buf.extend_from_slice({source});"),
            OffsetMode::Static(n) => {
                format!("buf[{n}..{}].copy_from_slice({source});", n + len)
            }
            OffsetMode::Dynamic => {
                format!("buf[offset..offset + {len}].copy_from_slice({source});")
            }
        };
        self.line(text);
    }

    /// Move past `width` bytes just written and count them toward the maximum.
    pub(super) fn advance(&mut self, width: usize) {
        self.max_len += width;
        match self.mode {
            OffsetMode::Static(n) => self.mode = OffsetMode::Static(n + width),
            OffsetMode::Dynamic => self.line(format!("offset += {width};")),
            OffsetMode::Append => {}
        }
    }

    pub(super) fn begin_branch(&mut self, condition: &str) -> Branch {
        self.line(format!("if {condition} {{"));
        self.indent += 1;
        Branch {
            start_mode: self.mode,
            start_len: self.max_len,
            end_mode: None,
            longest: 0,
        }
    }

    /// Close the current arm and open the next; `None` opens the final `else`.
    pub(super) fn next_arm(&mut self, branch: &mut Branch, condition: Option<&str>) {
        self.finish_arm(branch);
        self.indent -= 1;
        match condition {
            Some(condition) => self.line(format!("}} else if {condition} {{")),
            None => self.line("} else {"),
        }
        self.indent += 1;
    }

    pub(super) fn end_branch(&mut self, mut branch: Branch) {
        self.finish_arm(&mut branch);
        self.indent -= 1;
        self.line("}");
        self.mode = branch.end_mode.unwrap_or(branch.start_mode);
        self.max_len = branch.start_len + branch.longest;
    }

    fn finish_arm(&mut self, branch: &mut Branch) {
        match branch.end_mode {
            None => branch.end_mode = Some(self.mode),
            Some(end) => assert_eq!(
                end, self.mode,
                "branch arms must end at the same write position"
            ),
        }
        branch.longest = branch.longest.max(self.max_len - branch.start_len);
        self.mode = branch.start_mode;
        self.max_len = branch.start_len;
    }
}
