//! Value numbering for timestamp-derived expressions.
//!
//! Every value the generated code needs is bound once to a local variable.
//! Expressions are keyed by their canonical source text, so two verbs asking
//! for the same value share one binding, and derived expressions built from
//! interned symbols collapse transitively.
//!
//! Some expressions produce several values at once (a tuple). Each position
//! in that tuple is a slot; slots nobody asked for are bound to `_`.

use std::fmt;

use indexmap::IndexMap;

/// A generated local variable bound to one slot of one init expression.
///
/// Symbols are numbered in creation order and render as `gs0`, `gs1`, ...
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Symbol(u32);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gs{}", self.0)
    }
}

/// Slots of one init expression, `None` for slots nobody requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    slots: Vec<Option<Symbol>>,
}

impl Binding {
    /// Left-hand side of the declaration: `gs0` or `(gs0, _, gs2)`.
    pub fn pattern(&self) -> String {
        let names: Vec<String> = self
            .slots
            .iter()
            .map(|slot| match slot {
                Some(sym) => sym.to_string(),
                None => "_".to_string(),
            })
            .collect();

        if names.len() == 1 {
            names.into_iter().next().unwrap_or_default()
        } else {
            format!("({})", names.join(", "))
        }
    }
}

/// Deduplicating table from init expression text to bound symbols.
///
/// Insertion order of expressions is the declaration order: an expression is
/// declared once, at the position where any of its slots was first requested.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bindings: IndexMap<String, Binding>,
    /// Symbols in first-request order.
    order: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind slot `slot` of the `arity`-valued expression `init` to a symbol.
    ///
    /// Returns the existing symbol when the slot was already requested.
    ///
    /// # Panics
    /// Panics when `init` was previously interned with a different arity, or
    /// when `slot` is out of range. Both indicate a defect in a verb rule.
    pub fn intern(&mut self, init: &str, slot: usize, arity: usize) -> Symbol {
        assert!(
            slot < arity,
            "slot {slot} out of range for {arity}-valued expression `{init}`"
        );

        let next = Symbol(self.order.len() as u32);

        if let Some(binding) = self.bindings.get_mut(init) {
            assert_eq!(
                binding.slots.len(),
                arity,
                "found {} return values for `{init}`; expected {arity}",
                binding.slots.len(),
            );
            if let Some(sym) = binding.slots[slot] {
                return sym;
            }
            binding.slots[slot] = Some(next);
            self.order.push(next);
            log::trace!("intern {next} = `{init}` (slot {slot})");
            return next;
        }

        let mut slots = vec![None; arity];
        slots[slot] = Some(next);
        self.bindings.insert(init.to_owned(), Binding { slots });
        self.order.push(next);
        log::trace!("intern {next} = `{init}` (slot {slot})");
        next
    }

    /// Bind a single-valued expression.
    pub fn single(&mut self, init: &str) -> Symbol {
        self.intern(init, 0, 1)
    }

    /// Declarations in emission order, one per init expression.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings
            .iter()
            .map(|(init, binding)| (init.as_str(), binding))
    }

    /// Symbols in the order they were first requested.
    pub fn symbols(&self) -> &[Symbol] {
        &self.order
    }

    /// Number of distinct init expressions.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
