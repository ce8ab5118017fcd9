use crate::symbols::SymbolTable;

#[test]
fn intern_deduplicates() {
    let mut table = SymbolTable::new();

    let a = table.single("t.weekday()");
    let b = table.single("t.weekday()");
    let c = table.single("t.day_of_year()");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(table.len(), 2);
    assert_eq!(table.symbols().len(), 2);
}

#[test]
fn symbols_render_in_creation_order() {
    let mut table = SymbolTable::new();

    let a = table.single("x");
    let b = table.single("y");

    assert_eq!(a.to_string(), "gs0");
    assert_eq!(b.to_string(), "gs1");
    assert!(a < b);
}

#[test]
fn unrequested_slots_are_discarded() {
    let mut table = SymbolTable::new();

    let day = table.intern("date()", 2, 3);

    let (init, binding) = table.declarations().next().unwrap();
    assert_eq!(init, "date()");
    assert_eq!(binding.pattern(), format!("(_, _, {day})"));
}

#[test]
fn late_slot_joins_existing_declaration() {
    let mut table = SymbolTable::new();

    let day = table.intern("date()", 2, 3);
    let weekday = table.single("weekday()");
    let year = table.intern("date()", 0, 3);

    assert_eq!(table.symbols(), &[day, weekday, year]);

    let decls: Vec<_> = table
        .declarations()
        .map(|(init, binding)| (init.to_string(), binding.pattern()))
        .collect();
    assert_eq!(
        decls,
        vec![
            ("date()".to_string(), "(gs2, _, gs0)".to_string()),
            ("weekday()".to_string(), "gs1".to_string()),
        ]
    );
}

#[test]
fn requesting_same_slot_twice_returns_same_symbol() {
    let mut table = SymbolTable::new();

    let first = table.intern("clock()", 1, 3);
    let second = table.intern("clock()", 1, 3);

    assert_eq!(first, second);
    assert_eq!(table.symbols().len(), 1);
}

#[test]
fn derived_expressions_collapse_transitively() {
    let mut table = SymbolTable::new();

    let hour = table.intern("clock()", 0, 3);
    let a = table.single(&format!("{hour} / 12 * 2"));
    let hour_again = table.intern("clock()", 0, 3);
    let b = table.single(&format!("{hour_again} / 12 * 2"));

    assert_eq!(a, b);
    assert_eq!(table.len(), 2);
}

#[test]
#[should_panic(expected = "found 3 return values")]
fn arity_mismatch_is_fatal() {
    let mut table = SymbolTable::new();

    table.intern("date()", 0, 3);
    table.intern("date()", 0, 2);
}

#[test]
#[should_panic(expected = "out of range")]
fn slot_out_of_range_is_fatal() {
    let mut table = SymbolTable::new();
    table.intern("date()", 3, 3);
}
