use crate::Error;
use crate::diagnostics::{DiagnosticPrinter, render};

#[test]
fn unknown_verb_points_at_verb() {
    let error = Error::UnknownVerb { verb: 'q', index: 4 };
    let out = render("%Y %q", &error, false);

    assert!(out.contains("error: cannot recognize format verb 'q' at index 4"));
    assert!(out.contains("%Y %q"));
    assert!(out.contains("^^ unknown verb"));
}

#[test]
fn extra_verb_gets_help() {
    let error = Error::UnknownVerb { verb: '3', index: 1 };
    let out = render("%3", &error, false);

    assert!(out.contains("help: this is an extra verb; enable extra verbs to use it"));
}

#[test]
fn unknown_standard_verb_has_no_help() {
    let error = Error::UnknownVerb { verb: 'q', index: 1 };
    let out = render("%q", &error, false);

    assert!(!out.contains("help:"));
}

#[test]
fn unterminated_verb() {
    let error = Error::UnterminatedVerb { index: 3 };
    let out = render("%Y %", &error, false);

    assert!(out.contains("error: unterminated verb at index 3"));
    assert!(out.contains("`%` at end of spec"));
    assert!(out.contains("help: write `%%` for a literal percent sign"));
}

#[test]
fn errors_without_span_render_plain() {
    insta::assert_snapshot!(
        render("", &Error::EmptySpec, false),
        @"error: cannot compile an empty time format spec"
    );
}

#[test]
fn printer_without_source_renders_plain() {
    let error = Error::UnknownVerb { verb: 'q', index: 1 };
    insta::assert_snapshot!(
        DiagnosticPrinter::new(&error).render(),
        @"error: cannot recognize format verb 'q' at index 1"
    );
}

#[test]
fn printer_with_path() {
    let error = Error::UnknownVerb { verb: 'q', index: 1 };
    let out = DiagnosticPrinter::new(&error)
        .source("%q")
        .path("format.txt")
        .render();

    assert!(out.contains("format.txt"));
}

#[test]
fn spans() {
    assert_eq!(Error::UnknownVerb { verb: 'q', index: 1 }.span(), Some(0..2));
    assert_eq!(Error::UnknownVerb { verb: 'é', index: 3 }.span(), Some(2..5));
    assert_eq!(Error::UnterminatedVerb { index: 3 }.span(), Some(3..4));
    assert_eq!(Error::EmptySpec.span(), None);
    assert!(!Error::Reformat("x".into()).is_spec_error());
}
