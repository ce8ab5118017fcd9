//! Rendering spec errors against the spec source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::Error;
use crate::verbs::Verb;

/// Builder for rendering one compile error.
pub struct DiagnosticPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DiagnosticPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// The spec text the error refers to.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(span)) = (self.source, self.error.span()) else {
            return write!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = span.start.min(source.len())..span.end.min(source.len());
        let message = self.error.to_string();

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range.clone())
                .label(self.label()),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let mut report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];

        if let Some(help) = self.help() {
            report.push(
                Level::HELP.secondary_title(help).element(
                    Snippet::source(source)
                        .line_start(1)
                        .annotation(AnnotationKind::Context.span(range)),
                ),
            );
        }

        write!(w, "{}", renderer.render(&report))
    }

    fn label(&self) -> &'static str {
        match self.error {
            Error::UnknownVerb { .. } => "unknown verb",
            Error::UnterminatedVerb { .. } => "`%` at end of spec",
            Error::EmptySpec | Error::Reformat(_) => "",
        }
    }

    fn help(&self) -> Option<&'static str> {
        match *self.error {
            Error::UnknownVerb { verb, .. } if Verb::from_code(verb, true).is_some() => {
                Some("this is an extra verb; enable extra verbs to use it")
            }
            Error::UnterminatedVerb { .. } => Some("write `%%` for a literal percent sign"),
            _ => None,
        }
    }
}

/// Render `error` against `spec` as a diagnostic report.
pub fn render(spec: &str, error: &Error, colored: bool) -> String {
    DiagnosticPrinter::new(error)
        .source(spec)
        .colored(colored)
        .render()
}
