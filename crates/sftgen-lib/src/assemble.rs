//! Final assembly of the generated source.
//!
//! The unit is laid out as: header comments (including any caveats the rules
//! recorded), sorted `use` items, the formatting function, then an optional
//! demo entry point. The function body holds the table constants, one
//! declaration per init expression, the buffer sizing check, the accumulated
//! statements and the finalize step.

use std::fmt;

use crate::config::Config;
use crate::emit::{Emitter, OffsetMode};

const INDENT: &str = "    ";

/// The assembled output of one compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedUnit {
    header: String,
    body: String,
}

impl EmittedUnit {
    /// Assemble the unit from a finished session.
    pub fn assemble(spec: &str, emitter: &Emitter, config: &Config) -> Self {
        Self {
            header: header(spec, emitter, config),
            body: body(emitter, config),
        }
    }

    /// Comment block identifying the generator and the spec.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Everything after the header.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the body, keeping the header.
    pub fn with_body(self, body: String) -> Self {
        Self { body, ..self }
    }
}

impl fmt::Display for EmittedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.header, self.body)
    }
}

fn header(spec: &str, emitter: &Emitter, config: &Config) -> String {
    let mut out = String::from("// Code generated by sftgen. DO NOT EDIT.\n");
    if let Some(command) = &config.command {
        out.push_str(&format!("// Command: {}\n", command.replace('\n', " ")));
    }
    out.push_str(&format!("// Format: {spec:?}\n"));
    for note in emitter.notes() {
        out.push_str(&format!("// {note}\n"));
    }
    out
}

fn body(emitter: &Emitter, config: &Config) -> String {
    let mut uses: Vec<&str> = vec!["jiff::Zoned"];
    uses.extend(emitter.facilities());
    uses.sort_unstable();
    uses.dedup();

    let mut items = String::new();
    for path in &uses {
        items.push_str(&format!("use {path};\n"));
    }
    items.push('\n');
    items.push_str(&function(emitter, config));

    let mut out = String::new();
    match &config.module_name {
        Some(module) => {
            out.push_str(&format!("pub mod {module} {{\n"));
            push_indented(&mut out, &items, 1);
            out.push_str("}\n");
        }
        None => out.push_str(&items),
    }

    if config.emit_main {
        out.push('\n');
        out.push_str(&demo_main(config));
    }

    out
}

fn function(emitter: &Emitter, config: &Config) -> String {
    let mut body = String::new();

    for table in emitter.tables() {
        for item in table.declarations() {
            body.push_str(&item);
            body.push('\n');
        }
    }

    for (init, binding) in emitter.symbols().declarations() {
        body.push_str(&format!("let {} = {init};\n", binding.pattern()));
    }

    let max_len = emitter.max_len();
    if emitter.mode() != OffsetMode::Append {
        body.push_str(&format!(
            "if buf.len() < {max_len} {{\n{INDENT}buf.resize({max_len}, 0);\n}}\n"
        ));
    }

    body.push_str(emitter.ops());

    match emitter.mode() {
        OffsetMode::Static(n) => body.push_str(&format!("buf.truncate({n});\n")),
        OffsetMode::Dynamic => body.push_str("buf.truncate(offset);\n"),
        OffsetMode::Append => {}
    }
    body.push_str("buf\n");

    // Specs made only of literals never read the timestamp.
    let timestamp = if emitter.symbols().is_empty() { "_t" } else { "t" };
    let mut out = format!(
        "pub fn {}(mut buf: Vec<u8>, {timestamp}: &Zoned) -> Vec<u8> {{\n",
        config.function_name
    );
    push_indented(&mut out, &body, 1);
    out.push_str("}\n");
    out
}

fn demo_main(config: &Config) -> String {
    let path = match &config.module_name {
        Some(module) => format!("{module}::{}", config.function_name),
        None => config.function_name.clone(),
    };
    format!(
        "fn main() {{\n\
         {INDENT}let t = jiff::civil::date(2006, 1, 2)\n\
         {INDENT}{INDENT}.at(3, 4, 5, 123_456_789)\n\
         {INDENT}{INDENT}.to_zoned(jiff::tz::TimeZone::UTC)\n\
         {INDENT}{INDENT}.unwrap();\n\
         {INDENT}let buf = {path}(Vec::with_capacity(128), &t);\n\
         {INDENT}println!(\"{{}}\", String::from_utf8_lossy(&buf));\n\
         }}\n"
    )
}

fn push_indented(out: &mut String, text: &str, depth: usize) {
    for line in text.lines() {
        if !line.is_empty() {
            for _ in 0..depth {
                out.push_str(INDENT);
            }
            out.push_str(line);
        }
        out.push('\n');
    }
}
