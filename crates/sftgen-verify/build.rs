use std::fmt::Write as _;
use std::path::PathBuf;

use sftgen_lib::{Config, Verb};

/// Compiled after every verb on its own.
const MIXED: &[(&str, &str)] = &[
    ("aliases", "%h|%x|%X"),
    ("rfc3339", "%Y-%m-%dT%H:%M:%S%1"),
    ("rfc3339_nano", "%Y-%m-%dT%H:%M:%S.%N%1"),
    ("rfc1123z", "%a, %d %b %Y %H:%M:%S %z"),
    ("kitchen", "%2:%M%p"),
    ("stamp_micro", "%b %e %H:%M:%S.%4"),
    ("weeks", "%G-W%V-%u|%U|%W|%w|%j"),
    ("literals", "at %H%%: [%e] \u{e9}t\u{e9}"),
    ("unix", "%s.%3"),
];

fn main() {
    println!("cargo::rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = PathBuf::from(out_dir).join("generated.rs");

    let mut cases: Vec<(String, String)> = Verb::all()
        .iter()
        .map(|verb| (verb_module(verb.code()), format!("%{}", verb.code())))
        .collect();
    cases.extend(
        MIXED
            .iter()
            .map(|(name, spec)| (name.to_string(), spec.to_string())),
    );

    let mut source = String::new();
    let mut registry = String::from("pub const CASES: &[Case] = &[\n");

    for (name, spec) in &cases {
        for (suffix, strategy, append) in [("index", "Index", false), ("append", "Append", true)] {
            let module = format!("{name}_{suffix}");
            let config = Config::new()
                .allow_extra(true)
                .use_append(append)
                .module_name(&module);
            let unit = sftgen_lib::compile(spec, config)
                .unwrap_or_else(|e| panic!("failed to compile {spec:?}: {e}"));
            source.push_str(&unit);
            source.push('\n');
            writeln!(
                registry,
                "    Case {{ spec: {spec:?}, strategy: Strategy::{strategy}, format: {module}::format_time }},"
            )
            .expect("write to String");
        }
    }
    registry.push_str("];\n");
    source.push_str(&registry);

    std::fs::write(&dest, source).expect("failed to write generated.rs");
}

fn verb_module(code: char) -> String {
    match code {
        '%' => "percent".to_string(),
        '+' => "date_time_zone".to_string(),
        c if c.is_ascii_digit() => format!("extra_{c}"),
        c if c.is_ascii_uppercase() => format!("upper_{}", c.to_ascii_lowercase()),
        c => format!("lower_{c}"),
    }
}
