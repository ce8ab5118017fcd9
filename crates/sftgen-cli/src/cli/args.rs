//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Format spec or named format (positional).
pub fn spec_arg() -> Arg {
    Arg::new("spec")
        .value_name("SPEC")
        .required(true)
        .help("Format spec, a named format (e.g. RFC3339), or '-' for stdin")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Generated function name (-f/--function).
pub fn function_arg() -> Arg {
    Arg::new("function")
        .short('f')
        .long("function")
        .value_name("NAME")
        .default_value(sftgen_lib::config::DEFAULT_FUNCTION_NAME)
        .help("Name of the generated function")
}

/// Wrapping module name (-p/--module).
pub fn module_arg() -> Arg {
    Arg::new("module")
        .short('p')
        .long("module")
        .value_name("NAME")
        .help("Wrap the output in `pub mod NAME`")
}

/// Allow non-standard verbs (--extra).
pub fn extra_arg() -> Arg {
    Arg::new("extra")
        .long("extra")
        .action(ArgAction::SetTrue)
        .help("Allow the non-standard verbs %1 %2 %3 %4")
}

/// Push bytes instead of indexing (--append).
pub fn append_arg() -> Arg {
    Arg::new("append")
        .long("append")
        .action(ArgAction::SetTrue)
        .help("Append to the buffer instead of writing at indices")
}

/// Emit a demo entry point (-m/--main).
pub fn main_arg() -> Arg {
    Arg::new("main")
        .short('m')
        .long("main")
        .action(ArgAction::SetTrue)
        .help("Emit a main function that prints a sample timestamp")
}

/// Pretty-print with rustfmt (--fmt).
pub fn fmt_arg() -> Arg {
    Arg::new("fmt")
        .long("fmt")
        .action(ArgAction::SetTrue)
        .help("Run the output through rustfmt")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug, -vv for trace)")
}
