//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sftgen")
        .about("Compile strftime-style format specs into Rust formatting functions")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(formats_command())
}

/// Generate Rust source for a spec.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate a formatting function for a spec")
        .override_usage(
            "\
  sftgen generate <SPEC> [-o <FILE>]
  sftgen generate <NAMED_FORMAT>
  echo '%F' | sftgen generate -",
        )
        .after_help(
            r#"EXAMPLES:
  sftgen generate '%Y-%m-%d'                  # print to stdout
  sftgen generate RFC3339 -o src/rfc3339.rs   # named format, extras enabled
  sftgen generate '%H:%M' -f clock --append   # push bytes onto the buffer
  sftgen generate '%c' -m --fmt               # runnable demo, rustfmt'd"#,
        )
        .arg(spec_arg())
        .arg(output_file_arg())
        .arg(function_arg())
        .arg(module_arg())
        .arg(extra_arg())
        .arg(append_arg())
        .arg(main_arg())
        .arg(fmt_arg())
        .arg(color_arg())
}

/// Validate a spec without generating code.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a spec")
        .override_usage(
            "\
  sftgen check <SPEC>
  sftgen check <SPEC> --extra",
        )
        .arg(spec_arg())
        .arg(extra_arg())
        .arg(color_arg())
}

/// List the named formats.
pub fn formats_command() -> Command {
    Command::new("formats")
        .about("List named formats")
        .arg(json_arg())
}
