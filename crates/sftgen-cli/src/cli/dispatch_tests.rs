//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Defaults: function name and color fall back sensibly
//! 3. Root command: subcommands and the global verbosity flag

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, formats_command, generate_command};
use crate::commands::generate::GenerateArgs;

#[test]
fn generate_extracts_all_flags() {
    let cmd = generate_command();
    let result = cmd.try_get_matches_from([
        "generate",
        "%Y-%m-%d",
        "-o",
        "out.rs",
        "-f",
        "stamp",
        "-p",
        "formats",
        "--extra",
        "--append",
        "-m",
        "--fmt",
        "--color",
        "never",
    ]);
    assert!(result.is_ok(), "generate should parse: {:?}", result.err());

    let params = GenerateParams::from_matches(&result.unwrap());
    assert_eq!(params.spec, "%Y-%m-%d");
    assert_eq!(params.output, Some(PathBuf::from("out.rs")));
    assert_eq!(params.function, "stamp");
    assert_eq!(params.module.as_deref(), Some("formats"));
    assert!(params.extra);
    assert!(params.append);
    assert!(params.main);
    assert!(params.fmt);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn generate_defaults() {
    let cmd = generate_command();
    let m = cmd.try_get_matches_from(["generate", "%c"]).unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.function, "format_time");
    assert_eq!(params.output, None);
    assert_eq!(params.module, None);
    assert!(!params.extra);
    assert!(!params.append);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn generate_params_convert_to_args() {
    let cmd = generate_command();
    let m = cmd
        .try_get_matches_from(["generate", "%c", "--color", "always"])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.spec, "%c");
    assert!(args.color);
}

#[test]
fn generate_requires_spec() {
    let cmd = generate_command();
    assert!(cmd.try_get_matches_from(["generate"]).is_err());
}

#[test]
fn generate_accepts_stdin_marker() {
    let cmd = generate_command();
    let m = cmd.try_get_matches_from(["generate", "-"]).unwrap();
    assert_eq!(GenerateParams::from_matches(&m).spec, "-");
}

#[test]
fn generate_rejects_unknown_color() {
    let cmd = generate_command();
    assert!(
        cmd.try_get_matches_from(["generate", "%c", "--color", "sometimes"])
            .is_err()
    );
}

#[test]
fn check_extracts_params() {
    let cmd = check_command();
    let m = cmd
        .try_get_matches_from(["check", "%q", "--extra"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.spec, "%q");
    assert!(params.extra);
}

#[test]
fn check_does_not_accept_generate_flags() {
    let cmd = check_command();
    assert!(cmd.try_get_matches_from(["check", "%c", "--append"]).is_err());
}

#[test]
fn formats_json_flag() {
    let cmd = formats_command();
    let m = cmd.try_get_matches_from(["formats", "--json"]).unwrap();
    assert!(FormatsParams::from_matches(&m).json);
}

#[test]
fn root_has_global_verbosity() {
    let m = build_cli()
        .try_get_matches_from(["sftgen", "generate", "%c", "-vv"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);
    assert_eq!(m.subcommand_name(), Some("generate"));
}

#[test]
fn root_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["sftgen"]).is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    assert!(help.contains("generate"));
    assert!(help.contains("check"));
    assert!(help.contains("formats"));
}
