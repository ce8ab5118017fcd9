//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::formats::FormatsArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub spec: String,
    pub output: Option<PathBuf>,
    pub function: String,
    pub module: Option<String>,
    pub extra: bool,
    pub append: bool,
    pub main: bool,
    pub fmt: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            spec: m.get_one::<String>("spec").cloned().unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            function: m
                .get_one::<String>("function")
                .cloned()
                .unwrap_or_else(|| sftgen_lib::config::DEFAULT_FUNCTION_NAME.to_string()),
            module: m.get_one::<String>("module").cloned(),
            extra: m.get_flag("extra"),
            append: m.get_flag("append"),
            main: m.get_flag("main"),
            fmt: m.get_flag("fmt"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            spec: p.spec,
            output: p.output,
            function: p.function,
            module: p.module,
            extra: p.extra,
            append: p.append,
            main: p.main,
            fmt: p.fmt,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub spec: String,
    pub extra: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            spec: m.get_one::<String>("spec").cloned().unwrap_or_default(),
            extra: m.get_flag("extra"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            spec: p.spec,
            extra: p.extra,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FormatsParams {
    pub json: bool,
}

impl FormatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<FormatsParams> for FormatsArgs {
    fn from(p: FormatsParams) -> Self {
        Self { json: p.json }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
