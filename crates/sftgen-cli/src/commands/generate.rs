use std::fs;
use std::path::{Path, PathBuf};

use sftgen_lib::Config;

use super::run_common::{load_spec_or_exit, report_and_exit};

pub struct GenerateArgs {
    pub spec: String,
    pub output: Option<PathBuf>,
    pub function: String,
    pub module: Option<String>,
    pub extra: bool,
    pub append: bool,
    pub main: bool,
    pub fmt: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let loaded = load_spec_or_exit(&args.spec);

    // Named formats rely on the extra verbs.
    let extra = args.extra || loaded.named.is_some();

    let mut config = Config::new()
        .function_name(&args.function)
        .allow_extra(extra)
        .use_append(args.append)
        .emit_main(args.main)
        .pretty_print(args.fmt)
        .command(command_line());
    if let Some(module) = &args.module {
        config = config.module_name(module);
    }

    let source = match sftgen_lib::compile(&loaded.text, config) {
        Ok(source) => source,
        Err(e) => report_and_exit(&loaded.text, &e, args.color),
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &source) {
                eprintln!("error: cannot write {}: {}", path.display(), e);
                std::process::exit(1);
            }
            log::debug!("wrote {} bytes to {}", source.len(), path.display());
        }
        None => print!("{}", source),
    }
}

/// The invocation, with the program path reduced to its file name.
fn command_line() -> String {
    let mut args = std::env::args();
    let program = args
        .next()
        .as_deref()
        .and_then(|p| Path::new(p).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sftgen".to_string());

    std::iter::once(program)
        .chain(args.map(|arg| quote(&arg)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-quote arguments a shell would split or expand.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
