mod cli;
mod commands;

use cli::{CheckParams, FormatsParams, GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("formats", m)) => {
            let params = FormatsParams::from_matches(m);
            commands::formats::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `-v` enables debug, `-vv` trace; `RUST_LOG` overrides both.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
