use sftgen_lib::{Config, Generator};

use super::run_common::{load_spec_or_exit, report_and_exit};

pub struct CheckArgs {
    pub spec: String,
    pub extra: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let loaded = load_spec_or_exit(&args.spec);
    let extra = args.extra || loaded.named.is_some();

    if let Err(e) = Generator::new(&loaded.text, Config::new().allow_extra(extra)) {
        report_and_exit(&loaded.text, &e, args.color);
    }

    // Silent on success (like cargo check)
}
