//! Shared helpers for commands that compile a spec.

use sftgen_lib::{Error, diagnostics};

use super::spec_loader::{LoadedSpec, load_spec};

/// Load the spec argument or exit with an error.
pub fn load_spec_or_exit(arg: &str) -> LoadedSpec {
    load_spec(arg).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Print `error` for `spec` to stderr and exit.
pub fn report_and_exit(spec: &str, error: &Error, color: bool) -> ! {
    if error.is_spec_error() {
        eprintln!("{}", diagnostics::render(spec, error, color));
    } else {
        eprintln!("error: {}", error);
    }
    std::process::exit(1);
}
