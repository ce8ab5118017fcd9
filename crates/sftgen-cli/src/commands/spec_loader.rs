//! Resolve the `<SPEC>` argument into spec text.

use std::io::{self, Read};

use super::named::{self, NamedFormat};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read spec from stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Spec text plus the named format it came from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSpec {
    pub text: String,
    pub named: Option<&'static NamedFormat>,
}

/// Load the spec named by `arg`: `-` reads stdin, known names expand.
pub fn load_spec(arg: &str) -> Result<LoadedSpec, LoadError> {
    if arg == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(resolve(strip_line_ending(&text)));
    }
    Ok(resolve(arg))
}

pub fn resolve(text: &str) -> LoadedSpec {
    match named::lookup(text) {
        Some(format) => {
            log::debug!("expanding named format {} to {:?}", format.name, format.spec);
            LoadedSpec {
                text: format.spec.to_string(),
                named: Some(format),
            }
        }
        None => LoadedSpec {
            text: text.to_string(),
            named: None,
        },
    }
}

/// Drop one trailing newline, as left by `echo`.
fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
