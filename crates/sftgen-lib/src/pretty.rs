//! Optional pretty-printing through `rustfmt`.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::{Error, Result};

/// Run `source` through `rustfmt` and return the reformatted text.
///
/// The source is piped through stdin, so nothing touches the filesystem.
pub fn reformat(source: &str) -> Result<String> {
    let mut child = Command::new("rustfmt")
        .args(["--edition", "2021", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Reformat(format!("cannot run rustfmt: {e}")))?;

    {
        let Some(mut stdin) = child.stdin.take() else {
            return Err(Error::Reformat("rustfmt stdin unavailable".to_string()));
        };
        stdin
            .write_all(source.as_bytes())
            .map_err(|e| Error::Reformat(format!("cannot write to rustfmt: {e}")))?;
    }

    let out = child
        .wait_with_output()
        .map_err(|e| Error::Reformat(format!("rustfmt command failed: {e}")))?;
    if !out.status.success() {
        return Err(Error::Reformat(format!(
            "rustfmt: {}",
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    String::from_utf8(out.stdout)
        .map_err(|e| Error::Reformat(format!("rustfmt produced invalid UTF-8: {e}")))
}
