//! Line source and line sink at the process boundary
//!
//! The whole input is read before reduction starts; output is written in one go.

use crate::error::{LogsiftError, Result};
use std::io::{self, Read, Write};
use std::path::Path;

/// Read the full input from a named file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => read_from(io::stdin().lock(), "stdin"),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LogsiftError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => LogsiftError::InputRead {
            source: e,
            context: format!("{}", path.display()),
        },
    })
}

/// Read everything from a reader as UTF-8 text
pub fn read_from(mut reader: impl Read, name: &str) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| LogsiftError::InputRead {
            source: e,
            context: name.to_string(),
        })?;
    Ok(text)
}

/// Write text to a named file verbatim, or to stdout followed by a newline
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text).map_err(|e| LogsiftError::OutputWrite {
            source: e,
            context: format!("{}", path.display()),
        }),
        None => write_line_to(io::stdout().lock(), text, "stdout"),
    }
}

/// Write text plus a trailing newline and flush
pub fn write_line_to(mut writer: impl Write, text: &str, name: &str) -> Result<()> {
    writeln!(writer, "{}", text)
        .and_then(|_| writer.flush())
        .map_err(|e| LogsiftError::OutputWrite {
            source: e,
            context: name.to_string(),
        })
}
