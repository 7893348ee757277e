use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read the whole puzzle input up front, from `path` if given and from stdin
/// otherwise.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display())),
        None => read_all(std::io::stdin().lock()),
    }
}

fn read_all<R: Read>(mut reader: R) -> anyhow::Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .context("unable to read standard input")?;
    Ok(buf)
}
