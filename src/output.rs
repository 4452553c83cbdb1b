//! Output path resolution and writing.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the rendered document goes.
#[derive(Debug, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Resolve `--output`.
///
/// - absent: `README.<ext>` in the current directory
/// - `-`: stdout
/// - an existing directory, or a path ending in a separator: `README.<ext>`
///   inside it
/// - anything else: that file
pub fn resolve(output: Option<&str>, extension: &str) -> OutputTarget {
    let default_name = format!("README.{}", extension);
    let Some(output) = output else {
        return OutputTarget::File(PathBuf::from(default_name));
    };
    if output == "-" {
        return OutputTarget::Stdout;
    }
    let path = Path::new(output);
    if output.ends_with('/') || output.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        return OutputTarget::File(path.join(default_name));
    }
    OutputTarget::File(path.to_path_buf())
}

/// Write `content`, creating parent directories and overwriting any file.
pub fn write(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))
        }
    }
}
