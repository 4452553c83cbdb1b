//! Project traversal with per-language path exclusions.
//!
//! Built-in exclusions are plain substrings of the relative path, so `build`
//! also hides `rebuild.sh`. User `--exclude` globs are matched against the
//! same `/`-separated relative path.

use crate::extract::Language;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Paths never worth documenting for a language.
pub fn excluded_paths(language: Option<Language>) -> &'static [&'static str] {
    match language {
        Some(Language::Go) => &[".git", "go.sum", "go.mod", ".idea", ".iml"],
        Some(Language::Java) => &[".git", "target", "build", ".idea"],
        Some(Language::Python) => &[".git", "__pycache__", ".pyc", ".env"],
        Some(Language::JavaScript) => &[".git", "node_modules", "package-lock.json"],
        None => &[],
    }
}

/// File extensions kept by `--sources-only`.
pub fn source_extensions(language: Language) -> &'static [&'static str] {
    match language {
        Language::Go => &["go"],
        Language::Java => &["java"],
        Language::Python => &["py", "pyi"],
        Language::JavaScript => &["js", "mjs", "cjs", "jsx"],
    }
}

/// Decides which paths under the root are scanned.
pub struct PathFilter {
    language: Option<Language>,
    globs: Vec<glob::Pattern>,
    sources_only: bool,
}

impl PathFilter {
    pub fn new(language: Option<Language>, excludes: &[String], sources_only: bool) -> Result<Self> {
        let globs = excludes
            .iter()
            .map(|p| {
                glob::Pattern::new(p).with_context(|| format!("invalid exclude pattern: {}", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            language,
            globs,
            sources_only,
        })
    }

    /// Whether a file or directory at `relative` is skipped entirely.
    pub fn is_excluded(&self, relative: &str) -> bool {
        excluded_paths(self.language)
            .iter()
            .any(|needle| relative.contains(needle))
            || self.globs.iter().any(|g| g.matches(relative))
    }

    /// Whether a non-excluded file is scanned.
    fn accepts_file(&self, relative: &str) -> bool {
        if !self.sources_only {
            return true;
        }
        // Sources-only with an unknown language keeps nothing.
        let Some(language) = self.language else {
            return false;
        };
        Path::new(relative)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| source_extensions(language).contains(&ext))
    }
}

/// A file selected for scanning.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub relative_path: String,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn size(&self) -> Option<u64> {
        fs::metadata(&self.path).ok().map(|m| m.len())
    }

    /// Read the file as UTF-8. Unreadable files are logged and yield `None`.
    pub fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                debug!(path = %self.relative_path, "skipping non-UTF-8 file");
                None
            }
            Err(e) => {
                warn!(path = %self.relative_path, error = %e, "skipping unreadable file");
                None
            }
        }
    }
}

/// Walk `root` recursively, returning files sorted in traversal order.
pub fn walk(root: &Path, filter: &PathFilter) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        bail!("project directory not found: {}", root.display());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !filter.is_excluded(&relative_path(root, e)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable path");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = relative_path(root, &entry);
        if !filter.accepts_file(&relative) {
            continue;
        }
        files.push(SourceFile {
            relative_path: relative,
            path: entry.into_path(),
        });
    }

    debug!(count = files.len(), root = %root.display(), "walk complete");
    Ok(files)
}

/// Relative path with `/` separators regardless of platform.
fn relative_path(root: &Path, entry: &DirEntry) -> String {
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
