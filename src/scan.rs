//! Parallel extraction over discovered files.

use crate::discover::SourceFile;
use crate::extract;
use crate::model::FileRecord;
use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Read and extract every file on a pool of `jobs` workers (`0` = one per CPU).
///
/// Records come back in the order of `files`. Files that cannot be read as
/// UTF-8 are dropped; files over `max_bytes` are kept with no functions.
pub fn scan(
    files: &[SourceFile],
    language_id: &str,
    max_bytes: usize,
    jobs: usize,
) -> Result<Vec<FileRecord>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("failed to start worker pool")?;

    let records = pool.install(|| {
        files
            .par_iter()
            .filter_map(|file| scan_file(file, language_id, max_bytes))
            .collect::<Vec<_>>()
    });

    debug!(
        files = records.len(),
        functions = records.iter().map(|r| r.functions.len()).sum::<usize>(),
        "scan complete"
    );
    Ok(records)
}

fn scan_file(file: &SourceFile, language_id: &str, max_bytes: usize) -> Option<FileRecord> {
    if file.size().is_some_and(|len| len > max_bytes as u64) {
        warn!(path = %file.relative_path, limit = max_bytes, "file too large, listing without functions");
        return Some(FileRecord {
            relative_path: file.relative_path.clone(),
            functions: Vec::new(),
        });
    }
    let text = file.read()?;
    let functions = if max_bytes == extract::MAX_SOURCE_BYTES {
        extract::extract(&text, language_id)
    } else {
        extract::extract_bounded(&text, language_id, max_bytes)
    };
    Some(FileRecord {
        relative_path: file.relative_path.clone(),
        functions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source(dir: &TempDir, name: &str, content: &[u8]) -> SourceFile {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        SourceFile {
            relative_path: name.to_string(),
            path,
        }
    }

    #[test]
    fn results_keep_input_order() {
        let dir = TempDir::new().unwrap();
        let files: Vec<_> = (0..32)
            .map(|i| {
                let body = format!("def f{i}(x):\n    pass\n");
                source(&dir, &format!("m{i:02}.py"), body.as_bytes())
            })
            .collect();

        let records = scan(&files, "python", extract::MAX_SOURCE_BYTES, 4).unwrap();
        assert_eq!(records.len(), 32);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.relative_path, format!("m{i:02}.py"));
            assert_eq!(record.functions[0].name, format!("f{i}"));
        }
    }

    #[test]
    fn default_limit_matches_direct_extraction() {
        let dir = TempDir::new().unwrap();
        let text = "function a(x) {}\nconst b = (y, z) => y + z;\n";
        let files = vec![source(&dir, "app.js", text.as_bytes())];

        let records = scan(&files, "javascript", extract::MAX_SOURCE_BYTES, 1).unwrap();
        assert_eq!(records[0].functions, extract::extract(text, "javascript"));
        assert_eq!(records[0].functions.len(), 2);
    }

    #[test]
    fn custom_limit_applies_to_read_text() {
        let dir = TempDir::new().unwrap();
        let files = vec![source(&dir, "a.py", b"def a():\n    pass\n")];
        let records = scan(&files, "python", 64, 1).unwrap();
        assert_eq!(records[0].functions[0].name, "a");
    }

    #[test]
    fn oversized_files_are_listed_empty() {
        let dir = TempDir::new().unwrap();
        let files = vec![source(&dir, "big.go", b"func Big() {\n}\n")];
        let records = scan(&files, "go", 4, 1).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].functions.is_empty());
    }

    #[test]
    fn binary_files_are_dropped() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            source(&dir, "a.go", b"func A() {\n}\n"),
            source(&dir, "logo.png", &[0x89, 0x50, 0xff, 0xfe]),
        ];
        let records = scan(&files, "go", extract::MAX_SOURCE_BYTES, 0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relative_path, "a.go");
    }

    #[test]
    fn unsupported_language_lists_files_without_functions() {
        let dir = TempDir::new().unwrap();
        let files = vec![source(&dir, "a.go", b"func A() {\n}\n")];
        let records = scan(&files, "cobol", extract::MAX_SOURCE_BYTES, 1).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].functions.is_empty());
    }
}
