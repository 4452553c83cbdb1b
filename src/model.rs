//! Data model for extracted signatures, format-agnostic.

/// One function or method signature found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// Parameters as written, type annotations included. Never `[""]`.
    pub parameters: Vec<String>,
    /// Trailing or leading type text, empty when the language has none.
    pub return_type: String,
}

/// A scanned file and the signatures found in it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the scan root, always `/`-separated.
    pub relative_path: String,
    pub functions: Vec<FunctionRecord>,
}

/// Everything a renderer needs for one output document.
#[derive(Debug)]
pub struct Document {
    pub title: String,
    pub language: String,
    pub files: Vec<FileRecord>,
}
