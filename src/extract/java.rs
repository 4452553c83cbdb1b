//! Java: `[modifiers] Type name(params)`.
//!
//! Unlike Go, the return type is the token *before* the name and no body
//! brace is required, so abstract and interface methods match too.

use super::normalize;
use super::Extractor;
use crate::model::FunctionRecord;
use regex::Regex;
use std::sync::LazyLock;

static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:\b(?:public|protected|private|static|final|abstract|synchronized|native)\s+)*",
        r"\b([A-Za-z_][\w<>\[\]]*)[ \t]+(\w+)\s*\(([^)]*)\)"
    ))
    .unwrap()
});

const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
];

// Statements shaped like `keyword call(...)`.
const STATEMENT_KEYWORDS: &[&str] = &["return", "new", "throw", "else", "case", "yield"];

pub struct JavaExtractor;

impl Extractor for JavaExtractor {
    fn extract(&self, text: &str) -> Vec<FunctionRecord> {
        RE_METHOD
            .captures_iter(text)
            .filter(|caps| !STATEMENT_KEYWORDS.contains(&&caps[1]))
            .map(|caps| {
                // `public Foo(...)`: a constructor, the "type" is a modifier.
                let return_type = if MODIFIERS.contains(&&caps[1]) {
                    ""
                } else {
                    &caps[1]
                };
                normalize::record(&caps[2], &caps[3], return_type)
            })
            .collect()
    }
}
