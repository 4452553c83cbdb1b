//! Function-signature extraction, one regex-based extractor per language.
//!
//! This is a best-effort textual matcher, not a parser. Known limitations:
//!
//! - declarations inside comments and string literals are reported as if
//!   they were real code;
//! - nesting and scope are ignored, so inner functions appear alongside
//!   top-level ones;
//! - forms outside each language's pattern (Go methods with receivers,
//!   multi-line Python signatures, generic Java return types containing
//!   spaces, JS methods and `let`/`var` arrows) are missed.
//!
//! Extraction is total: any text and any language identifier produce a
//! (possibly empty) list, never an error.

pub mod go;
pub mod java;
pub mod javascript;
pub mod normalize;
pub mod python;

use crate::model::FunctionRecord;
use std::fmt;
use tracing::{debug, warn};

/// Inputs longer than this are not scanned.
pub const MAX_SOURCE_BYTES: usize = 1024 * 1024;

/// Converts source text into function records, in order of appearance.
pub trait Extractor: Sync {
    fn extract(&self, text: &str) -> Vec<FunctionRecord>;
}

/// The closed set of languages with an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Java,
    Python,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Go,
        Language::Java,
        Language::Python,
        Language::JavaScript,
    ];

    /// The identifier accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Java => "java",
            Language::Python => "python",
            Language::JavaScript => "javascript",
        }
    }

    pub fn extractor(self) -> &'static dyn Extractor {
        match self {
            Language::Go => &go::GoExtractor,
            Language::Java => &java::JavaExtractor,
            Language::Python => &python::PythonExtractor,
            Language::JavaScript => &javascript::JavaScriptExtractor,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Look up a language by its exact, case-sensitive identifier.
pub fn resolve(language_id: &str) -> Option<Language> {
    Language::ALL.into_iter().find(|lang| lang.id() == language_id)
}

/// Extract signatures from `text`, returning nothing for unknown languages.
pub fn extract(text: &str, language_id: &str) -> Vec<FunctionRecord> {
    extract_bounded(text, language_id, MAX_SOURCE_BYTES)
}

/// Like [`extract`], but skips input longer than `max_bytes`.
pub fn extract_bounded(text: &str, language_id: &str, max_bytes: usize) -> Vec<FunctionRecord> {
    let Some(language) = resolve(language_id) else {
        debug!(language = language_id, "no extractor for language");
        return Vec::new();
    };
    if text.len() > max_bytes {
        warn!(
            bytes = text.len(),
            limit = max_bytes,
            "source exceeds size limit, not extracting"
        );
        return Vec::new();
    }
    language.extractor().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_GO: &str = "package main\n\nfunc A(x int) int {\n}\n\nfunc B() {\n}\n";

    #[test]
    fn resolve_is_exact_and_case_sensitive() {
        assert_eq!(resolve("go"), Some(Language::Go));
        assert_eq!(resolve("javascript"), Some(Language::JavaScript));
        assert_eq!(resolve("Go"), None);
        assert_eq!(resolve("js"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn every_language_round_trips_its_id() {
        for lang in Language::ALL {
            assert_eq!(resolve(lang.id()), Some(lang));
            assert_eq!(lang.to_string(), lang.id());
        }
    }

    #[test]
    fn empty_text_yields_nothing_for_every_language() {
        for lang in Language::ALL {
            assert!(extract("", lang.id()).is_empty(), "{lang}");
        }
    }

    #[test]
    fn text_without_declarations_yields_nothing() {
        let text = "just some prose\nx = 1\nprint(x)\n";
        for lang in Language::ALL {
            assert!(extract(text, lang.id()).is_empty(), "{lang}");
        }
    }

    #[test]
    fn unsupported_language_yields_nothing() {
        assert!(extract(SAMPLE_GO, "cobol").is_empty());
        assert!(extract("def f(x):\n", "Python").is_empty());
    }

    #[test]
    fn extraction_is_repeatable() {
        let first = extract(SAMPLE_GO, "go");
        let second = extract(SAMPLE_GO, "go");
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first[0].name, "A");
        assert_eq!(first[1].name, "B");
    }

    #[test]
    fn oversized_input_is_skipped() {
        assert!(extract_bounded(SAMPLE_GO, "go", 10).is_empty());
        assert_eq!(extract_bounded(SAMPLE_GO, "go", SAMPLE_GO.len()).len(), 2);
    }
}
