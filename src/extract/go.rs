//! Go: `func Name(params) results {`.

use super::normalize;
use super::Extractor;
use crate::model::FunctionRecord;
use regex::Regex;
use std::sync::LazyLock;

// Everything between the closing paren and the body's brace is the result
// list, kept verbatim: empty, a single type, or a parenthesized tuple.
static RE_FUNC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfunc\s+(\w+)\s*\((.*?)\)\s*(.*?)\s*\{").unwrap());

pub struct GoExtractor;

impl Extractor for GoExtractor {
    fn extract(&self, text: &str) -> Vec<FunctionRecord> {
        RE_FUNC
            .captures_iter(text)
            .map(|caps| normalize::record(&caps[1], &caps[2], &caps[3]))
            .collect()
    }
}
