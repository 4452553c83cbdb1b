//! JavaScript: `function name(params)` and `const name = (params) =>`.
//!
//! Both forms are alternatives of one pattern so matches come out in source
//! order. Whichever alternative's name group participated decides which
//! parameter group belongs to it.

use super::normalize;
use super::Extractor;
use crate::model::FunctionRecord;
use regex::Regex;
use std::sync::LazyLock;

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\bfunction\s+(\w+)\s*\((.*?)\)",
        r"|\bconst\s+(\w+)\s*=\s*\((.*?)\)\s*=>"
    ))
    .unwrap()
});

pub struct JavaScriptExtractor;

impl Extractor for JavaScriptExtractor {
    fn extract(&self, text: &str) -> Vec<FunctionRecord> {
        RE_FUNCTION
            .captures_iter(text)
            .filter_map(|caps| {
                let (name, params) = match caps.get(1) {
                    Some(name) => (name, caps.get(2)?),
                    None => (caps.get(3)?, caps.get(4)?),
                };
                Some(normalize::record(name.as_str(), params.as_str(), ""))
            })
            .collect()
    }
}
