//! Python: `def name(params)`. No return type is captured.

use super::normalize;
use super::Extractor;
use crate::model::FunctionRecord;
use regex::Regex;
use std::sync::LazyLock;

static RE_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdef\s+(\w+)\s*\((.*?)\)").unwrap());

pub struct PythonExtractor;

impl Extractor for PythonExtractor {
    fn extract(&self, text: &str) -> Vec<FunctionRecord> {
        RE_DEF
            .captures_iter(text)
            .map(|caps| normalize::record(&caps[1], &caps[2], ""))
            .collect()
    }
}
