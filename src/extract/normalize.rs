//! Turns raw regex captures into canonical [`FunctionRecord`]s.

use crate::model::FunctionRecord;

/// Split a raw parameter list on `,`, trimming each entry.
///
/// Blank entries are dropped, so an empty list (`"()"`) normalizes to `[]`
/// rather than `[""]`, and a trailing comma does not invent a parameter.
pub fn split_params(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a record from the three raw captures of a declaration.
pub fn record(name: &str, raw_params: &str, return_type: &str) -> FunctionRecord {
    FunctionRecord {
        name: name.trim().to_string(),
        parameters: split_params(raw_params),
        return_type: return_type.trim().to_string(),
    }
}
