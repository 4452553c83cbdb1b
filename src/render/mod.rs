//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}

/// `name(a, b) ret`, without a trailing space when `ret` is empty.
pub fn signature(name: &str, parameters: &[String], return_type: &str) -> String {
    let mut out = format!("{}({})", name, parameters.join(", "));
    if !return_type.is_empty() {
        out.push(' ');
        out.push_str(return_type);
    }
    out
}
