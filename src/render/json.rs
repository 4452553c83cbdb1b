//! JSON renderer — structured output for tooling integration.

use crate::model::*;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str(&format!("  \"title\": \"{}\",\n", json_escape(&doc.title)));
        out.push_str(&format!(
            "  \"language\": \"{}\",\n",
            json_escape(&doc.language)
        ));

        if doc.files.is_empty() {
            out.push_str("  \"files\": []\n}\n");
            return out;
        }

        out.push_str("  \"files\": [\n");
        for (i, file) in doc.files.iter().enumerate() {
            out.push_str(&render_file_json(file));
            out.push_str(if i < doc.files.len() - 1 { ",\n" } else { "\n" });
        }
        out.push_str("  ]\n");
        out.push_str("}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_file_json(file: &FileRecord) -> String {
    let mut out = String::new();
    out.push_str("    {\n");
    out.push_str(&format!(
        "      \"path\": \"{}\",\n",
        json_escape(&file.relative_path)
    ));

    if file.functions.is_empty() {
        out.push_str("      \"functions\": []\n    }");
        return out;
    }

    out.push_str("      \"functions\": [\n");
    for (i, func) in file.functions.iter().enumerate() {
        let comma = if i < file.functions.len() - 1 { "," } else { "" };
        out.push_str(&format!(
            "        {{ \"name\": \"{}\", \"parameters\": {}, \"return_type\": \"{}\" }}{}\n",
            json_escape(&func.name),
            string_array(&func.parameters),
            json_escape(&func.return_type),
            comma
        ));
    }
    out.push_str("      ]\n");
    out.push_str("    }");
    out
}

fn string_array(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", json_escape(item)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

fn json_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
