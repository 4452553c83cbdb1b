//! README-style markdown renderer.

use crate::model::*;
use crate::render::{signature, Renderer};
use crate::toc::{self, Slugger};

pub struct MarkdownRenderer;

const DESCRIPTION_PLACEHOLDER: &str = "Add project description here.";
const USAGE_PLACEHOLDER: &str = "Add usage instructions here.";

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut slugger = Slugger::default();

        lines.push(format!("# {}\n", escape(&doc.title)));
        slugger.slug(&doc.title);

        for (heading, placeholder) in [
            ("Description", DESCRIPTION_PLACEHOLDER),
            ("Usage", USAGE_PLACEHOLDER),
        ] {
            lines.push(format!("## {}\n", heading));
            lines.push(placeholder.to_string());
            lines.push(String::new());
            slugger.slug(heading);
        }

        lines.push("## Files\n".to_string());
        slugger.slug("Files");

        if doc.files.is_empty() {
            lines.push("_No files found._".to_string());
            lines.push(String::new());
            return finish(lines);
        }

        // Index first, so every anchor is assigned in heading order.
        let anchors: Vec<String> = doc
            .files
            .iter()
            .map(|f| slugger.slug(&f.relative_path))
            .collect();
        for (file, anchor) in doc.files.iter().zip(&anchors) {
            lines.push(toc::render_toc_item(&escape(&file.relative_path), anchor));
        }
        lines.push(String::new());

        for file in &doc.files {
            render_file(&mut lines, file);
        }

        finish(lines)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn render_file(lines: &mut Vec<String>, file: &FileRecord) {
    lines.push(format!("### {}\n", escape(&file.relative_path)));
    if file.functions.is_empty() {
        lines.push("_No functions found._".to_string());
    }
    for func in &file.functions {
        lines.push(format!("- {}", render_function(func)));
    }
    lines.push(String::new());
}

/// `**name**(a, b) ret` with markdown-significant characters escaped.
fn render_function(func: &FunctionRecord) -> String {
    let params: Vec<String> = func.parameters.iter().map(|p| escape(p)).collect();
    signature(
        &format!("**{}**", escape(&func.name)),
        &params,
        &escape(&func.return_type),
    )
}

/// Backslash-escape inline markdown so names render literally: `*` (Go
/// pointers), `_` (Python dunders), `<`/`>` (generics), brackets and
/// backticks. Anchors are slugged from the raw text, which is what GitHub
/// sees after unescaping.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '<' | '>' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str, params: &[&str], ret: &str) -> FunctionRecord {
        FunctionRecord {
            name: name.to_string(),
            parameters: params.iter().map(|p| p.to_string()).collect(),
            return_type: ret.to_string(),
        }
    }

    #[test]
    fn full_document() {
        let doc = Document {
            title: "demo".into(),
            language: "go".into(),
            files: vec![
                FileRecord {
                    relative_path: "main.go".into(),
                    functions: vec![func("Add", &["a int", "b int"], "int"), func("Noop", &[], "")],
                },
                FileRecord {
                    relative_path: "doc.txt".into(),
                    functions: vec![],
                },
            ],
        };

        let expected = "\
# demo

## Description

Add project description here.

## Usage

Add usage instructions here.

## Files

* [main.go](#maingo)
* [doc.txt](#doctxt)

### main.go

- **Add**(a int, b int) int
- **Noop**()

### doc.txt

_No functions found._
";
        assert_eq!(MarkdownRenderer.render(&doc), expected);
    }

    #[test]
    fn no_files() {
        let doc = Document {
            title: "empty".into(),
            language: "go".into(),
            files: vec![],
        };
        let out = MarkdownRenderer.render(&doc);
        assert!(out.ends_with("## Files\n\n_No files found._\n"));
    }

    #[test]
    fn pointers_and_generics_are_escaped() {
        assert_eq!(
            render_function(&func("Load", &["p *Config"], "*Result")),
            "**Load**(p \\*Config) \\*Result"
        );
        assert_eq!(
            render_function(&func("names", &[], "List<String>")),
            "**names**() List\\<String\\>"
        );
    }

    #[test]
    fn file_named_like_a_fixed_heading_gets_a_distinct_anchor() {
        let doc = Document {
            title: "t".into(),
            language: "python".into(),
            files: vec![FileRecord {
                relative_path: "usage".into(),
                functions: vec![],
            }],
        };
        assert!(MarkdownRenderer.render(&doc).contains("* [usage](#usage-1)"));
    }

    #[test]
    fn dunder_names_render_literally() {
        let doc = Document {
            title: "pkgs".into(),
            language: "python".into(),
            files: vec![FileRecord {
                relative_path: "pkg/__init__.py".into(),
                functions: vec![func("__init__", &["self", "user_id"], "")],
            }],
        };
        let out = MarkdownRenderer.render(&doc);
        // Link text is escaped, the anchor is the slug of the raw path.
        assert!(out.contains("* [pkg/\\_\\_init\\_\\_.py](#pkg__init__py)\n"));
        assert!(out.contains("### pkg/\\_\\_init\\_\\_.py\n"));
        assert!(out.contains("- **\\_\\_init\\_\\_**(self, user\\_id)\n"));
    }

    #[test]
    fn title_is_escaped() {
        let doc = Document {
            title: "__proj__".into(),
            language: "python".into(),
            files: vec![],
        };
        assert!(MarkdownRenderer
            .render(&doc)
            .starts_with("# \\_\\_proj\\_\\_\n"));
    }

    #[test]
    fn backticks_brackets_and_backslashes_are_escaped() {
        assert_eq!(escape("a`b[0]\\c"), "a\\`b\\[0\\]\\\\c");
    }
}
