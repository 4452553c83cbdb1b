//! GitHub-flavored markdown anchor generation for the file index.

use std::collections::HashMap;

/// Hands out heading anchors the way GitHub does, suffixing repeats with
/// `-1`, `-2`, ...
#[derive(Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn slug(&mut self, heading: &str) -> String {
        let base = github_slug(heading);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        slug
    }
}

/// A TOC list item linking to `anchor`.
pub fn render_toc_item(title: &str, anchor: &str) -> String {
    format!("* [{}](#{})", title, anchor)
}

/// GitHub heading anchor slug:
/// - lowercase
/// - drop everything but alphanumerics, spaces, `-` and `_`
/// - spaces become hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
