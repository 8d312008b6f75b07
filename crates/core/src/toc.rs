//! Table-of-contents collection.
//!
//! Heading records are gathered from the prepared source before compilation
//! and routed into the result scope under the data key named by the merged
//! options (by default `"toc"`).

use serde::Serialize;

use crate::fence::{FenceTracker, is_indented_code};
use crate::slug::Slugger;

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    /// Heading text with inline markup removed.
    pub value: String,
    /// Anchor reference: `#` plus the heading slug.
    pub href: String,
    /// Heading level (1-6).
    pub depth: u8,
}

/// Collects ATX headings from a document, skipping code blocks.
pub fn collect_toc(source: &str) -> Vec<TocItem> {
    let mut items = Vec::new();
    let mut fences = FenceTracker::new();
    let mut slugger = Slugger::new();

    for line in source.lines() {
        if fences.observe(line) || is_indented_code(line) {
            continue;
        }
        if let Some((depth, raw)) = parse_atx(line) {
            let value = plain_text(raw);
            let slug = slugger.slug(&value);
            items.push(TocItem {
                value,
                href: format!("#{slug}"),
                depth,
            });
        }
    }

    items
}

/// Parses an ATX heading line into (depth, raw text).
fn parse_atx(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim_start();
    let hashes = trimmed.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    // "#hashtag" is not a heading; "#" alone is an empty one.
    if !rest.is_empty() && !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }
    Some((hashes as u8, strip_closing_sequence(rest.trim())))
}

/// Drops a trailing `#` run when preceded by a space, per CommonMark.
/// `## Title ##` becomes `Title`, while `# C#` keeps its hash.
fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.len() < text.len() && without.ends_with(' ') {
        without.trim_end()
    } else {
        text
    }
}

/// Strips inline Markdown from heading text: emphasis markers, inline code
/// backticks, link/image syntax, and escape backslashes.
fn plain_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '`' => {
                for next in chars.by_ref() {
                    if next == '`' {
                        break;
                    }
                    out.push(next);
                }
            }
            '*' | '_' => {}
            '!' if chars.peek() == Some(&'[') => {}
            '[' => {}
            ']' => {
                // Drop the "(destination)" that follows link or image text.
                if chars.peek() == Some(&'(') {
                    chars.next();
                    let mut depth = 1;
                    for next in chars.by_ref() {
                        match next {
                            '(' => depth += 1,
                            ')' => {
                                depth -= 1;
                                if depth == 0 {
                                    break;
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_headings_with_depth_and_href() {
        let source = "# Title\n\ntext\n\n## Section One\n\n### Nested\n";
        let toc = collect_toc(source);
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[0].depth, 1);
        assert_eq!(toc[0].value, "Title");
        assert_eq!(toc[0].href, "#title");
        assert_eq!(toc[1].depth, 2);
        assert_eq!(toc[1].href, "#section-one");
        assert_eq!(toc[2].depth, 3);
    }

    #[test]
    fn skips_headings_inside_fences_and_indented_code() {
        let source = "# Real\n\n```\n# fenced\n```\n\n    # indented\n\n## Also Real\n";
        let toc = collect_toc(source);
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].value, "Real");
        assert_eq!(toc[1].value, "Also Real");
    }

    #[test]
    fn duplicate_headings_get_unique_anchors() {
        let toc = collect_toc("## Setup\n\n## Setup\n");
        assert_eq!(toc[0].href, "#setup");
        assert_eq!(toc[1].href, "#setup-1");
    }

    #[test]
    fn inline_markup_is_stripped() {
        let toc = collect_toc("# **Bold** `code` [link](https://example.com)\n");
        assert_eq!(toc[0].value, "Bold code link");
    }

    #[test]
    fn image_alt_text_is_kept() {
        let toc = collect_toc("## See ![Alt Text](image.png)\n");
        assert_eq!(toc[0].value, "See Alt Text");
    }

    #[test]
    fn trailing_hash_run_is_stripped_when_spaced() {
        assert_eq!(parse_atx("## Heading ##").unwrap().1, "Heading");
        assert_eq!(parse_atx("# C#").unwrap().1, "C#");
        assert_eq!(parse_atx("# Heading#").unwrap().1, "Heading#");
    }

    #[test]
    fn hashtags_are_not_headings() {
        assert!(parse_atx("#hashtag").is_none());
        assert!(parse_atx("plain").is_none());
        assert!(parse_atx("####### seven").is_none());
    }
}
