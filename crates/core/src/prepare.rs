//! MDX source preparation.
//!
//! Remote sources are frequently authored as loose HTML-flavored Markdown.
//! `prepare` normalizes them before they reach the MDX compiler: line
//! endings become `\n`, and HTML void elements written without a slash
//! (`<br>`, `<hr>`, `<img ...>`) are rewritten to the self-closing form JSX
//! requires. Code fences, indented code, and inline code spans are left
//! untouched. Markdown (`format = "md"`) sources never pass through here.

use crate::fence::{FenceTracker, is_indented_code};

/// HTML void elements that JSX requires to be self-closing.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "source", "wbr"];

/// Normalizes an MDX source. Synchronous and infallible: anything this step
/// cannot fix is forwarded and surfaces later as a compile error.
pub fn prepare(source: &str) -> String {
    let text = normalize_newlines(source);
    let mut out = String::with_capacity(text.len());
    let mut fences = FenceTracker::new();

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if fences.observe(line) || is_indented_code(line) {
            out.push_str(line);
        } else {
            close_void_elements(line, &mut out);
        }
    }

    out
}

fn normalize_newlines(source: &str) -> String {
    if source.contains('\r') {
        source.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        source.to_string()
    }
}

/// Rewrites unclosed void element tags on one line, skipping inline code.
fn close_void_elements(line: &str, out: &mut String) {
    let mut rest = line;
    let mut code_span = 0usize;

    while let Some(pos) = rest.find(['<', '`']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('`') {
            let run = tail.chars().take_while(|c| *c == '`').count();
            out.push_str(&tail[..run]);
            if code_span == 0 {
                code_span = run;
            } else if run == code_span {
                code_span = 0;
            }
            rest = &tail[run..];
            continue;
        }

        if code_span == 0 {
            if let Some((rewritten, consumed)) = rewrite_void_tag(tail) {
                out.push_str(&rewritten);
                rest = &tail[consumed..];
                continue;
            }
        }
        out.push('<');
        rest = &tail[1..];
    }

    out.push_str(rest);
}

/// If `tail` (starting with `<`) opens a void element tag that is not
/// already self-closing, returns the rewritten tag and the consumed length.
fn rewrite_void_tag(tail: &str) -> Option<(String, usize)> {
    let body = &tail[1..];
    let name_len = body.chars().take_while(char::is_ascii_alphabetic).count();
    if name_len == 0 {
        return None;
    }
    let name = body[..name_len].to_ascii_lowercase();
    if !VOID_ELEMENTS.contains(&name.as_str()) {
        return None;
    }
    // The tag name must end at an attribute boundary, not inside a longer word.
    match body[name_len..].chars().next() {
        Some(' ') | Some('\t') | Some('/') | Some('>') => {}
        _ => return None,
    }
    // The tag must close on this line, before any other angle bracket.
    // Angle brackets inside quoted attribute values do not count.
    let close = find_tag_close(body)?;
    let inner = body[..close].trim_end();
    if inner.ends_with('/') {
        return None;
    }
    Some((format!("<{inner} />"), close + 2))
}

/// Byte offset of the `>` closing the tag whose body starts at offset zero,
/// honoring single and double quoted attribute values.
fn find_tag_close(body: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, ch) in body.char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '>' => return Some(idx),
                '<' => return None,
                _ => {}
            },
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_bare_void_elements() {
        assert_eq!(prepare("hello<br>world"), "hello<br />world");
        assert_eq!(prepare("a<hr>b"), "a<hr />b");
    }

    #[test]
    fn keeps_attributes() {
        assert_eq!(
            prepare(r#"<img src="x.png" alt="x">"#),
            r#"<img src="x.png" alt="x" />"#
        );
    }

    #[test]
    fn quoted_angle_brackets_in_attributes() {
        assert_eq!(
            prepare(r#"<img alt="a>b" src="x.png">"#),
            r#"<img alt="a>b" src="x.png" />"#
        );
        assert_eq!(prepare("<br title='>'>"), "<br title='>' />");
    }

    #[test]
    fn already_closed_tags_are_untouched() {
        assert_eq!(prepare("a<br/>b"), "a<br/>b");
        assert_eq!(prepare("a<br />b"), "a<br />b");
    }

    #[test]
    fn non_void_tags_are_untouched() {
        assert_eq!(prepare("<div>text</div>"), "<div>text</div>");
        assert_eq!(prepare("<brand>"), "<brand>");
    }

    #[test]
    fn code_fences_are_skipped() {
        let source = "before<br>\n```html\n<br>\n```\nafter<br>";
        assert_eq!(prepare(source), "before<br />\n```html\n<br>\n```\nafter<br />");
    }

    #[test]
    fn inline_code_is_skipped() {
        assert_eq!(prepare("use `<br>` here<br>"), "use `<br>` here<br />");
    }

    #[test]
    fn indented_code_is_skipped() {
        assert_eq!(prepare("    <br>"), "    <br>");
    }

    #[test]
    fn newlines_are_normalized() {
        assert_eq!(prepare("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn plain_markdown_is_unchanged() {
        assert_eq!(prepare("foo **bar**"), "foo **bar**");
    }
}
