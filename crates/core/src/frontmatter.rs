//! YAML frontmatter extraction.
//!
//! Frontmatter is a leading `---` fenced YAML block. It is extracted before
//! compilation because neither delegate surfaces it as structured data.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Parsed frontmatter plus the byte offset where the document body begins.
#[derive(Debug)]
pub struct Frontmatter {
    /// Frontmatter data as a JSON object (empty when no block is present).
    pub value: JsonValue,
    /// Byte offset of the first body character in the original input.
    pub body_start: usize,
}

impl Frontmatter {
    fn empty() -> Self {
        Self {
            value: JsonValue::Object(Default::default()),
            body_start: 0,
        }
    }
}

/// Errors emitted while locating or parsing a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening `---` fence without a closing one.
    #[error("unterminated frontmatter block: missing closing '---'")]
    Unterminated,
    /// The block is not valid YAML.
    #[error("frontmatter is not valid YAML: {0}")]
    Yaml(String),
    /// The YAML root is a scalar or sequence instead of a mapping.
    #[error("frontmatter root must be a YAML mapping")]
    NotAMapping,
}

/// Extracts YAML frontmatter from a document.
///
/// A BOM and leading blank lines are tolerated before the opening fence.
/// Documents without a frontmatter block return an empty mapping and a
/// `body_start` of zero.
pub fn extract_frontmatter(source: &str) -> Result<Frontmatter, FrontmatterError> {
    let (text, bom) = match source.strip_prefix('\u{feff}') {
        Some(stripped) => (stripped, '\u{feff}'.len_utf8()),
        None => (source, 0),
    };

    let mut cursor = 0;
    let open_end = loop {
        let Some((line, next)) = take_line(text, cursor) else {
            return Ok(Frontmatter::empty());
        };
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            cursor = next;
            continue;
        }
        if line != "---" {
            return Ok(Frontmatter::empty());
        }
        break next;
    };

    let mut scan = open_end;
    loop {
        let Some((line, next)) = take_line(text, scan) else {
            return Err(FrontmatterError::Unterminated);
        };
        if line.trim_end_matches('\r') == "---" {
            let block = &text[open_end..scan];
            return Ok(Frontmatter {
                value: parse_block(block)?,
                body_start: bom + next,
            });
        }
        scan = next;
    }
}

fn parse_block(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(JsonValue::Object(Default::default()));
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Yaml(err.to_string()))?;
    let value =
        serde_json::to_value(yaml).map_err(|err| FrontmatterError::Yaml(err.to_string()))?;

    match value {
        JsonValue::Null => Ok(JsonValue::Object(Default::default())),
        JsonValue::Object(_) => Ok(value),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

/// Returns the line starting at `start` and the offset of the next line.
fn take_line(text: &str, start: usize) -> Option<(&str, usize)> {
    if start >= text.len() {
        return None;
    }
    match text[start..].find('\n') {
        Some(pos) => Some((&text[start..start + pos], start + pos + 1)),
        None => Some((&text[start..], text.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_frontmatter_yields_empty_mapping() {
        let result = extract_frontmatter("# Title\nBody").unwrap();
        assert_eq!(result.body_start, 0);
        assert_eq!(result.value, JsonValue::Object(Default::default()));
    }

    #[test]
    fn parses_mapping_and_body_offset() {
        let input = "---\nhello: world\ntags:\n  - one\n---\n# Body";
        let result = extract_frontmatter(input).unwrap();
        assert_eq!(result.value["hello"], "world");
        assert_eq!(result.body_start, input.find("# Body").unwrap());
    }

    #[test]
    fn empty_block_is_an_empty_mapping() {
        let input = "---\n---\nBody";
        let result = extract_frontmatter(input).unwrap();
        assert_eq!(result.value, JsonValue::Object(Default::default()));
        assert_eq!(result.body_start, input.find("Body").unwrap());
    }

    #[test]
    fn bom_and_blank_lines_before_fence_are_tolerated() {
        let input = "\u{feff}\n  \n---\nfoo: bar\n---\nBody";
        let result = extract_frontmatter(input).unwrap();
        assert_eq!(result.value["foo"], "bar");
        assert_eq!(result.body_start, input.find("Body").unwrap());
    }

    #[test]
    fn unterminated_block_errors() {
        let err = extract_frontmatter("---\ntitle: oops").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn invalid_yaml_errors() {
        let err = extract_frontmatter("---\nkey: [unterminated\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Yaml(_)), "{err:?}");
    }

    #[test]
    fn scalar_root_is_rejected() {
        let err = extract_frontmatter("---\njust a string\n---\nBody").unwrap_err();
        assert!(matches!(err, FrontmatterError::NotAMapping));
    }
}
