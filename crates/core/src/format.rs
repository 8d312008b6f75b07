use std::fmt;

/// Effective document format after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Plain Markdown (CommonMark plus GFM), no JSX or ESM constructs.
    Md,
    /// MDX, the default.
    #[default]
    Mdx,
}

impl Format {
    /// Resolves the effective format from a caller-supplied value.
    ///
    /// Only the exact string `"md"` selects Markdown. Anything else,
    /// including an absent or misspelled value, falls back to MDX so
    /// unrecognized formats fail soft rather than hard.
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("md") => Format::Md,
            _ => Format::Mdx,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Md => "md",
            Format::Mdx => "mdx",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_defaults_to_mdx() {
        assert_eq!(Format::resolve(None), Format::Mdx);
    }

    #[test]
    fn exact_md_selects_markdown() {
        assert_eq!(Format::resolve(Some("md")), Format::Md);
        assert_eq!(Format::resolve(Some("mdx")), Format::Mdx);
    }

    #[test]
    fn unknown_values_fall_back_to_mdx() {
        assert_eq!(Format::resolve(Some("xyz")), Format::Mdx);
        assert_eq!(Format::resolve(Some("MD")), Format::Mdx);
        assert_eq!(Format::resolve(Some("markdown")), Format::Mdx);
        assert_eq!(Format::resolve(Some("")), Format::Mdx);
    }
}
