//! Per-format parse presets.
//!
//! The preset is the bundled "plugin configuration" of the opinionated
//! wrappers: a fixed parser feature profile keyed by format. During option
//! merging the preset replaces any caller-supplied profile; callers wanting
//! a different profile must use the delegate compilers directly.

use crate::format::Format;

/// Parser feature profile applied to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseProfile {
    /// GitHub Flavored Markdown constructs (tables, strikethrough, task
    /// lists, autolink literals, footnotes).
    pub gfm: bool,
    /// Recognize YAML frontmatter fences.
    pub frontmatter: bool,
    /// Let raw HTML through when rendering Markdown.
    pub raw_html: bool,
    /// Treat 4-space-indented lines as code blocks.
    pub code_indented: bool,
}

impl ParseProfile {
    /// The bundled profile for a format. These fields always win over
    /// caller-supplied profile fields when options are merged.
    pub fn for_format(format: Format) -> Self {
        match format {
            Format::Md => Self {
                gfm: true,
                frontmatter: true,
                raw_html: true,
                code_indented: true,
            },
            // MDX owns `<` and `{`, so raw HTML and indented code stay off.
            Format::Mdx => Self {
                gfm: true,
                frontmatter: true,
                raw_html: false,
                code_indented: false,
            },
        }
    }

    /// Convert to markdown-rs parse options (the `md` rendering path).
    pub(crate) fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            code_indented: self.code_indented,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseProfile {
    fn default() -> Self {
        Self::for_format(Format::Mdx)
    }
}
