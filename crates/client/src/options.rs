//! Request and option types plus the option-merging step.

use mdx_remote_core::{CompileSettings, Format, MdxError, ParseProfile};
use serde_json::{Map, Value as JsonValue};

/// Data key injected at the top level when the caller does not route one.
pub(crate) const DEFAULT_DATA_KEY: &str = "toc";

/// Document source accepted by the entry points.
#[derive(Debug, Clone)]
pub enum Source {
    /// Plain text.
    Text(String),
    /// Raw bytes, validated as UTF-8 before compilation.
    Bytes(Vec<u8>),
    /// A named file: contents plus the path reported in delegate errors.
    File {
        /// Path used in delegate diagnostics.
        path: String,
        /// File contents.
        contents: String,
    },
}

impl Source {
    /// Extracts text and an optional file path, validating byte sources.
    pub(crate) fn into_text(self) -> Result<(String, Option<String>), MdxError> {
        match self {
            Source::Text(text) => Ok((text, None)),
            Source::Bytes(bytes) => Ok((String::from_utf8(bytes)?, None)),
            Source::File { path, contents } => Ok((contents, Some(path))),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

/// Compiler options the caller may supply.
///
/// Only `format` is inspected by the wrapper; the remaining fields pass
/// through to the delegate untouched, except `parse`, which the bundled
/// preset replaces during merging.
#[derive(Debug, Clone, Default)]
pub struct MdxOptions {
    /// Document format: `"md"` or `"mdx"`. Anything else behaves as `"mdx"`.
    pub format: Option<String>,
    /// File path used in delegate error messages.
    pub filepath: Option<String>,
    /// Emit JSX instead of compiled function calls (MDX only).
    pub jsx: bool,
    /// JSX runtime import source (MDX only).
    pub jsx_import_source: Option<String>,
    /// Caller parse profile. The preset always wins over this field; use
    /// the engine crate directly for non-opinionated profiles.
    pub parse: Option<ParseProfile>,
}

/// Options accepted by `serialize` and `evaluate`.
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Compiler options (see [`MdxOptions`]).
    pub mdx_options: MdxOptions,
    /// Extract YAML frontmatter before compiling.
    pub parse_frontmatter: bool,
    /// Values exposed to the compiled document alongside routed data.
    pub scope: Map<String, JsonValue>,
    /// Strip top-level `import`/`export` statements from MDX sources.
    pub disable_imports: bool,
    /// Virtual-file data key routed into the scope. Defaults to `"toc"`
    /// when unset; a caller-supplied value wins.
    pub vfile_data_into_scope: Option<String>,
}

/// Effective options after the preset merge. Never built by callers.
#[derive(Debug, Clone)]
pub struct MergedOptions {
    /// Delegate settings with the preset profile applied.
    pub settings: CompileSettings,
    /// Extract YAML frontmatter before compiling.
    pub parse_frontmatter: bool,
    /// Caller-supplied scope values.
    pub scope: Map<String, JsonValue>,
    /// Strip top-level `import`/`export` statements (MDX only).
    pub disable_imports: bool,
    /// Data key routed into the scope.
    pub vfile_data_into_scope: String,
}

impl MergedOptions {
    /// Merges caller options with the bundled preset.
    ///
    /// The merge is asymmetric on purpose: inside the compiler options the
    /// preset replaces caller fields (`parse`), while at the top level the
    /// injected `vfile_data_into_scope` default yields to a caller value.
    pub fn merge(options: SerializeOptions) -> Self {
        let SerializeOptions {
            mdx_options,
            parse_frontmatter,
            scope,
            disable_imports,
            vfile_data_into_scope,
        } = options;

        let format = Format::resolve(mdx_options.format.as_deref());
        let settings = CompileSettings {
            format,
            parse: ParseProfile::for_format(format),
            filepath: mdx_options.filepath,
            jsx: mdx_options.jsx,
            jsx_import_source: mdx_options.jsx_import_source,
        };

        Self {
            settings,
            parse_frontmatter,
            scope,
            disable_imports,
            vfile_data_into_scope: vfile_data_into_scope
                .unwrap_or_else(|| DEFAULT_DATA_KEY.to_string()),
        }
    }
}
