//! Delegate adapters for the two compilers.
//!
//! MDX documents compile to a JavaScript module through mdxjs-rs; plain
//! Markdown renders to HTML through markdown-rs. Both adapters forward the
//! delegate's error message verbatim.

use log::debug;
use mdxjs::{JsxRuntime, MdxParseOptions, Options};

use crate::error::MdxError;
use crate::format::Format;
use crate::preset::ParseProfile;

/// Settings handed to the delegates after option merging.
#[derive(Debug, Clone, Default)]
pub struct CompileSettings {
    /// Resolved document format.
    pub format: Format,
    /// Merged parse profile (always the bundled preset).
    pub parse: ParseProfile,
    /// File path used in delegate error messages.
    pub filepath: Option<String>,
    /// Emit JSX instead of compiled function calls (MDX only).
    pub jsx: bool,
    /// JSX runtime import source (MDX only).
    pub jsx_import_source: Option<String>,
}

/// Compiles a prepared document with the delegate for its format.
pub fn compile_source(source: &str, settings: &CompileSettings) -> Result<String, MdxError> {
    debug!(
        "compiling {} document ({} bytes)",
        settings.format,
        source.len()
    );
    match settings.format {
        Format::Mdx => compile_mdx(source, settings),
        Format::Md => render_markdown(source, settings.parse),
    }
}

/// Compiles MDX to a JavaScript module via mdxjs-rs.
pub fn compile_mdx(source: &str, settings: &CompileSettings) -> Result<String, MdxError> {
    let parse = if settings.parse.gfm {
        MdxParseOptions::gfm()
    } else {
        MdxParseOptions::default()
    };
    let options = Options {
        filepath: settings.filepath.clone(),
        jsx: settings.jsx,
        jsx_runtime: Some(JsxRuntime::Automatic),
        jsx_import_source: settings.jsx_import_source.clone(),
        parse,
        ..Default::default()
    };

    mdxjs::compile(source, &options).map_err(|err| MdxError::Compile(err.to_string()))
}

/// Renders plain Markdown to HTML via markdown-rs.
pub fn render_markdown(source: &str, profile: ParseProfile) -> Result<String, MdxError> {
    let options = markdown::Options {
        parse: profile.to_markdown(),
        compile: markdown::CompileOptions {
            allow_dangerous_html: profile.raw_html,
            ..Default::default()
        },
    };

    markdown::to_html_with_options(source, &options).map_err(|err| MdxError::Compile(err.to_string()))
}
