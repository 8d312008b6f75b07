//! Opinionated serialize entry point.

use log::{debug, trace};
use mdx_remote_core::{
    FenceTracker, Format, MdxError, collect_toc, compile_source, extract_frontmatter, prepare,
};
use serde_json::{Map, Value as JsonValue};

use crate::options::{DEFAULT_DATA_KEY, MergedOptions, SerializeOptions, Source};

/// Input to [`serialize`].
#[derive(Debug, Clone, Default)]
pub struct SerializeRequest {
    /// Document source.
    pub source: Source,
    /// Caller options; defaults apply when left empty.
    pub options: SerializeOptions,
}

/// Successful serialization output.
#[derive(Debug, Clone)]
pub struct Serialized {
    /// Compiled document: a JavaScript module for MDX, HTML for Markdown.
    pub compiled_source: String,
    /// Parsed frontmatter mapping (empty unless `parse_frontmatter` is set).
    pub frontmatter: JsonValue,
    /// Caller scope extended with the routed document data.
    pub scope: Map<String, JsonValue>,
}

/// Serializes a remote document with the bundled preset applied.
///
/// The result is a strict two-state outcome: `Ok` carries the full output,
/// `Err` carries only the error. There is no partial success.
pub fn serialize(request: SerializeRequest) -> Result<Serialized, MdxError> {
    let SerializeRequest { source, options } = request;
    run_pipeline(source, MergedOptions::merge(options))
}

/// The shared serialize/evaluate pipeline, operating on merged options.
pub(crate) fn run_pipeline(
    source: Source,
    mut merged: MergedOptions,
) -> Result<Serialized, MdxError> {
    let (text, path) = source.into_text()?;
    if merged.settings.filepath.is_none() {
        merged.settings.filepath = path;
    }

    let format = merged.settings.format;
    debug!("serializing {format} document ({} bytes)", text.len());

    // Frontmatter is sliced off first so preparation never rewrites
    // metadata values.
    let (frontmatter, body) = if merged.parse_frontmatter {
        let extraction = extract_frontmatter(&text)?;
        let body = text[extraction.body_start..].to_string();
        (extraction.value, body)
    } else {
        (JsonValue::Object(Map::new()), text)
    };

    // Markdown sources bypass preparation entirely.
    let body = match format {
        Format::Mdx => prepare(&body),
        Format::Md => body,
    };

    let body = if merged.disable_imports && format == Format::Mdx {
        strip_module_statements(&body)
    } else {
        body
    };

    // The collected TOC is the document's virtual-file data, keyed "toc".
    let toc = collect_toc(&body);
    trace!("collected {} toc entries", toc.len());

    let compiled_source = compile_source(&body, &merged.settings)?;

    let mut scope = Map::new();
    if merged.vfile_data_into_scope == DEFAULT_DATA_KEY {
        scope.insert(DEFAULT_DATA_KEY.to_string(), serde_json::to_value(&toc)?);
    }
    // Caller scope entries win over routed data on key collision.
    for (key, value) in merged.scope {
        scope.insert(key, value);
    }

    Ok(Serialized {
        compiled_source,
        frontmatter,
        scope,
    })
}

/// Removes top-level `import` and `export` statements outside code fences.
///
/// Statements may span lines (`import {\n  A,\n} from 'a';`), so bracket
/// depth and line continuations are tracked until the statement ends.
fn strip_module_statements(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut fences = FenceTracker::new();
    let mut stripping = false;
    let mut depth: isize = 0;
    let mut lines = source.lines().peekable();

    while let Some(line) = lines.next() {
        if fences.observe(line) {
            // Fence content belongs to whatever surrounds it: the statement
            // being dropped, or the document body.
            if !stripping {
                out.push_str(line);
                out.push('\n');
            }
            continue;
        }

        let trimmed = line.trim_start();
        if !stripping && (trimmed.starts_with("import ") || trimmed.starts_with("export ")) {
            stripping = true;
            depth = 0;
        }

        if stripping {
            depth += bracket_delta(line);
            if ends_statement(line, depth, lines.peek().copied()) {
                stripping = false;
                depth = 0;
            }
            continue;
        }

        out.push_str(line);
        out.push('\n');
    }

    out
}

/// Net bracket nesting change across one line, ignoring brackets inside
/// string or template literals.
fn bracket_delta(line: &str) -> isize {
    let mut depth: isize = 0;
    let mut in_single = false;
    let mut in_double = false;
    let mut in_template = false;
    let mut escaped = false;

    for ch in line.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\'' if !in_double && !in_template => in_single = !in_single,
            '"' if !in_single && !in_template => in_double = !in_double,
            '`' if !in_single && !in_double => in_template = !in_template,
            '(' | '{' | '[' if !in_single && !in_double && !in_template => depth += 1,
            ')' | '}' | ']' if !in_single && !in_double && !in_template => depth -= 1,
            _ => {}
        }
    }

    depth
}

/// Whether a module statement ends on this line, given the bracket depth
/// after it and a peek at the next line.
fn ends_statement(line: &str, depth: isize, next: Option<&str>) -> bool {
    if depth != 0 {
        return false;
    }

    let trimmed = line.trim_end();
    if trimmed.ends_with(';') {
        return true;
    }
    if trimmed.ends_with('\\')
        || trimmed.ends_with(',')
        || trimmed.ends_with('{')
        || trimmed.ends_with('(')
    {
        return false;
    }

    // Without a terminator, the next line decides: a leading continuation
    // token keeps the statement open.
    if let Some(next) = next {
        let nt = next.trim_start();
        if nt.starts_with(',') || nt.starts_with('.') || nt.starts_with('{') || nt.starts_with('(')
        {
            return false;
        }
    }
    true
}
