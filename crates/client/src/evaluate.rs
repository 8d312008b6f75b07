//! Evaluate entry point and the `mdx_remote` convenience wrapper.

use mdx_remote_core::MdxError;
use serde_json::{Map, Value as JsonValue};

use crate::options::{SerializeOptions, Source};
use crate::serialize::{SerializeRequest, Serialized, serialize};

/// Input to [`evaluate`].
#[derive(Debug, Clone, Default)]
pub struct EvaluateRequest {
    /// Document source.
    pub source: Source,
    /// Caller options; defaults apply when left empty.
    pub options: SerializeOptions,
}

/// Evaluate-style result.
///
/// Unlike [`serialize`], a compile failure does not preclude a renderable
/// fallback: the error travels alongside the (absent) content so callers
/// can decide how to present it.
#[derive(Debug)]
pub struct Evaluated {
    /// Compiled content, present on success.
    pub content: Option<String>,
    /// Parsed frontmatter mapping.
    pub frontmatter: JsonValue,
    /// Caller scope extended with the routed document data.
    pub scope: Map<String, JsonValue>,
    /// Compile failure, when one occurred.
    pub error: Option<MdxError>,
}

/// Evaluates a remote document with the bundled preset applied.
pub fn evaluate(request: EvaluateRequest) -> Evaluated {
    let EvaluateRequest { source, options } = request;
    match serialize(SerializeRequest { source, options }) {
        Ok(Serialized {
            compiled_source,
            frontmatter,
            scope,
        }) => Evaluated {
            content: Some(compiled_source),
            frontmatter,
            scope,
            error: None,
        },
        Err(error) => Evaluated {
            content: None,
            frontmatter: JsonValue::Object(Map::new()),
            scope: Map::new(),
            error: Some(error),
        },
    }
}

/// Fallback renderer invoked with the compile error.
pub type ErrorRender = Box<dyn Fn(&MdxError) -> String>;

/// Props accepted by [`mdx_remote`]: everything [`evaluate`] accepts plus
/// an optional error fallback.
pub struct MdxRemoteProps {
    /// Document source.
    pub source: Source,
    /// Caller options; defaults apply when left empty.
    pub options: SerializeOptions,
    /// Fallback invoked with the compile error. When absent, the error is
    /// handed back to the caller instead.
    pub on_error: Option<ErrorRender>,
}

/// Renders remote content through [`evaluate`], branching on failure.
///
/// Three terminal outcomes: a compile error without a fallback is returned
/// as `Err`; with a fallback, the fallback's output is returned; success
/// yields the compiled content.
pub fn mdx_remote(props: MdxRemoteProps) -> Result<String, MdxError> {
    let MdxRemoteProps {
        source,
        options,
        on_error,
    } = props;

    let evaluated = evaluate(EvaluateRequest { source, options });

    match (evaluated.error, on_error) {
        (Some(error), None) => Err(error),
        (Some(error), Some(render)) => Ok(render(&error)),
        (None, _) => Ok(evaluated.content.unwrap_or_default()),
    }
}
