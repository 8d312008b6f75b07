#![deny(missing_docs)]
//! Opinionated wrappers around the mdx-remote compile engine.
//!
//! [`serialize`] and [`evaluate`] resolve the document format, prepare MDX
//! sources, merge caller options with the bundled per-format preset, and
//! route the collected table of contents into the result scope. [`mdx_remote`]
//! adds error-branching convenience on top of [`evaluate`].

/// Evaluate entry point and the `mdx_remote` convenience wrapper.
pub mod evaluate;
/// Request, option, and merged-option types.
pub mod options;
/// Serialize entry point and result types.
pub mod serialize;

pub use evaluate::{ErrorRender, EvaluateRequest, Evaluated, MdxRemoteProps, evaluate, mdx_remote};
pub use options::{MdxOptions, MergedOptions, SerializeOptions, Source};
pub use serialize::{SerializeRequest, Serialized, serialize};

// Engine types callers need when building options or inspecting results.
pub use mdx_remote_core::{Format, MdxError, ParseProfile, TocItem};
