#![deny(missing_docs)]
//! mdx-remote core: format resolution, source preparation, and the compile
//! delegates used by the opinionated serialize/evaluate wrappers.

/// Delegate adapters for MDX and Markdown compilation.
pub mod compile;
/// Core error types.
pub mod error;
/// Fenced code block tracking.
pub mod fence;
/// Effective document format resolution.
pub mod format;
/// YAML frontmatter extraction helpers.
pub mod frontmatter;
/// MDX source preparation.
pub mod prepare;
/// Per-format parse presets.
pub mod preset;
/// Slug generation utilities.
pub mod slug;
/// Table-of-contents collection.
pub mod toc;

pub use compile::{CompileSettings, compile_source};
pub use error::MdxError;
pub use fence::{FenceTracker, is_indented_code};
pub use format::Format;
pub use frontmatter::{Frontmatter, FrontmatterError, extract_frontmatter};
pub use prepare::prepare;
pub use preset::ParseProfile;
pub use slug::Slugger;
pub use toc::{TocItem, collect_toc};
