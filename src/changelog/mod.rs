//! Changelog entry and release-notes rendering
//!
//! - `render` - pure Markdown rendering of an entry and release notes
//! - `document` - splicing a rendered entry into the cumulative changelog

pub mod document;
pub mod render;

pub use document::{has_version_header, prepend_to_changelog, CHANGELOG_PREAMBLE};
pub use render::{render_body, render_entry, render_release_notes, ChangelogEntry};
