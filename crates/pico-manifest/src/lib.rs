//! Plugin manifest generation for the Pico installer
//!
//! The manifest (`pico-plugin.php`) maps each installed plugin package to its
//! resolved install name and entry-point class names. It is regenerated in
//! full on every relevant lifecycle event and removed entirely when manifest
//! generation is disabled; the previous file contents never matter.
//!
//! This crate owns the manifest data model, the name-format validation that
//! gates serialization, the deterministic PHP-literal emission, a loader for
//! the generated file, and the write/delete state machine.

pub mod errors;
pub mod parse;
pub mod php;
pub mod types;
pub mod validate;
pub mod writer;

pub use errors::ManifestError;
pub use types::{ManifestEntry, PluginManifest, GENERATOR_PACKAGE, MANIFEST_FILE};
pub use writer::{ManifestWriter, WriteOutcome};
