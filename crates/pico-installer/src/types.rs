//! Package-type strategy registry
//!
//! Which package types this installer handles, and which default directory
//! each type installs under, is data handed to the installer at construction
//! rather than behavior baked into a subclass. The stock configuration knows
//! `pico-plugin` and `pico-theme`.

use pico_resolver::{PLUGIN_PACKAGE_TYPE, THEME_PACKAGE_TYPE};

/// Maps package types to their default install directory names.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<(String, String)>,
}

impl TypeRegistry {
    /// An empty registry; the installer built on it supports nothing.
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// The stock Pico configuration: plugins under `plugins/`, themes under
    /// `themes/`.
    pub fn pico() -> Self {
        let mut registry = TypeRegistry::new();
        registry.register(PLUGIN_PACKAGE_TYPE, "plugins");
        registry.register(THEME_PACKAGE_TYPE, "themes");
        registry
    }

    /// Register a package type with its default install directory.
    pub fn register(&mut self, package_type: impl Into<String>, default_dir: impl Into<String>) {
        self.entries.push((package_type.into(), default_dir.into()));
    }

    /// Check whether a package type is handled at all.
    pub fn is_supported(&self, package_type: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == package_type)
    }

    /// Default install directory for a package type.
    pub fn default_dir(&self, package_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == package_type)
            .map(|(_, dir)| dir.as_str())
    }

    /// Registered package types, in registration order.
    pub fn package_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Root-config extra key overriding the install directory for a type,
    /// e.g. `pico-plugin-dir`.
    pub fn dir_key(package_type: &str) -> String {
        format!("{}-dir", package_type)
    }
}
