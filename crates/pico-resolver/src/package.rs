//! Package and root-project metadata as seen by the installer
//!
//! Both types mirror the composer-style JSON the host package manager hands
//! us: a package identifier, a type tag, and an author-declared `extra`
//! mapping. The `extra` mapping keeps its declaration order (serde_json with
//! `preserve_order`), which the prefix-scoped override lookup relies on.

use ahash::{AHashMap, AHashSet};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Package type string handled as a Pico plugin.
pub const PLUGIN_PACKAGE_TYPE: &str = "pico-plugin";

/// Package type string handled as a Pico theme.
pub const THEME_PACKAGE_TYPE: &str = "pico-theme";

/// Root package type required for manifest generation.
pub const ROOT_PACKAGE_TYPE: &str = "project";

/// A single installed package, as reported by the host's package repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Normalized identifier, `vendor/project` in lowercase.
    pub name: String,
    /// Display identifier with the author's casing preserved.
    pub pretty_name: String,
    /// Free-form package type tag (e.g. `pico-plugin`, `pico-theme`).
    pub package_type: String,
    /// Author-declared extra configuration, declaration order preserved.
    pub extra: Map<String, Value>,
}

impl Package {
    /// Create a package from its display name and type.
    ///
    /// The normalized name is the lowercased display name, matching how the
    /// host package manager normalizes identifiers.
    pub fn new(pretty_name: impl Into<String>, package_type: impl Into<String>) -> Self {
        let pretty_name = pretty_name.into();
        Package {
            name: pretty_name.to_lowercase(),
            pretty_name,
            package_type: package_type.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra-configuration mapping.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Parse composer-style package metadata (`{"name", "type", "extra"}`).
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct Raw {
            name: String,
            #[serde(rename = "type", default)]
            package_type: String,
            #[serde(default)]
            extra: Map<String, Value>,
        }

        let raw: Raw = serde_json::from_str(text)?;
        Ok(Package {
            name: raw.name.to_lowercase(),
            pretty_name: raw.name,
            package_type: raw.package_type,
            extra: raw.extra,
        })
    }
}

/// The root project's own configuration, one instance per run.
#[derive(Debug, Clone, Default)]
pub struct RootConfig {
    /// Root package type; manifest generation requires `project`.
    pub package_type: String,
    /// Names of packages the root project requires, normalized to lowercase.
    pub requires: AHashSet<String>,
    /// Lifecycle hook name to ordered callback identifiers.
    pub scripts: AHashMap<String, Vec<String>>,
    /// Project-level extra configuration holding resolution overrides.
    pub extra: Map<String, Value>,
}

impl RootConfig {
    /// Create a root config with the given package type.
    pub fn new(package_type: impl Into<String>) -> Self {
        RootConfig {
            package_type: package_type.into(),
            ..RootConfig::default()
        }
    }

    /// Attach an extra-configuration mapping.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Parse composer-style root metadata.
    ///
    /// `require` contributes its keys (lowercased); `scripts` values may be a
    /// single callback string or a list and are normalized to a list here, at
    /// the parsing boundary.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        impl OneOrMany {
            fn into_vec(self) -> Vec<String> {
                match self {
                    OneOrMany::One(callback) => vec![callback],
                    OneOrMany::Many(callbacks) => callbacks,
                }
            }
        }

        #[derive(Deserialize)]
        struct Raw {
            #[serde(rename = "type", default)]
            package_type: String,
            #[serde(default)]
            require: Map<String, Value>,
            #[serde(default)]
            scripts: AHashMap<String, OneOrMany>,
            #[serde(default)]
            extra: Map<String, Value>,
        }

        let raw: Raw = serde_json::from_str(text)?;
        Ok(RootConfig {
            package_type: raw.package_type,
            requires: raw.require.keys().map(|name| name.to_lowercase()).collect(),
            scripts: raw
                .scripts
                .into_iter()
                .map(|(hook, callbacks)| (hook, callbacks.into_vec()))
                .collect(),
            extra: raw.extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_is_lowercased() {
        let package = Package::new("Vendor/MyPlugin", PLUGIN_PACKAGE_TYPE);
        assert_eq!(package.name, "vendor/myplugin");
        assert_eq!(package.pretty_name, "Vendor/MyPlugin");
    }

    #[test]
    fn test_package_from_json() {
        let package = Package::from_json(
            r#"{
                "name": "Acme/Shortcodes",
                "type": "pico-plugin",
                "extra": {"installer-name": "AcmeShortcodes"}
            }"#,
        )
        .unwrap();
        assert_eq!(package.name, "acme/shortcodes");
        assert_eq!(package.pretty_name, "Acme/Shortcodes");
        assert_eq!(package.package_type, "pico-plugin");
        assert_eq!(
            package.extra.get("installer-name").and_then(|v| v.as_str()),
            Some("AcmeShortcodes")
        );
    }

    #[test]
    fn test_root_config_from_json_collects_requires() {
        let root = RootConfig::from_json(
            r#"{
                "type": "project",
                "require": {"Picocms/Pico": "^2.0", "acme/shortcodes": "*"}
            }"#,
        )
        .unwrap();
        assert_eq!(root.package_type, "project");
        assert!(root.requires.contains("picocms/pico"));
        assert!(root.requires.contains("acme/shortcodes"));
    }

    #[test]
    fn test_root_config_scripts_scalar_becomes_list() {
        let root = RootConfig::from_json(
            r#"{"scripts": {"post-install": "Some\\Handler::run"}}"#,
        )
        .unwrap();
        assert_eq!(
            root.scripts.get("post-install").map(Vec::as_slice),
            Some(&["Some\\Handler::run".to_string()][..])
        );
    }

    #[test]
    fn test_root_config_scripts_list_preserved_in_order() {
        let root = RootConfig::from_json(
            r#"{"scripts": {"post-install": ["first", "second"]}}"#,
        )
        .unwrap();
        assert_eq!(
            root.scripts.get("post-install").map(Vec::as_slice),
            Some(&["first".to_string(), "second".to_string()][..])
        );
    }

    #[test]
    fn test_root_config_defaults_are_empty() {
        let root = RootConfig::from_json("{}").unwrap();
        assert_eq!(root.package_type, "");
        assert!(root.requires.is_empty());
        assert!(root.scripts.is_empty());
        assert!(root.extra.is_empty());
    }
}
