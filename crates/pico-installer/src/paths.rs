//! Install-path resolution
//!
//! A package's install path is its type's base directory plus its resolved
//! install name. The base directory comes from a root-config override or the
//! type's default, resolves relative to the PARENT of the dependency storage
//! root (packages install next to the storage root, not inside it), and is
//! created on first use.

use crate::errors::InstallerError;
use crate::types::TypeRegistry;
use pico_resolver::{install_name, Package, RootConfig};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves install directories and final install paths.
#[derive(Debug, Clone)]
pub struct InstallPathResolver {
    storage_root: PathBuf,
    types: TypeRegistry,
}

impl InstallPathResolver {
    /// Create a resolver rooted at the host's dependency storage directory.
    pub fn new(storage_root: impl Into<PathBuf>, types: TypeRegistry) -> Self {
        InstallPathResolver {
            storage_root: storage_root.into(),
            types,
        }
    }

    /// The type strategy this resolver was built with.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Final install path for a package: its type's base directory joined
    /// with its resolved install name.
    pub fn install_path(
        &self,
        package: &Package,
        root: &RootConfig,
    ) -> Result<PathBuf, InstallerError> {
        let dir = self.initialize_install_dir(&package.package_type, root)?;
        Ok(dir.join(install_name(package, Some(root))))
    }

    /// Resolve, create, and canonicalize the base install directory for a
    /// package type.
    ///
    /// An unsupported type with no configured override is a fatal
    /// configuration error.
    pub fn initialize_install_dir(
        &self,
        package_type: &str,
        root: &RootConfig,
    ) -> Result<PathBuf, InstallerError> {
        let configured = root
            .extra
            .get(&TypeRegistry::dir_key(package_type))
            .and_then(Value::as_str)
            .filter(|dir| !dir.is_empty())
            .map(|dir| dir.trim_end_matches(['/', '\\']));

        let dir = match configured {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(self.types.default_dir(package_type).ok_or_else(|| {
                InstallerError::UnsupportedPackageType(package_type.to_string())
            })?),
        };

        let dir = if dir.is_absolute() {
            dir
        } else {
            self.storage_parent().join(dir)
        };

        fs::create_dir_all(&dir)?;
        let dir = fs::canonicalize(&dir)?;
        debug!("Install directory for '{}': {:?}", package_type, dir);
        Ok(dir)
    }

    /// Install directories live next to the storage root, not inside it.
    fn storage_parent(&self) -> PathBuf {
        self.storage_root
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};
    use tempfile::TempDir;

    fn resolver(project_dir: &Path) -> InstallPathResolver {
        InstallPathResolver::new(project_dir.join("vendor"), TypeRegistry::pico())
    }

    fn root_with_extra(value: serde_json::Value) -> RootConfig {
        let extra = match value {
            serde_json::Value::Object(map) => map,
            _ => Map::new(),
        };
        RootConfig::new("project").with_extra(extra)
    }

    #[test]
    fn test_default_dir_created_next_to_storage_root() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver(tmp.path());

        let dir = resolver
            .initialize_install_dir("pico-plugin", &RootConfig::new("project"))
            .unwrap();
        assert_eq!(dir, fs::canonicalize(tmp.path().join("plugins")).unwrap());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_configured_dir_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver(tmp.path());
        let root = root_with_extra(json!({"pico-plugin-dir": "content/plugins"}));

        let dir = resolver
            .initialize_install_dir("pico-plugin", &root)
            .unwrap();
        assert_eq!(
            dir,
            fs::canonicalize(tmp.path().join("content/plugins")).unwrap()
        );
    }

    #[test]
    fn test_trailing_separators_trimmed_from_override() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver(tmp.path());
        let root = root_with_extra(json!({"pico-theme-dir": "my-themes///"}));

        let dir = resolver.initialize_install_dir("pico-theme", &root).unwrap();
        assert_eq!(dir, fs::canonicalize(tmp.path().join("my-themes")).unwrap());
    }

    #[test]
    fn test_absolute_override_used_as_is() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver(tmp.path());
        let target = tmp.path().join("elsewhere");
        let root = root_with_extra(json!({
            "pico-plugin-dir": target.to_string_lossy()
        }));

        let dir = resolver
            .initialize_install_dir("pico-plugin", &root)
            .unwrap();
        assert_eq!(dir, fs::canonicalize(&target).unwrap());
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver(tmp.path());
        let root = root_with_extra(json!({"pico-plugin-dir": ""}));

        let dir = resolver
            .initialize_install_dir("pico-plugin", &root)
            .unwrap();
        assert_eq!(dir, fs::canonicalize(tmp.path().join("plugins")).unwrap());
    }

    #[test]
    fn test_unsupported_type_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver(tmp.path());

        let result = resolver.initialize_install_dir("library", &RootConfig::new("project"));
        assert!(matches!(
            result,
            Err(InstallerError::UnsupportedPackageType(ref t)) if t == "library"
        ));
    }

    #[test]
    fn test_install_path_joins_resolved_name() {
        let tmp = TempDir::new().unwrap();
        let resolver = resolver(tmp.path());

        let package = Package::new("vendor/my-plugin", "pico-plugin");
        let path = resolver
            .install_path(&package, &RootConfig::new("project"))
            .unwrap();
        assert_eq!(
            path,
            fs::canonicalize(tmp.path().join("plugins")).unwrap().join("My")
        );
    }
}
