//! Manifest write/delete state machine
//!
//! One invocation per lifecycle event, two terminal outcomes: the manifest is
//! rebuilt in full and the file replaced, or the file is removed. There is no
//! incremental patching; the previous contents are never consulted.

use crate::errors::ManifestError;
use crate::php;
use crate::types::{ManifestEntry, PluginManifest, MANIFEST_FILE};
use crate::validate;
use pico_resolver::{install_name, plugin_class_names, Package, RootConfig, PLUGIN_PACKAGE_TYPE};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Terminal outcome of one writer invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The manifest was (re)written with this many plugin entries.
    Written(usize),
    /// Generation is disabled; carries whether a manifest file was removed.
    Removed(bool),
}

/// Writes `pico-plugin.php` next to the dependency storage root.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    storage_root: PathBuf,
}

impl ManifestWriter {
    /// Create a writer for the given dependency-storage root.
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        ManifestWriter {
            storage_root: storage_root.into(),
        }
    }

    /// Path of the manifest file this writer manages.
    pub fn manifest_path(&self) -> PathBuf {
        self.storage_root.join(MANIFEST_FILE)
    }

    /// Drive one write-or-delete cycle.
    ///
    /// With generation disabled the manifest file is removed if present.
    /// Otherwise every plugin-type package is resolved against the root
    /// config, the whole batch is validated, and the file is replaced —
    /// even when the result is byte-identical to what is on disk.
    pub fn update(
        &self,
        root: &RootConfig,
        packages: &[Package],
        enabled: bool,
    ) -> Result<WriteOutcome, ManifestError> {
        if enabled {
            self.write(root, packages)
        } else {
            self.remove()
        }
    }

    fn write(&self, root: &RootConfig, packages: &[Package]) -> Result<WriteOutcome, ManifestError> {
        let manifest = resolve_entries(root, packages)?;

        let path = self.manifest_path();
        debug!("Writing plugin manifest to {:?}", path);
        replace_file(&path, php::render(&manifest).as_bytes())?;

        info!(
            "Plugin manifest written: {} package(s) at {:?}",
            manifest.len(),
            path
        );
        Ok(WriteOutcome::Written(manifest.len()))
    }

    fn remove(&self) -> Result<WriteOutcome, ManifestError> {
        let path = self.manifest_path();
        // symlink_metadata so a dangling symlink still counts as present
        if fs::symlink_metadata(&path).is_ok() {
            fs::remove_file(&path)?;
            info!("Plugin manifest removed: {:?}", path);
            Ok(WriteOutcome::Removed(true))
        } else {
            debug!("No plugin manifest to remove at {:?}", path);
            Ok(WriteOutcome::Removed(false))
        }
    }
}

/// Resolve and validate manifest entries for every plugin-type package, in
/// repository enumeration order. Any malformed name aborts the batch before
/// the file is touched.
fn resolve_entries(
    root: &RootConfig,
    packages: &[Package],
) -> Result<PluginManifest, ManifestError> {
    let mut manifest = PluginManifest::new();
    for package in packages {
        if package.package_type != PLUGIN_PACKAGE_TYPE {
            continue;
        }
        let entry = ManifestEntry {
            package_name: package.name.clone(),
            installer_name: install_name(package, Some(root)),
            class_names: plugin_class_names(package, Some(root)).into(),
        };
        validate::validate_entry(&entry)?;
        manifest.push(entry);
    }
    Ok(manifest)
}

/// Full-replace write: serialize to a sibling temp file, then rename over
/// the target so a failed write never leaves a corrupt manifest behind.
fn replace_file(path: &Path, content: &[u8]) -> Result<(), ManifestError> {
    let temp_path = path.with_extension("php.tmp");
    {
        let file = fs::File::create(&temp_path)?;
        let mut writer = std::io::BufWriter::new(file);
        writer.write_all(content)?;
        writer.flush()?;
    }
    fs::rename(&temp_path, path)?;
    Ok(())
}
