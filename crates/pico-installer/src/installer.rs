//! The installer facade the host package manager drives
//!
//! One instance per run. The host calls [`PicoInstaller::activate`] when it
//! loads the installer, asks [`PicoInstaller::install_path`] while placing
//! packages, and calls [`PicoInstaller::on_dependencies_resolved`] once the
//! final package set is known.

use crate::errors::InstallerError;
use crate::hooks::{register_resolution_callback, ManifestGate};
use crate::paths::InstallPathResolver;
use crate::types::TypeRegistry;
use anyhow::Context;
use pico_manifest::{ManifestWriter, WriteOutcome};
use pico_resolver::{Package, RootConfig};
use std::path::PathBuf;
use tracing::{debug, info};

/// Host-side registry of package-type handlers.
///
/// The installer registers itself for each package type it supports during
/// activation and unregisters on deactivation; everything else about handler
/// dispatch belongs to the host.
pub trait InstallerRegistry {
    fn register(&mut self, package_type: &str);
    fn unregister(&mut self, package_type: &str);
}

/// Installer for Pico plugin and theme packages.
pub struct PicoInstaller {
    root: RootConfig,
    paths: InstallPathResolver,
    writer: ManifestWriter,
    gate: ManifestGate,
}

impl PicoInstaller {
    /// Create an installer with the stock type registry.
    pub fn new(root: RootConfig, storage_root: impl Into<PathBuf>) -> Self {
        PicoInstaller::with_types(root, storage_root, TypeRegistry::pico())
    }

    /// Create an installer with a custom type strategy.
    pub fn with_types(
        root: RootConfig,
        storage_root: impl Into<PathBuf>,
        types: TypeRegistry,
    ) -> Self {
        let storage_root = storage_root.into();
        PicoInstaller {
            root,
            paths: InstallPathResolver::new(storage_root.clone(), types),
            writer: ManifestWriter::new(storage_root),
            gate: ManifestGate::new(),
        }
    }

    /// Activate the installer against the host.
    ///
    /// Claims every supported package type on the host registry, then
    /// registers the resolution callback on the root project's hook list.
    /// Returns whether that callback was already explicitly listed; when it
    /// was, the listing is trusted and manifest generation is force-enabled,
    /// bypassing the project-type and requires checks.
    pub fn activate(&mut self, registry: &mut dyn InstallerRegistry) -> bool {
        for package_type in self.paths.types().package_types() {
            registry.register(package_type);
        }

        let already_registered = register_resolution_callback(&mut self.root.scripts);
        if already_registered {
            debug!("Resolution callback explicitly listed, forcing manifest generation on");
            self.gate.force(true);
        }
        info!("Pico installer activated");
        already_registered
    }

    /// Deactivate the installer, releasing its package types on the host.
    pub fn deactivate(&mut self, registry: &mut dyn InstallerRegistry) {
        for package_type in self.paths.types().package_types() {
            registry.unregister(package_type);
        }
        info!("Pico installer deactivated");
    }

    /// Check whether this installer handles a package type.
    pub fn supports(&self, package_type: &str) -> bool {
        self.paths.types().is_supported(package_type)
    }

    /// Resolve the install path for a package.
    ///
    /// Fails for package types this installer does not handle and for which
    /// no directory override is configured.
    pub fn install_path(&self, package: &Package) -> Result<PathBuf, InstallerError> {
        self.paths.install_path(package, &self.root)
    }

    /// Post-dependency-resolution hook: rebuild or remove the manifest.
    ///
    /// `packages` is the host repository's enumeration of installed
    /// packages; entry order in the manifest follows it.
    pub fn on_dependencies_resolved(
        &self,
        packages: &[Package],
    ) -> anyhow::Result<WriteOutcome> {
        let enabled = self.gate.evaluate(&self.root);
        self.writer
            .update(&self.root, packages, enabled)
            .context("update plugin manifest")
    }

    /// Path of the manifest file this installer maintains.
    pub fn manifest_path(&self) -> PathBuf {
        self.writer.manifest_path()
    }

    /// The root project configuration this installer was built with.
    pub fn root(&self) -> &RootConfig {
        &self.root
    }
}
