//! Installer plumbing for Pico plugin and theme packages
//!
//! Plugs into a host package manager's installation pipeline: it claims the
//! `pico-plugin` and `pico-theme` package types, resolves where each package
//! installs on disk, and keeps the `pico-plugin.php` runtime manifest in sync
//! after every dependency resolution.
//!
//! The host is abstracted to the two surfaces this component actually needs:
//! a package-type registry it registers itself with during activation, and
//! the enumerable collection of installed packages it receives on the
//! post-dependency-resolution hook.

pub mod errors;
pub mod hooks;
pub mod installer;
pub mod paths;
pub mod types;

pub use errors::InstallerError;
pub use hooks::{
    register_resolution_callback, ManifestGate, RESOLUTION_CALLBACK, RESOLUTION_HOOK,
};
pub use installer::{InstallerRegistry, PicoInstaller};
pub use paths::InstallPathResolver;
pub use types::TypeRegistry;
