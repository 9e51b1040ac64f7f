//! Name resolution for Pico plugin and theme packages
//!
//! This crate computes, for a package handled by the Pico installer:
//! - the install name (the directory name the package's content lands in)
//! - the plugin class names the host application loads at runtime
//!
//! Resolution layers three sources, first match wins: the root project's
//! `extra` overrides, the package's own `extra` declaration, and a guess
//! derived from the package name. All of it is pure — no filesystem access.

pub mod extra;
pub mod guess;
pub mod package;
pub mod resolver;

pub use guess::guess;
pub use package::{Package, RootConfig, PLUGIN_PACKAGE_TYPE, ROOT_PACKAGE_TYPE, THEME_PACKAGE_TYPE};
pub use resolver::{install_name, plugin_class_names, INSTALLER_NAME_KEY};
