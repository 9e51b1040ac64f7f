//! Lifecycle hook identities and the manifest-generation gate
//!
//! The installer consumes two host hooks: an activation hook (where it claims
//! its package types and registers the resolution callback) and a
//! post-dependency-resolution hook (where the manifest is rebuilt). Whether
//! the manifest is generated at all is decided once per process by
//! [`ManifestGate`] and never revisited.

use ahash::AHashMap;
use once_cell::sync::OnceCell;
use pico_manifest::GENERATOR_PACKAGE;
use pico_resolver::{RootConfig, ROOT_PACKAGE_TYPE};

/// Hook the installer registers itself on during activation.
pub const RESOLUTION_HOOK: &str = "post-dependency-resolution";

/// Callback identity the installer registers under.
pub const RESOLUTION_CALLBACK: &str = "picocms/composer-installer::update-manifest";

/// Append the installer's callback to the resolution hook's callback list.
///
/// Returns `true` when the callback was already listed — an explicit listing
/// placed there by the project author, which the caller treats as an opt-in
/// (see [`ManifestGate::force`]).
pub fn register_resolution_callback(scripts: &mut AHashMap<String, Vec<String>>) -> bool {
    let callbacks = scripts.entry(RESOLUTION_HOOK.to_string()).or_default();
    if callbacks.iter().any(|callback| callback == RESOLUTION_CALLBACK) {
        return true;
    }
    callbacks.push(RESOLUTION_CALLBACK.to_string());
    false
}

/// Once-computed decision on whether manifest generation is enabled.
///
/// The first initialization wins and holds for the rest of the process:
/// either an explicit [`force`](Self::force) during activation, or the lazy
/// computation on first [`evaluate`](Self::evaluate). There is deliberately
/// no invalidation path.
#[derive(Debug, Default)]
pub struct ManifestGate {
    enabled: OnceCell<bool>,
}

impl ManifestGate {
    /// An undecided gate; the first evaluation or force decides it.
    pub fn new() -> Self {
        ManifestGate::default()
    }

    /// A gate with an explicit, pre-decided value. Useful in tests and for
    /// hosts that decide enablement themselves.
    pub fn preset(enabled: bool) -> Self {
        let gate = ManifestGate::new();
        let _ = gate.enabled.set(enabled);
        gate
    }

    /// Decide the gate explicitly. Has no effect if the gate has already
    /// been decided; returns whether this call decided it.
    ///
    /// Activation uses this when the resolution hook already explicitly
    /// listed the installer's callback: the explicit listing is trusted and
    /// generation is enabled WITHOUT consulting the root package type or
    /// requires. Explicit opt-in beats the heuristic.
    pub fn force(&self, enabled: bool) -> bool {
        self.enabled.set(enabled).is_ok()
    }

    /// The gate's decision, computing it from the root config on first call.
    ///
    /// Computed as: the root package is a `project`, it requires this
    /// installer, and the resolution hook explicitly lists the installer's
    /// callback.
    pub fn evaluate(&self, root: &RootConfig) -> bool {
        *self.enabled.get_or_init(|| {
            root.package_type == ROOT_PACKAGE_TYPE
                && root.requires.contains(GENERATOR_PACKAGE)
                && root
                    .scripts
                    .get(RESOLUTION_HOOK)
                    .is_some_and(|callbacks| {
                        callbacks.iter().any(|callback| callback == RESOLUTION_CALLBACK)
                    })
        })
    }
}
