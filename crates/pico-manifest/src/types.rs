//! Manifest data model
//!
//! Entries live in a plain `Vec` kept in repository enumeration order (the
//! generated file is ordered the same way), with a rebuilt-on-demand index
//! for name lookup.

use ahash::AHashMap;
use smallvec::SmallVec;

/// Filename of the generated manifest, a sibling of the storage root.
pub const MANIFEST_FILE: &str = "pico-plugin.php";

/// Identity of the generating tool, recorded in the manifest header and
/// checked against the root project's requires.
pub const GENERATOR_PACKAGE: &str = "picocms/composer-installer";

/// Resolved install name and class names for one plugin package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Normalized `vendor/project` identifier.
    pub package_name: String,
    /// Directory name the package installs under.
    pub installer_name: String,
    /// Entry-point class names, in declaration order. May be empty, in which
    /// case the serialized entry omits the field.
    pub class_names: SmallVec<[String; 2]>,
}

/// Ordered mapping from package name to its resolved entry.
#[derive(Debug, Clone, Default)]
pub struct PluginManifest {
    /// Entries in repository enumeration order.
    pub entries: Vec<ManifestEntry>,

    /// Runtime only - rebuilt for O(1) entry lookup by package name.
    pub entry_index: AHashMap<String, usize>,
}

impl PluginManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        PluginManifest::default()
    }

    /// Append an entry, keeping the lookup index current.
    pub fn push(&mut self, entry: ManifestEntry) {
        self.entry_index
            .insert(entry.package_name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// O(1) entry lookup by package name.
    #[inline]
    pub fn get(&self, package_name: &str) -> Option<&ManifestEntry> {
        self.entry_index
            .get(package_name)
            .map(|&idx| &self.entries[idx])
    }

    /// Rebuild the lookup index from the entry list.
    pub fn rebuild_index(&mut self) {
        self.entry_index = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.package_name.clone(), idx))
            .collect();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for PluginManifest {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived state; entry order and content decide equality.
        self.entries == other.entries
    }
}

impl Eq for PluginManifest {}
