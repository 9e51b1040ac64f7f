//! Prefix-scoped lookup in a project-level extra mapping
//!
//! Project-level overrides are keyed either by a package's full display name
//! or by a `vendor:`/`name:` scoped prefix that matches one half of it. Exact
//! keys always win; prefixed keys are scanned in their declaration order.

use serde_json::{Map, Value};

/// Key prefix matching the project half of a package name.
pub const NAME_PREFIX: &str = "name:";

/// Key prefix matching the vendor half of a package name.
pub const VENDOR_PREFIX: &str = "vendor:";

/// Resolve a value for `pretty_name` from an extra mapping.
///
/// Lookup order:
/// 1. Exact key match on the full display name. A present key always wins,
///    whatever its value — only a missing key falls through.
/// 2. A single ordered scan over the entries: for each entry, a `name:` key
///    whose suffix equals the project half wins, then a `vendor:` key whose
///    suffix equals the vendor half. The vendor half is empty when the
///    display name carries no `/`.
///
/// Returns `None` when nothing matches; the caller moves on to its next
/// precedence source.
pub fn resolve<'a>(extra: &'a Map<String, Value>, pretty_name: &str) -> Option<&'a Value> {
    if let Some(value) = extra.get(pretty_name) {
        return Some(value);
    }

    let (vendor, name) = match pretty_name.split_once('/') {
        Some((vendor, name)) => (vendor, name),
        None => ("", pretty_name),
    };

    for (key, value) in extra {
        if let Some(suffix) = key.strip_prefix(NAME_PREFIX) {
            if suffix == name {
                return Some(value);
            }
        } else if let Some(suffix) = key.strip_prefix(VENDOR_PREFIX) {
            if suffix == vendor {
                return Some(value);
            }
        }
    }

    None
}
