//! Install-name and class-name precedence chains
//!
//! Both resolutions layer the same three sources, first hit wins:
//! 1. the root project's `extra` overrides, looked up by display name
//! 2. the package's own `extra` declaration
//! 3. a fallback derived from the install name / package identifier
//!
//! Nothing here fails — an absent or unusable source simply falls through.

use crate::extra;
use crate::guess;
use crate::package::{Package, RootConfig};
use serde_json::Value;

/// Extra key carrying an installer-name override.
pub const INSTALLER_NAME_KEY: &str = "installer-name";

/// Resolve the install name for a package.
///
/// Precedence: root-level `installer-name` mapping (keyed by display name or
/// `vendor:`/`name:` prefix) → the package's own `installer-name` string →
/// a guess from the package identifier. Empty and non-string candidates
/// fall through.
pub fn install_name(package: &Package, root: Option<&RootConfig>) -> String {
    if let Some(name) = root_installer_name(package, root) {
        return name;
    }

    if let Some(name) = package
        .extra
        .get(INSTALLER_NAME_KEY)
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
    {
        return name.to_string();
    }

    guess::guess(&package.name)
}

/// Resolve the plugin class names for a package, in declaration order.
///
/// Precedence: root-level mapping under the package's type key → the
/// package's own value under its type key → a single-element list holding
/// the install name. A scalar source value is coerced to a one-element
/// list; the first source yielding a non-empty list wins.
pub fn plugin_class_names(package: &Package, root: Option<&RootConfig>) -> Vec<String> {
    if let Some(names) = root_class_names(package, root) {
        return names;
    }

    if let Some(names) = package
        .extra
        .get(&package.package_type)
        .map(coerce_list)
        .filter(|names| !names.is_empty())
    {
        return names;
    }

    vec![install_name(package, root)]
}

/// Root-level installer-name override, if one resolves to a usable string.
fn root_installer_name(package: &Package, root: Option<&RootConfig>) -> Option<String> {
    let mapping = root?.extra.get(INSTALLER_NAME_KEY)?.as_object()?;
    extra::resolve(mapping, &package.pretty_name)?
        .as_str()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Root-level class-name override, if one resolves to a non-empty list.
fn root_class_names(package: &Package, root: Option<&RootConfig>) -> Option<Vec<String>> {
    let mapping = root?.extra.get(&package.package_type)?.as_object()?;
    let names = coerce_list(extra::resolve(mapping, &package.pretty_name)?);
    (!names.is_empty()).then_some(names)
}

/// Coerce a configured value to an ordered list of names.
///
/// Lists keep their element order, scalars become a one-element list, and an
/// explicit null is an empty list. Non-string elements are carried as their
/// JSON scalar text; the manifest writer rejects anything malformed when it
/// validates.
fn coerce_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(scalar_text).collect(),
        Value::Object(entries) => entries.values().map(scalar_text).collect(),
        other => vec![scalar_text(other)],
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
