//! Name-format validation
//!
//! Formats are enforced here, at serialization time, not during resolution:
//! resolution is allowed to produce anything, and the writer rejects the
//! whole batch on the first malformed value before touching the file.
//!
//! - package name: `vendor/project`, both halves lowercase `[a-z0-9_.-]+`
//! - installer name: `[a-zA-Z0-9_.-]+`
//! - class name: an identifier — ASCII letter, underscore, or a byte above
//!   the ASCII range first, then the same plus digits

use crate::errors::ManifestError;
use crate::types::ManifestEntry;

/// Validate a normalized `vendor/project` package name.
pub fn validate_package_name(name: &str) -> Result<(), ManifestError> {
    let valid = name
        .split_once('/')
        .is_some_and(|(vendor, project)| is_name_half(vendor) && is_name_half(project));
    if valid {
        Ok(())
    } else {
        Err(ManifestError::InvalidPackageName(name.to_string()))
    }
}

/// Validate an install name.
pub fn validate_installer_name(package: &str, name: &str) -> Result<(), ManifestError> {
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'));
    if valid {
        Ok(())
    } else {
        Err(ManifestError::InvalidInstallerName {
            package: package.to_string(),
            name: name.to_string(),
        })
    }
}

/// Validate a plugin class name.
pub fn validate_class_name(package: &str, name: &str) -> Result<(), ManifestError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(ManifestError::InvalidClassName {
            package: package.to_string(),
            name: name.to_string(),
        })
    }
}

/// Validate everything a manifest entry carries.
pub fn validate_entry(entry: &ManifestEntry) -> Result<(), ManifestError> {
    validate_package_name(&entry.package_name)?;
    validate_installer_name(&entry.package_name, &entry.installer_name)?;
    for class_name in &entry.class_names {
        validate_class_name(&entry.package_name, class_name)?;
    }
    Ok(())
}

fn is_name_half(half: &str) -> bool {
    !half.is_empty()
        && half
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-'))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first >= '\u{7f}')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c >= '\u{7f}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_package_name_accepts_lowercase_pairs() {
        assert!(validate_package_name("vendor/my-plugin").is_ok());
        assert!(validate_package_name("a.b_c-d/e.f_g-h0").is_ok());
    }

    #[test]
    fn test_package_name_rejects_uppercase() {
        assert!(matches!(
            validate_package_name("Vendor/my-plugin"),
            Err(ManifestError::InvalidPackageName(_))
        ));
    }

    #[test]
    fn test_package_name_requires_single_slash() {
        assert!(validate_package_name("no-slash").is_err());
        assert!(validate_package_name("a/b/c").is_err());
        assert!(validate_package_name("/b").is_err());
        assert!(validate_package_name("a/").is_err());
    }

    #[test]
    fn test_installer_name_rejects_separator_chars() {
        assert!(validate_installer_name("a/b", "My-Plugin_1.0").is_ok());
        assert!(validate_installer_name("a/b", "").is_err());
        assert!(validate_installer_name("a/b", "has space").is_err());
        assert!(validate_installer_name("a/b", "has/slash").is_err());
    }

    #[test]
    fn test_class_name_rejects_leading_digit() {
        assert!(validate_class_name("a/b", "MyPlugin").is_ok());
        assert!(validate_class_name("a/b", "_private").is_ok());
        assert!(matches!(
            validate_class_name("a/b", "1stPlugin"),
            Err(ManifestError::InvalidClassName { .. })
        ));
    }

    #[test]
    fn test_class_name_allows_high_range_chars() {
        assert!(validate_class_name("a/b", "Überklasse").is_ok());
    }

    #[test]
    fn test_class_name_rejects_empty_and_punctuation() {
        assert!(validate_class_name("a/b", "").is_err());
        assert!(validate_class_name("a/b", "My-Class").is_err());
    }

    #[test]
    fn test_entry_validation_reports_first_violation() {
        let entry = ManifestEntry {
            package_name: "vendor/good".to_string(),
            installer_name: "Good".to_string(),
            class_names: smallvec!["Good".to_string(), "9bad".to_string()],
        };
        assert!(matches!(
            validate_entry(&entry),
            Err(ManifestError::InvalidClassName { ref name, .. }) if name == "9bad"
        ));
    }
}
