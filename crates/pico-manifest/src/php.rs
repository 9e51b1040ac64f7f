//! PHP array-literal emission
//!
//! The manifest is a self-contained PHP file the host application includes at
//! runtime. Output is deterministic: fixed header, entries in manifest order,
//! 4-space indent steps, single-quoted strings, trailing commas. The
//! `classNames` field is omitted entirely when an entry has no class names.

use crate::types::{PluginManifest, GENERATOR_PACKAGE, MANIFEST_FILE};
use std::fmt::Write;

/// Render a manifest as the complete contents of `pico-plugin.php`.
pub fn render(manifest: &PluginManifest) -> String {
    let mut out = String::new();
    out.push_str("<?php\n\n");
    let _ = writeln!(out, "// {} @generated by {}\n", MANIFEST_FILE, GENERATOR_PACKAGE);

    if manifest.entries.is_empty() {
        out.push_str("return array();\n");
        return out;
    }

    out.push_str("return array(\n");
    for entry in &manifest.entries {
        let _ = writeln!(out, "    {} => array(", quote(&entry.package_name));
        let _ = writeln!(out, "        'installerName' => {},", quote(&entry.installer_name));
        if !entry.class_names.is_empty() {
            out.push_str("        'classNames' => array(\n");
            for class_name in &entry.class_names {
                let _ = writeln!(out, "            {},", quote(class_name));
            }
            out.push_str("        ),\n");
        }
        out.push_str("    ),\n");
    }
    out.push_str(");\n");
    out
}

/// Single-quote a string for PHP: backslash and the quote itself are the only
/// characters that need escaping.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
