//! Loader for the generated manifest file
//!
//! Reads `pico-plugin.php` back into the data model. Only the subset the
//! writer emits is understood: a header, `//` comments, and nested
//! single-quoted `array(...)` literals. Whitespace and trailing commas are
//! flexible; structure is not.

use crate::errors::ManifestError;
use crate::types::{ManifestEntry, PluginManifest};
use smallvec::SmallVec;
use std::path::Path;
use tracing::debug;

impl PluginManifest {
    /// Load a manifest from disk, returning an empty manifest if the file
    /// doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            debug!("No manifest at {:?}, starting empty", path);
            return Ok(PluginManifest::new());
        }
        let content = std::fs::read_to_string(path)?;
        let mut manifest = parse(&content)?;
        manifest.rebuild_index();
        Ok(manifest)
    }
}

/// Parse manifest file contents.
pub fn parse(source: &str) -> Result<PluginManifest, ManifestError> {
    let mut parser = Parser { src: source, pos: 0 };
    parser.parse_manifest()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn parse_manifest(&mut self) -> Result<PluginManifest, ManifestError> {
        if !self.src.starts_with("<?php") {
            return Err(self.error("expected '<?php' header"));
        }
        self.pos = "<?php".len();

        self.expect_keyword("return")?;
        self.expect_keyword("array")?;
        self.expect_char('(')?;

        let mut manifest = PluginManifest::new();
        loop {
            if self.eat_char(')') {
                break;
            }
            let package_name = self.parse_string()?;
            self.expect_arrow()?;
            manifest.push(self.parse_entry(package_name)?);
            if !self.eat_char(',') {
                self.expect_char(')')?;
                break;
            }
        }
        self.expect_char(';')?;

        self.skip_trivia();
        if self.pos < self.src.len() {
            return Err(self.error("unexpected trailing content"));
        }
        Ok(manifest)
    }

    fn parse_entry(&mut self, package_name: String) -> Result<ManifestEntry, ManifestError> {
        self.expect_keyword("array")?;
        self.expect_char('(')?;

        let mut installer_name: Option<String> = None;
        let mut class_names: SmallVec<[String; 2]> = SmallVec::new();
        loop {
            if self.eat_char(')') {
                break;
            }
            let field = self.parse_string()?;
            self.expect_arrow()?;
            match field.as_str() {
                "installerName" => installer_name = Some(self.parse_string()?),
                "classNames" => class_names = self.parse_string_list()?,
                other => return Err(self.error(&format!("unknown field '{}'", other))),
            }
            if !self.eat_char(',') {
                self.expect_char(')')?;
                break;
            }
        }

        let installer_name = installer_name.ok_or_else(|| {
            ManifestError::Parse(format!("entry '{}' is missing installerName", package_name))
        })?;
        Ok(ManifestEntry {
            package_name,
            installer_name,
            class_names,
        })
    }

    fn parse_string_list(&mut self) -> Result<SmallVec<[String; 2]>, ManifestError> {
        self.expect_keyword("array")?;
        self.expect_char('(')?;

        let mut items = SmallVec::new();
        loop {
            if self.eat_char(')') {
                break;
            }
            items.push(self.parse_string()?);
            if !self.eat_char(',') {
                self.expect_char(')')?;
                break;
            }
        }
        Ok(items)
    }

    /// Parse a PHP single-quoted string literal. Only `\'` and `\\` are
    /// escape sequences; any other backslash is literal.
    fn parse_string(&mut self) -> Result<String, ManifestError> {
        self.skip_trivia();
        if self.src.as_bytes().get(self.pos) != Some(&b'\'') {
            return Err(self.error("expected string literal"));
        }
        self.pos += 1;

        let mut text = String::new();
        loop {
            match self.src[self.pos..].chars().next() {
                None => return Err(self.error("unterminated string literal")),
                Some('\'') => {
                    self.pos += 1;
                    return Ok(text);
                }
                Some('\\') => {
                    self.pos += 1;
                    match self.src[self.pos..].chars().next() {
                        Some(escaped @ ('\'' | '\\')) => {
                            text.push(escaped);
                            self.pos += 1;
                        }
                        Some(_) => text.push('\\'),
                        None => return Err(self.error("unterminated string literal")),
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
    }

    /// Skip whitespace and `//` line comments.
    fn skip_trivia(&mut self) {
        let bytes = self.src.as_bytes();
        loop {
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if bytes[self.pos..].starts_with(b"//") {
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }
            break;
        }
    }

    fn eat_char(&mut self, token: char) -> bool {
        self.skip_trivia();
        if self.src[self.pos..].starts_with(token) {
            self.pos += token.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect_char(&mut self, token: char) -> Result<(), ManifestError> {
        if self.eat_char(token) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", token)))
        }
    }

    fn expect_arrow(&mut self) -> Result<(), ManifestError> {
        self.skip_trivia();
        if self.src[self.pos..].starts_with("=>") {
            self.pos += 2;
            Ok(())
        } else {
            Err(self.error("expected '=>'"))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ManifestError> {
        self.skip_trivia();
        let rest = &self.src[self.pos..];
        if rest.starts_with(keyword) {
            let followed_ok = rest[keyword.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_ascii_alphanumeric() && c != '_');
            if followed_ok {
                self.pos += keyword.len();
                return Ok(());
            }
        }
        Err(self.error(&format!("expected '{}'", keyword)))
    }

    fn error(&self, message: &str) -> ManifestError {
        let line = self.src[..self.pos].matches('\n').count() + 1;
        ManifestError::Parse(format!("{} at line {}", message, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
<?php

// pico-plugin.php @generated by picocms/composer-installer

return array(
    'vendor/my-plugin' => array(
        'installerName' => 'My',
        'classNames' => array(
            'My',
            'MyHelper',
        ),
    ),
    'vendor/other' => array(
        'installerName' => 'Other',
    ),
);
";

    #[test]
    fn test_parse_sample() {
        let manifest = parse(SAMPLE).unwrap();
        assert_eq!(manifest.len(), 2);

        let first = &manifest.entries[0];
        assert_eq!(first.package_name, "vendor/my-plugin");
        assert_eq!(first.installer_name, "My");
        assert_eq!(first.class_names.as_slice(), ["My", "MyHelper"]);

        let second = &manifest.entries[1];
        assert_eq!(second.package_name, "vendor/other");
        assert!(second.class_names.is_empty());
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = parse("<?php\n\n// header\n\nreturn array();\n").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_missing_trailing_commas() {
        let source =
            "<?php return array('a/b'=>array('installerName'=>'B','classNames'=>array('B')));";
        let manifest = parse(source).unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.entries[0].class_names.as_slice(), ["B"]);
    }

    #[test]
    fn test_parse_unescapes_quotes() {
        let source = r"<?php return array('a/b' => array('installerName' => 'It\'s',),);";
        let manifest = parse(source).unwrap();
        assert_eq!(manifest.entries[0].installer_name, "It's");
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        assert!(matches!(
            parse("return array();"),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let source = "<?php return array('a/b' => array('bogus' => 'x'));";
        assert!(parse(source).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_installer_name() {
        let source = "<?php return array('a/b' => array('classNames' => array('X')));";
        assert!(matches!(
            parse(source),
            Err(ManifestError::Parse(ref msg)) if msg.contains("installerName")
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_content() {
        assert!(parse("<?php return array(); extra").is_err());
    }

    #[test]
    fn test_parse_rejects_unterminated_string() {
        assert!(parse("<?php return array('a/b").is_err());
    }
}
