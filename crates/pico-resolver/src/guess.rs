//! Install-name guessing from a raw package identifier
//!
//! When neither the root project nor the package declares an installer name,
//! the name is derived from the package identifier: drop the vendor half,
//! drop a trailing `plugin`/`theme` marker, and StudlyCase what remains.

/// Separators recognized between name segments.
const SEPARATORS: [char; 3] = ['.', '-', '_'];

/// Guess a code-style install name from a `vendor/project` identifier.
///
/// `vendor/my-pico-plugin` becomes `MyPico`, `vendor/foo-bar_baz` becomes
/// `FooBarBaz`. An identifier that is nothing but a type marker guesses to
/// the empty string; callers receive it as-is.
pub fn guess(package_name: &str) -> String {
    let name = package_name
        .split_once('/')
        .map_or(package_name, |(_, project)| project);
    studly(strip_type_suffix(name))
}

/// Strip a trailing `plugin` or `theme` marker.
///
/// The marker only counts when it is the whole string or directly preceded
/// by a separator; `myplugin` keeps its tail. The preceding separator is
/// consumed along with the marker.
fn strip_type_suffix(name: &str) -> &str {
    for suffix in ["plugin", "theme"] {
        if name.len() < suffix.len() {
            continue;
        }
        let split = name.len() - suffix.len();
        if !name.is_char_boundary(split) || !name[split..].eq_ignore_ascii_case(suffix) {
            continue;
        }
        let head = &name[..split];
        match head.chars().next_back() {
            None => return "",
            Some(sep) if SEPARATORS.contains(&sep) => return &head[..head.len() - sep.len_utf8()],
            Some(_) => {}
        }
    }
    name
}

/// Uppercase the first character of each separator-delimited segment and
/// concatenate. Empty segments (doubled, leading, or trailing separators)
/// contribute nothing.
fn studly(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split(|c: char| SEPARATORS.contains(&c)) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
