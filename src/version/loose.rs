//! Lenient version ordering
//!
//! Artifactory does not enforce any versioning scheme, so versions are
//! compared component by component instead of being parsed as semver.
//! "1.3.0-SNAPSHOT" splits into `[1, 3, 0, "-SNAPSHOT"]`, "4.2rc1" into
//! `[4, 2, "rc", 1]`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Digit runs, lowercase letter runs and dot separators
static COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+|[a-z]+|\.").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Component {
    // Declared first so numbers sort before text
    Number(u64),
    Text(String),
}

impl Component {
    fn from_piece(piece: &str) -> Self {
        match piece.parse::<u64>() {
            Ok(n) => Component::Number(n),
            Err(_) => Component::Text(piece.to_string()),
        }
    }
}

/// A version string with lenient, component-wise ordering
#[derive(Debug, Clone)]
pub struct LooseVersion {
    original: String,
    components: Vec<Component>,
}

impl LooseVersion {
    pub fn parse(version: &str) -> Self {
        let mut components = Vec::new();
        let mut last_end = 0;

        for m in COMPONENT_RE.find_iter(version) {
            if m.start() > last_end {
                components.push(Component::Text(version[last_end..m.start()].to_string()));
            }
            if m.as_str() != "." {
                components.push(Component::from_piece(m.as_str()));
            }
            last_end = m.end();
        }
        if last_end < version.len() {
            components.push(Component::Text(version[last_end..].to_string()));
        }

        Self {
            original: version.to_string(),
            components,
        }
    }
}

impl PartialEq for LooseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for LooseVersion {}

impl PartialOrd for LooseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LooseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl fmt::Display for LooseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Sort versions newest first. Equal versions keep their input order.
pub fn sort_descending(versions: &mut [String]) {
    versions.sort_by_cached_key(|v| std::cmp::Reverse(LooseVersion::parse(v)));
}
