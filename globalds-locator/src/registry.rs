//! Registry hive abstraction and an in-memory implementation.
//!
//! Key paths use `\` as the separator. Key and value names are matched
//! case-insensitively, as in the Windows registry.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Read access to a hierarchical key/value store.
pub trait RegistryHive {
    /// Returns the names of the direct subkeys of `path`, or `None` if the
    /// key does not exist.
    fn subkey_names(&self, path: &str) -> Option<Vec<String>>;

    /// Returns true if the key at `path` exists.
    fn key_exists(&self, path: &str) -> bool;

    /// Returns the string value `name` of the key at `path`.
    fn string_value(&self, path: &str, name: &str) -> Option<String>;
}

impl<H: RegistryHive + ?Sized> RegistryHive for &H {
    fn subkey_names(&self, path: &str) -> Option<Vec<String>> {
        (**self).subkey_names(path)
    }

    fn key_exists(&self, path: &str) -> bool {
        (**self).key_exists(path)
    }

    fn string_value(&self, path: &str, name: &str) -> Option<String> {
        (**self).string_value(path, name)
    }
}

#[derive(Debug, Clone, Default)]
struct KeyEntry {
    name: String,
    subkeys: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
}

/// In-memory registry hive.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    keys: BTreeMap<String, KeyEntry>,
}

impl MemoryRegistry {
    /// Creates an empty hive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the key at `path` and any missing ancestors.
    pub fn create_key(&mut self, path: &str) {
        let segments = split_path(path);
        let mut parent: Option<String> = None;
        for (i, segment) in segments.iter().enumerate() {
            let lookup = segments[..=i]
                .iter()
                .map(|s| s.to_lowercase())
                .collect::<Vec<_>>()
                .join("\\");
            self.keys.entry(lookup.clone()).or_insert_with(|| KeyEntry {
                name: (*segment).to_string(),
                ..KeyEntry::default()
            });
            if let Some(parent) = &parent
                && let Some(entry) = self.keys.get_mut(parent)
            {
                entry
                    .subkeys
                    .entry(segment.to_lowercase())
                    .or_insert_with(|| (*segment).to_string());
            }
            parent = Some(lookup);
        }
    }

    /// Sets string value `name` on the key at `path`, creating the key if
    /// needed.
    pub fn set_value(&mut self, path: &str, name: &str, data: impl Into<String>) {
        self.create_key(path);
        if let Some(entry) = self.keys.get_mut(&lookup_key(path)) {
            entry.values.insert(name.to_lowercase(), data.into());
        }
    }

    /// Returns the number of keys in the hive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the hive has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the stored spelling of the last segment of `path`.
    #[must_use]
    pub fn key_name(&self, path: &str) -> Option<&str> {
        self.keys.get(&lookup_key(path)).map(|e| e.name.as_str())
    }
}

impl RegistryHive for MemoryRegistry {
    fn subkey_names(&self, path: &str) -> Option<Vec<String>> {
        let lookup = lookup_key(path);
        if lookup.is_empty() {
            return Some(
                self.keys
                    .iter()
                    .filter(|(key, _)| !key.contains('\\'))
                    .map(|(_, entry)| entry.name.clone())
                    .collect(),
            );
        }
        self.keys
            .get(&lookup)
            .map(|entry| entry.subkeys.values().cloned().collect())
    }

    fn key_exists(&self, path: &str) -> bool {
        self.keys.contains_key(&lookup_key(path))
    }

    fn string_value(&self, path: &str, name: &str) -> Option<String> {
        self.keys
            .get(&lookup_key(path))
            .and_then(|entry| entry.values.get(&name.to_lowercase()))
            .cloned()
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('\\').filter(|s| !s.is_empty()).collect()
}

fn lookup_key(path: &str) -> String {
    split_path(path)
        .iter()
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join("\\")
}

/// Numeric host version parsed from a registry subkey name such as `16.0`.
///
/// Only plain decimals (`digits[.digits]`) are versions; names like
/// `15.0_Config` are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostVersion {
    whole: u64,
    fraction: String,
}

impl HostVersion {
    /// Parses a subkey name as a decimal version.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let (whole, fraction) = match name.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (name, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if name.ends_with('.') && fraction.is_empty() {
            return None;
        }
        Some(Self {
            whole: whole.parse().ok()?,
            fraction: fraction.trim_end_matches('0').to_string(),
        })
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // With trailing zeros trimmed, fractional digits compare lexically.
        self.whole
            .cmp(&other.whole)
            .then_with(|| self.fraction.cmp(&other.fraction))
    }
}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_empty() {
            write!(f, "{}.0", self.whole)
        } else {
            write!(f, "{}.{}", self.whole, self.fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_value_case_insensitive() {
        let mut hive = MemoryRegistry::new();
        hive.set_value(r"SOFTWARE\Microsoft\VisualStudio\16.0", "Assembly", "A");
        assert_eq!(
            hive.string_value(r"software\microsoft\visualstudio\16.0", "ASSEMBLY"),
            Some("A".to_string())
        );
        assert!(hive.string_value(r"SOFTWARE\Microsoft", "Assembly").is_none());
    }

    #[test]
    fn test_create_key_creates_ancestors() {
        let mut hive = MemoryRegistry::new();
        hive.create_key(r"A\B\C");
        assert!(hive.key_exists("A"));
        assert!(hive.key_exists(r"a\b"));
        assert!(hive.key_exists(r"\A\B\C\"));
        assert_eq!(hive.len(), 3);
        assert_eq!(hive.key_name(r"a\b\c"), Some("C"));
    }

    #[test]
    fn test_subkey_names() {
        let mut hive = MemoryRegistry::new();
        hive.create_key(r"Root\16.0\CLSID");
        hive.create_key(r"Root\15.0");
        hive.create_key(r"Root\15.0_Config");
        let mut names = hive.subkey_names("root").unwrap();
        names.sort();
        assert_eq!(names, vec!["15.0", "15.0_Config", "16.0"]);
        assert!(hive.subkey_names("Missing").is_none());
        assert_eq!(hive.subkey_names(r"Root\15.0").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_top_level_subkeys() {
        let mut hive = MemoryRegistry::new();
        hive.create_key(r"SOFTWARE\Microsoft");
        hive.create_key("SYSTEM");
        assert_eq!(hive.subkey_names("").unwrap(), vec!["SOFTWARE", "SYSTEM"]);
    }

    #[test]
    fn test_host_version_parse() {
        assert!(HostVersion::parse("16.0").is_some());
        assert!(HostVersion::parse("9").is_some());
        assert!(HostVersion::parse("15.0_Config").is_none());
        assert!(HostVersion::parse("").is_none());
        assert!(HostVersion::parse(".5").is_none());
        assert!(HostVersion::parse("5.").is_none());
        assert!(HostVersion::parse("1.2.3").is_none());
        assert!(HostVersion::parse("CLSID").is_none());
    }

    #[test]
    fn test_host_version_ordering() {
        let v = |s: &str| HostVersion::parse(s).unwrap();
        assert!(v("16.0") > v("15.0"));
        assert!(v("10.0") > v("9.0"));
        assert!(v("14.5") > v("14.25"));
        assert_eq!(v("16.0"), v("16"));
        assert_eq!(v("16.00"), v("16.0"));
        assert_eq!(v("14.50").to_string(), "14.5");
        assert_eq!(v("16").to_string(), "16.0");
    }
}
