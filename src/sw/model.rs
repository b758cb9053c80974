use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The label → address mapping, persisted as a single JSON object.
///
/// Insertion order is kept so `list` and `export` are stable between runs.
/// Addresses are opaque: whatever the ssh client accepts (`user@host`, a
/// config alias, ...) is stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyring {
    entries: IndexMap<String, String>,
}

impl Keyring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Inserts or overwrites `label`. Overwriting keeps the label's position.
    pub fn insert(&mut self, label: impl Into<String>, address: impl Into<String>) {
        self.entries.insert(label.into(), address.into());
    }

    /// Removes `label`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, label: &str) -> Option<String> {
        self.entries.shift_remove(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Right-biased union: entries from `incoming` win on shared labels.
    pub fn merge(mut self, incoming: Keyring) -> Keyring {
        for (label, address) in incoming.entries {
            self.entries.insert(label, address);
        }
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Keyring {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
