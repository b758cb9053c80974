use super::KeyringStore;
use crate::error::Result;
use crate::model::Keyring;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    keyring: Keyring,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyring(keyring: Keyring) -> Self {
        Self { keyring, saves: 0 }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl KeyringStore for InMemoryStore {
    fn load(&self) -> Result<Keyring> {
        Ok(self.keyring.clone())
    }

    fn save(&mut self, keyring: Keyring) -> Result<Keyring> {
        self.keyring = keyring.clone();
        self.saves += 1;
        Ok(keyring)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, label: &str, address: &str) -> Self {
            self.store.keyring.insert(label, address);
            self
        }

        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .keyring
                    .insert(format!("host{}", i + 1), format!("user@10.0.0.{}", i + 1));
            }
            self
        }
    }
}
