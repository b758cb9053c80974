use crate::error::Result;
use crate::model::Keyring;

pub mod fs;
pub mod memory;

/// Abstract interface for keyring persistence.
///
/// A store holds exactly one keyring. Callers load it whole, work on it in
/// memory and hand the complete mapping back to `save`; there is no partial
/// update.
pub trait KeyringStore {
    /// Load the keyring. A missing or unreadable-as-JSON keyring is an empty
    /// one; only failing to prepare the storage location is an error.
    fn load(&self) -> Result<Keyring>;

    /// Replace the stored keyring with `keyring`, returning it for chaining.
    fn save(&mut self, keyring: Keyring) -> Result<Keyring>;
}
