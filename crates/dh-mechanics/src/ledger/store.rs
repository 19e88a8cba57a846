//! Persistence seam for Hope balances.

use std::collections::HashMap;

use crate::error::MechResult;
use crate::sheet::CharacterId;

/// Durable storage for Hope balances.
///
/// The ledger reads a balance before a roll with [`HopeLedger::hydrate`] and
/// writes it back afterwards with [`HopeLedger::flush`]; a transaction only
/// counts once `store` has returned `Ok`.
///
/// [`HopeLedger::hydrate`]: super::HopeLedger::hydrate
/// [`HopeLedger::flush`]: super::HopeLedger::flush
pub trait HopeStore {
    /// The stored balance, or `None` if the character is unknown.
    fn load(&self, id: CharacterId) -> MechResult<Option<u8>>;

    /// Persist a balance.
    fn store(&mut self, id: CharacterId, hope: u8) -> MechResult<()>;
}

/// A store that keeps balances in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    balances: HashMap<CharacterId, u8>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HopeStore for MemoryStore {
    fn load(&self, id: CharacterId) -> MechResult<Option<u8>> {
        Ok(self.balances.get(&id).copied())
    }

    fn store(&mut self, id: CharacterId, hope: u8) -> MechResult<()> {
        self.balances.insert(id, hope);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_character_loads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load(CharacterId::new()).unwrap(), None);
    }

    #[test]
    fn store_overwrites() {
        let mut store = MemoryStore::new();
        let id = CharacterId::new();
        store.store(id, 2).unwrap();
        store.store(id, 5).unwrap();
        assert_eq!(store.load(id).unwrap(), Some(5));
    }
}
