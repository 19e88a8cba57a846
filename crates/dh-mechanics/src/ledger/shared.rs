//! A ledger handle that can be shared across threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::MechResult;
use crate::ledger::HopeLedger;
use crate::sheet::CharacterId;

/// A cloneable, thread-safe handle to a [`HopeLedger`].
///
/// Every call holds the lock for its whole read-modify-write, so two
/// concurrent spends can never both pass the affordability check on the
/// same stale balance. Use [`SharedLedger::transact`] when a check and a
/// mutation, or a whole trait roll, must happen as one step.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<HopeLedger>>,
}

impl SharedLedger {
    /// Wrap an existing ledger.
    pub fn new(ledger: HopeLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // A panic elsewhere cannot leave a balance half-written, so a poisoned
    // lock still guards a valid ledger.
    fn lock(&self) -> MutexGuard<'_, HopeLedger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current Hope for a character.
    pub fn hope(&self, id: CharacterId) -> u8 {
        self.lock().hope(id)
    }

    /// See [`HopeLedger::can_afford`].
    pub fn can_afford(&self, id: CharacterId, amount: u32) -> bool {
        self.lock().can_afford(id, amount)
    }

    /// See [`HopeLedger::spend`].
    pub fn spend(&self, id: CharacterId, amount: u32) -> MechResult<u8> {
        self.lock().spend(id, amount)
    }

    /// See [`HopeLedger::gain`].
    pub fn gain(&self, id: CharacterId, amount: u32) -> u8 {
        self.lock().gain(id, amount)
    }

    /// Run `f` with exclusive access to the ledger.
    pub fn transact<T>(&self, f: impl FnOnce(&mut HopeLedger) -> T) -> T {
        f(&mut *self.lock())
    }
}
