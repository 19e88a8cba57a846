//! The Hope ledger.
//!
//! Each character holds between 0 and [`HOPE_MAX`] Hope points. The ledger
//! is the only place those balances change, and it only changes them two
//! ways: [`HopeLedger::gain`] clamps at the cap, [`HopeLedger::spend`]
//! refuses to go below zero and never charges part of a cost.

pub mod shared;
pub mod store;

pub use shared::SharedLedger;
pub use store::{HopeStore, MemoryStore};

use std::collections::HashMap;

use crate::error::{MechError, MechResult};
use crate::sheet::CharacterId;

/// Most Hope a character can hold.
pub const HOPE_MAX: u8 = 6;

/// Hope balances keyed by character.
///
/// A character with no entry holds 0 Hope.
#[derive(Debug, Clone, Default)]
pub struct HopeLedger {
    balances: HashMap<CharacterId, u8>,
}

impl HopeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an entry for a character at 0 Hope. Existing entries are kept.
    pub fn open(&mut self, id: CharacterId) -> u8 {
        *self.balances.entry(id).or_insert(0)
    }

    /// Current Hope for a character.
    pub fn hope(&self, id: CharacterId) -> u8 {
        self.balances.get(&id).copied().unwrap_or(0)
    }

    /// Returns true if the character holds at least `amount` Hope.
    pub fn can_afford(&self, id: CharacterId, amount: u32) -> bool {
        u32::from(self.hope(id)) >= amount
    }

    /// Deduct `amount` Hope and return the new balance.
    ///
    /// Fails with [`MechError::InsufficientHope`] and leaves the balance
    /// untouched when the character cannot cover the whole amount. A zero
    /// amount is rejected as an invalid argument.
    pub fn spend(&mut self, id: CharacterId, amount: u32) -> MechResult<u8> {
        if amount == 0 {
            return Err(MechError::InvalidArgument(
                "spend amount must be positive".to_string(),
            ));
        }
        let available = self.hope(id);
        if !self.can_afford(id, amount) {
            tracing::warn!(character = %id, needed = amount, available, "hope spend rejected");
            return Err(MechError::InsufficientHope {
                needed: amount,
                available,
            });
        }
        // amount <= available <= HOPE_MAX, so the cast cannot truncate
        let balance = available - amount as u8;
        self.balances.insert(id, balance);
        tracing::debug!(character = %id, amount, balance, "hope spent");
        Ok(balance)
    }

    /// Add `amount` Hope, clamped to [`HOPE_MAX`], and return the new balance.
    pub fn gain(&mut self, id: CharacterId, amount: u32) -> u8 {
        let current = u32::from(self.hope(id));
        let balance = current.saturating_add(amount).min(u32::from(HOPE_MAX)) as u8;
        self.balances.insert(id, balance);
        tracing::debug!(character = %id, amount, balance, "hope gained");
        balance
    }

    /// Number of characters with an entry.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns true if no character has an entry.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Load a character's balance from a store.
    ///
    /// A character the store has never seen opens at 0. Stored values above
    /// the cap are clamped.
    pub fn hydrate<S: HopeStore + ?Sized>(&mut self, store: &S, id: CharacterId) -> MechResult<u8> {
        let stored = store.load(id)?.unwrap_or(0);
        let balance = stored.min(HOPE_MAX);
        self.balances.insert(id, balance);
        Ok(balance)
    }

    /// Write a character's current balance through to a store.
    pub fn flush<S: HopeStore + ?Sized>(&self, store: &mut S, id: CharacterId) -> MechResult<()> {
        store.store(id, self.hope(id))
    }
}
