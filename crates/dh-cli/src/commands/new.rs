use std::path::Path;

use clap::Args;

use dh_mechanics::{CharacterSheet, HopeLedger, Trait};

use crate::party::PartyLock;
use crate::render;

/// Trait scores given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct TraitArgs {
    /// Agility score
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub agility: i32,
    /// Strength score
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub strength: i32,
    /// Finesse score
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub finesse: i32,
    /// Instinct score
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub instinct: i32,
    /// Presence score
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub presence: i32,
    /// Knowledge score
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub knowledge: i32,
}

impl TraitArgs {
    fn scores(&self) -> [(Trait, i32); 6] {
        [
            (Trait::Agility, self.agility),
            (Trait::Strength, self.strength),
            (Trait::Finesse, self.finesse),
            (Trait::Instinct, self.instinct),
            (Trait::Presence, self.presence),
            (Trait::Knowledge, self.knowledge),
        ]
    }
}

pub fn run(party_path: &Path, name: &str, traits: &TraitArgs, hope: u8) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("character name cannot be empty".into());
    }

    let lock = PartyLock::acquire(party_path)?;
    let mut party = lock.read_or_default()?;
    let sheet = traits
        .scores()
        .into_iter()
        .filter(|(_, value)| *value != 0)
        .fold(CharacterSheet::new(name), |sheet, (t, value)| {
            sheet.with_trait(t, value)
        });
    let id = sheet.id;
    party.add(sheet)?;

    // Starting Hope goes through the ledger like any other gain
    let mut ledger = HopeLedger::new();
    ledger.open(id);
    if hope > 0 {
        ledger.gain(id, u32::from(hope));
    }
    ledger.flush(&mut party, id).map_err(super::mech_err)?;
    lock.write(&party)?;

    println!(
        "  Added '{name}' to {} with Hope {}",
        party_path.display(),
        render::hope_diamonds(ledger.hope(id))
    );
    Ok(())
}
