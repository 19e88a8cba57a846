use std::path::Path;

use colored::Colorize;

use dh_mechanics::{CharacterId, HOPE_MAX, HopeLedger, MechError, MechResult};

use crate::party::PartyLock;
use crate::render;

pub fn add(party_path: &Path, name: &str) -> Result<(), String> {
    adjust(party_path, name, |ledger, id, sheet_name| {
        if ledger.hope(id) >= HOPE_MAX {
            eprintln!(
                "  {} {sheet_name} already holds the maximum {HOPE_MAX} Hope",
                "warning:".yellow().bold()
            );
        }
        ledger.gain(id, 1);
        Ok(())
    })
}

pub fn remove(party_path: &Path, name: &str) -> Result<(), String> {
    adjust(party_path, name, |ledger, id, sheet_name| {
        match ledger.spend(id, 1) {
            Ok(_) => Ok(()),
            Err(MechError::InsufficientHope { .. }) => {
                eprintln!(
                    "  {} {sheet_name} has no Hope to remove",
                    "warning:".yellow().bold()
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    })
}

fn adjust(
    party_path: &Path,
    name: &str,
    change: impl FnOnce(&mut HopeLedger, CharacterId, &str) -> MechResult<()>,
) -> Result<(), String> {
    let lock = PartyLock::acquire(party_path)?;
    let mut party = lock.read()?;
    let sheet = party.find(name)?.clone();

    let mut ledger = HopeLedger::new();
    ledger.hydrate(&party, sheet.id).map_err(super::mech_err)?;
    change(&mut ledger, sheet.id, &sheet.name).map_err(super::mech_err)?;
    ledger.flush(&mut party, sheet.id).map_err(super::mech_err)?;
    lock.write(&party)?;
    drop(lock);
    tracing::info!(character = %sheet.id, hope = ledger.hope(sheet.id), "hope adjusted");

    let hope = ledger.hope(sheet.id);
    println!(
        "  {} Hope {} ({hope}/{HOPE_MAX})",
        sheet.name,
        render::hope_diamonds(hope)
    );
    Ok(())
}
