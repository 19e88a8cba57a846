use std::path::Path;

use colored::Colorize;

use dh_mechanics::{Enhancements, HopeLedger, RollConfig, Trait, TraitRoll, roll_trait};

use crate::party::PartyLock;
use crate::render;

/// Options for a trait roll.
pub struct RollArgs {
    pub name: String,
    pub trait_name: String,
    pub difficulty: Option<i32>,
    pub spend_hope: bool,
    pub experience: bool,
    pub json: bool,
}

pub fn run(party_path: &Path, config: &RollConfig, args: &RollArgs) -> Result<(), String> {
    let trait_name: Trait = args.trait_name.parse().map_err(super::mech_err)?;
    let difficulty = config.difficulty(args.difficulty).map_err(super::mech_err)?;

    let lock = PartyLock::acquire(party_path)?;
    let mut party = lock.read()?;
    let sheet = party.find(&args.name)?.clone();

    let mut ledger = HopeLedger::new();
    let hope = ledger.hydrate(&party, sheet.id).map_err(super::mech_err)?;

    let enhancements = Enhancements {
        use_experience: args.experience,
        spend_hope: args.spend_hope,
    };
    let cost = enhancements.cost();
    if !ledger.can_afford(sheet.id, cost) {
        tracing::warn!(character = %sheet.id, hope, cost, "trait roll refused");
        eprintln!(
            "  {} {} has {hope} Hope but the selected enhancements cost {cost}; nothing was rolled",
            "warning:".yellow().bold(),
            sheet.name
        );
        return Ok(());
    }

    let request =
        TraitRoll::for_sheet(&sheet, trait_name, difficulty.value()).with_enhancements(enhancements);
    let mut rng = config.rng();
    let report = roll_trait(&mut ledger, &request, &mut rng).map_err(super::mech_err)?;

    ledger.flush(&mut party, sheet.id).map_err(super::mech_err)?;
    lock.write(&party)?;
    drop(lock);

    if args.json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("cannot serialize report: {e}"))?;
        println!("{text}");
    } else {
        render::trait_report(&sheet.name, &report);
    }
    Ok(())
}
