use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use dh_mechanics::{HOPE_MAX, Trait};

use crate::party::Party;
use crate::render;

pub fn run(party_path: &Path) -> Result<(), String> {
    let party = Party::read(party_path)?;

    if party.characters.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Name".to_string(), "Hope".to_string()];
    header.extend(Trait::ALL.iter().map(|t| t.as_str().to_string()));
    table.set_header(header);

    for member in &party.characters {
        // Same clamp the ledger applies when it hydrates
        let hope = member.hope.min(HOPE_MAX);
        let mut row = vec![
            member.sheet.name.clone(),
            format!("{} {hope}", render::hope_diamonds(hope)),
        ];
        row.extend(
            Trait::ALL
                .iter()
                .map(|t| format!("{:+}", member.sheet.trait_value(*t))),
        );
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} characters", party.characters.len());

    Ok(())
}
