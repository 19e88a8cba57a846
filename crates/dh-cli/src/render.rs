//! Terminal rendering for roll outcomes.

use colored::{ColoredString, Colorize};

use dh_mechanics::{HOPE_MAX, RollOutcome, TraitRollReport};

/// Hope as filled and empty diamonds, e.g. `◆◆◇◇◇◇`.
pub fn hope_diamonds(hope: u8) -> String {
    let filled = hope.min(HOPE_MAX) as usize;
    let empty = HOPE_MAX as usize - filled;
    format!("{}{}", "◆".repeat(filled), "◇".repeat(empty))
}

fn outcome_line(outcome: &RollOutcome) -> ColoredString {
    let text = outcome.description();
    if outcome.category().is_success() {
        text.green().bold()
    } else {
        text.red().bold()
    }
}

/// Print the dice, total and outcome text.
pub fn outcome(title: &str, outcome: &RollOutcome) {
    println!("  {}", title.bold());
    println!(
        "  Total: {} vs Difficulty {}",
        outcome.total().to_string().bold(),
        outcome.difficulty()
    );
    let mut dice = format!(
        "  Hope Die: {} | Fear Die: {}",
        outcome.hope_die().to_string().green().bold(),
        outcome.fear_die().to_string().red().bold()
    );
    if let Some(bonus) = outcome.bonus_die() {
        dice.push_str(&format!(" | Hope d6: {}", bonus.to_string().cyan()));
    }
    println!("{dice}");
    println!("  {}", format!("modifier {:+}", outcome.modifier()).dimmed());
    println!();
    println!("  {}", outcome_line(outcome));
    if outcome.is_critical() {
        println!("  {}", "CRITICAL SUCCESS!".yellow().bold());
    }
}

/// Print a full trait roll report for a named character.
pub fn trait_report(name: &str, report: &TraitRollReport) {
    let title = format!(
        "{name} - {} Roll",
        report.trait_name.as_str().to_uppercase()
    );
    outcome(&title, &report.outcome);
    println!();
    for effect in &report.effects {
        println!("  {}", effect.to_string().dimmed());
    }
    println!(
        "  Hope {} ({}/{HOPE_MAX})",
        hope_diamonds(report.hope_after),
        report.hope_after
    );
}
