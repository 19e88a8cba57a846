use dh_mechanics::{Enhancements, RollConfig, resolve};

use crate::render;

pub fn run(
    config: &RollConfig,
    modifier: i32,
    difficulty: Option<i32>,
    bonus_die: bool,
    json: bool,
) -> Result<(), String> {
    let difficulty = config.difficulty(difficulty).map_err(super::mech_err)?;
    let enhancements = Enhancements {
        use_experience: false,
        spend_hope: bonus_die,
    };

    let mut rng = config.rng();
    let outcome =
        resolve(modifier, difficulty.value(), enhancements, &mut rng).map_err(super::mech_err)?;

    if json {
        let text = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("cannot serialize outcome: {e}"))?;
        println!("{text}");
    } else {
        render::outcome("Duality Roll", &outcome);
    }
    Ok(())
}
