pub mod hope;
pub mod list;
pub mod new;
pub mod roll;
pub mod trait_roll;

use dh_mechanics::MechError;

/// Render a mechanics error for the command line.
fn mech_err(e: MechError) -> String {
    e.to_string()
}
