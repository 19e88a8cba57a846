//! Random sources for die faces.

use rand::Rng;

/// Anything that can produce a uniform die face in `1..=sides`.
///
/// Every [`rand::Rng`] is a source, so a seeded `StdRng` works directly.
/// [`ScriptedDice`] replays fixed faces for deterministic rolls.
pub trait RandomSource {
    /// Draw one face in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }
}

/// A random source that replays a fixed sequence of faces.
///
/// Faces are returned in order and the script wraps around when it runs
/// out. An empty script always rolls 1. The number of draws is recorded so
/// callers can check whether any dice were rolled at all.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a source that yields `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            cursor: 0,
        }
    }

    /// How many faces have been drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDice {
    fn roll_die(&mut self, _sides: u32) -> u32 {
        let face = if self.faces.is_empty() {
            1
        } else {
            self.faces[self.cursor % self.faces.len()]
        };
        self.cursor += 1;
        face
    }
}
