//! The party file: character sheets and their stored Hope.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use dh_mechanics::{CharacterId, CharacterSheet, HopeStore, MechError, MechResult};

/// One character as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(flatten)]
    pub sheet: CharacterSheet,
    #[serde(default)]
    pub hope: u8,
}

/// Every character in a party file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub characters: Vec<Member>,
}

impl Party {
    /// Read a party file.
    pub fn read(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&text).map_err(|e| format!("invalid party file {}: {e}", path.display()))
    }

    /// Read a party file, or start an empty party if it does not exist yet.
    pub fn read_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::read(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Find a character by name, ignoring case.
    pub fn find(&self, name: &str) -> Result<&CharacterSheet, String> {
        let lower = name.to_lowercase();
        self.characters
            .iter()
            .map(|m| &m.sheet)
            .find(|s| s.name.to_lowercase() == lower)
            .ok_or_else(|| format!("no character named '{name}'"))
    }

    /// Add a new member. Names must be unique, ignoring case.
    pub fn add(&mut self, sheet: CharacterSheet) -> Result<(), String> {
        if self.find(&sheet.name).is_ok() {
            return Err(format!("a character named '{}' already exists", sheet.name));
        }
        self.characters.push(Member { sheet, hope: 0 });
        Ok(())
    }
}

/// Exclusive hold on a party file for one read-modify-write.
///
/// The lock lives on a sidecar `<file>.lock` that is never replaced, so it
/// stays valid while the party file itself is swapped in by rename. Other
/// `dh` processes block in [`PartyLock::acquire`] until this guard drops.
#[derive(Debug)]
pub struct PartyLock {
    path: PathBuf,
    // Closing the handle releases the lock.
    _file: File,
}

impl PartyLock {
    /// Block until the party file at `path` is free, then hold it.
    pub fn acquire(path: &Path) -> Result<Self, String> {
        let lock_path = lock_path(path);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| format!("cannot open {}: {e}", lock_path.display()))?;
        file.lock()
            .map_err(|e| format!("cannot lock {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "locked party file");
        Ok(Self {
            path: path.to_path_buf(),
            _file: file,
        })
    }

    /// Read the locked party file.
    pub fn read(&self) -> Result<Party, String> {
        Party::read(&self.path)
    }

    /// Read the locked party file, or start an empty party.
    pub fn read_or_default(&self) -> Result<Party, String> {
        Party::read_or_default(&self.path)
    }

    /// Replace the party file with `party`.
    ///
    /// The JSON goes to a temporary file in the same directory, is synced,
    /// and is then renamed over the old file, so readers see either the old
    /// party or the new one and never a truncated file.
    pub fn write(&self, party: &Party) -> Result<(), String> {
        let json = serde_json::to_string_pretty(party)
            .map_err(|e| format!("cannot serialize party: {e}"))?;
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let cannot_write = |e: std::io::Error| format!("cannot write {}: {e}", self.path.display());

        let mut tmp = NamedTempFile::new_in(dir).map_err(cannot_write)?;
        tmp.write_all(json.as_bytes()).map_err(cannot_write)?;
        tmp.write_all(b"\n").map_err(cannot_write)?;
        tmp.as_file().sync_all().map_err(cannot_write)?;
        tmp.persist(&self.path).map_err(|e| cannot_write(e.error))?;
        tracing::debug!(path = %self.path.display(), "wrote party file");
        Ok(())
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

impl HopeStore for Party {
    fn load(&self, id: CharacterId) -> MechResult<Option<u8>> {
        Ok(self
            .characters
            .iter()
            .find(|m| m.sheet.id == id)
            .map(|m| m.hope))
    }

    fn store(&mut self, id: CharacterId, hope: u8) -> MechResult<()> {
        let member = self
            .characters
            .iter_mut()
            .find(|m| m.sheet.id == id)
            .ok_or_else(|| MechError::Persistence(format!("character {id} is not in the party")))?;
        member.hope = hope;
        Ok(())
    }
}
