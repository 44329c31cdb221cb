//! Locally persisted session state.
//!
//! The session holds the two identifiers that must stay stable for the
//! lifetime of a profile: the remembered demo event id and the guest
//! identity. It is stored as TOML in a caller-supplied directory so that
//! the session lifecycle is explicit rather than ambient; `default_dir`
//! points at the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GuestlistError, GuestlistResult};
use crate::user::UserIdentity;

const SESSION_FILE: &str = "session.toml";

/// Profile-scoped state stored in `<dir>/session.toml`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub demo_event_id: Option<String>,
    pub guest: Option<UserIdentity>,
}

impl Session {
    /// The default session directory, e.g. `~/.config/guestlist`.
    pub fn default_dir() -> GuestlistResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| GuestlistError::Config("Could not determine config directory".into()))?
            .join("guestlist");

        Ok(dir)
    }

    /// Load the session from `dir`, defaulting to an empty session when
    /// no file exists yet.
    pub fn load(dir: &Path) -> GuestlistResult<Self> {
        let path = dir.join(SESSION_FILE);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let session = toml::from_str(&content)
                .map_err(|e| GuestlistError::Serialization(e.to_string()))?;
            Ok(session)
        } else {
            Ok(Session::default())
        }
    }

    /// Save the session to `dir`, creating the directory if needed.
    pub fn save(&self, dir: &Path) -> GuestlistResult<()> {
        std::fs::create_dir_all(dir)?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| GuestlistError::Serialization(e.to_string()))?;
        std::fs::write(dir.join(SESSION_FILE), content)?;

        Ok(())
    }

    /// Remove the persisted session. Returns whether a file existed.
    pub fn clear(dir: &Path) -> GuestlistResult<bool> {
        let path = dir.join(SESSION_FILE);
        if path.exists() {
            std::fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
