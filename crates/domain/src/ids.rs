//! Typed identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a hero, distinct from raw UUIDs at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(Uuid);

impl HeroId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn to_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for HeroId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for HeroId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}
