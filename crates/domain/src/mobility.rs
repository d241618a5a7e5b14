//! Mobile capability and the movable lineups
//!
//! `Mobile` is the single dispatch point of the showcase: one required
//! method, no default body, so there is no "abstract base" that could be
//! invoked by mistake. Animals and vehicles are stateless tags; each
//! variant maps to one fixed movement line.

use serde::{Deserialize, Serialize};

/// Capability for anything that can describe its own movement.
pub trait Mobile {
    /// One-line description of how this entity moves.
    fn movement(&self) -> String;
}

/// Animal lineup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Animal {
    Bird,
    Fish,
    Cheetah,
}

impl Mobile for Animal {
    fn movement(&self) -> String {
        match self {
            Self::Bird => "Flapping wings and flying through the air!",
            Self::Fish => "Swimming gracefully through the water!",
            Self::Cheetah => "Running at 70 mph across the savanna!",
        }
        .to_string()
    }
}

/// Vehicle lineup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Vehicle {
    SportsCar,
    Submarine,
    Helicopter,
}

impl Mobile for Vehicle {
    fn movement(&self) -> String {
        match self {
            Self::SportsCar => "Accelerating to 200 mph on the highway!",
            Self::Submarine => "Diving deep underwater!",
            Self::Helicopter => "Hovering and flying with rotors!",
        }
        .to_string()
    }
}
