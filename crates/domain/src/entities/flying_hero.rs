//! FlyingHero - airborne variant with a flight speed

use serde::{Deserialize, Serialize};

use crate::entities::{Hero, HeroProfile};
use crate::error::DomainError;
use crate::mobility::Mobile;

/// Hero variant that fights and travels on the wing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyingHero {
    profile: HeroProfile,
    /// Cruising speed in miles per hour
    flight_speed: u32,
}

impl FlyingHero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        power_level: u32,
        flight_speed: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            profile: HeroProfile::new(name, secret_identity, power_level)?,
            flight_speed,
        })
    }

    /// Cruising speed in miles per hour.
    pub fn flight_speed(&self) -> u32 {
        self.flight_speed
    }
}

impl Hero for FlyingHero {
    fn profile(&self) -> &HeroProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut HeroProfile {
        &mut self.profile
    }

    fn archetype(&self) -> &'static str {
        "FlyingHero"
    }

    fn attack(&self) -> String {
        format!(
            "{} dive-bombs at {} mph!",
            self.profile.name(),
            self.flight_speed
        )
    }

    fn movement(&self) -> String {
        format!(
            "{} soars through the sky at {} mph!",
            self.profile.name(),
            self.flight_speed
        )
    }
}

impl Mobile for FlyingHero {
    fn movement(&self) -> String {
        Hero::movement(self)
    }
}
