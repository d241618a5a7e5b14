//! TechHero - gadgeteer variant whose gear amplifies attacks

use serde::{Deserialize, Serialize};

use crate::entities::{Hero, HeroProfile};
use crate::error::DomainError;
use crate::mobility::Mobile;

/// Multiplier a tech hero's gadget applies to raw power.
const GADGET_AMPLIFIER: f64 = 1.5;

/// Hero variant that channels everything through a signature gadget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechHero {
    profile: HeroProfile,
    /// Signature gadget name (e.g., "Quantum Blaster")
    gadget: String,
}

impl TechHero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        power_level: u32,
        gadget: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let gadget = gadget.into();
        if gadget.trim().is_empty() {
            return Err(DomainError::validation("Gadget name cannot be empty"));
        }
        Ok(Self {
            profile: HeroProfile::new(name, secret_identity, power_level)?,
            gadget,
        })
    }

    /// Signature gadget name.
    pub fn gadget(&self) -> &str {
        &self.gadget
    }

    /// Effective attack power with the gadget amplifier applied.
    pub fn amplified_power(&self) -> f64 {
        f64::from(self.profile.power_level()) * GADGET_AMPLIFIER
    }
}

impl Hero for TechHero {
    fn profile(&self) -> &HeroProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut HeroProfile {
        &mut self.profile
    }

    fn archetype(&self) -> &'static str {
        "TechHero"
    }

    fn attack(&self) -> String {
        format!(
            "{} uses {} to attack with power {}!",
            self.profile.name(),
            self.gadget,
            self.amplified_power()
        )
    }

    fn movement(&self) -> String {
        format!("{} teleports using {}!", self.profile.name(), self.gadget)
    }
}

impl Mobile for TechHero {
    fn movement(&self) -> String {
        Hero::movement(self)
    }
}
