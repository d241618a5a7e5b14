//! HeroProfile entity and the Hero capability trait
//!
//! Every hero variant owns a [`HeroProfile`] carrying the state common to
//! all of them: id, public name, guarded secret identity, power level, and
//! clamped health. Variant-specific flavor (attack and movement lines)
//! lives behind the [`Hero`] trait, one implementation per variant.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::HeroId;
use crate::value_objects::Health;

/// State shared by every hero variant.
///
/// The secret identity is a private field; the only way to read it is
/// [`HeroProfile::reveal_identity`], which hands back a formatted
/// disclosure line rather than the raw value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProfile {
    /// Unique identifier for this hero
    id: HeroId,
    /// Public-facing hero name
    name: String,
    /// Civilian identity, disclosed only through `reveal_identity`
    secret_identity: String,
    /// Raw offensive power rating
    power_level: u32,
    /// Current health, clamped to `[0, 100]`
    health: Health,
}

impl HeroProfile {
    /// Create a profile at full health.
    ///
    /// Returns a validation error when the name or secret identity is
    /// empty; power level is unconstrained.
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        power_level: u32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let secret_identity = secret_identity.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Hero name cannot be empty"));
        }
        if secret_identity.trim().is_empty() {
            return Err(DomainError::validation("Secret identity cannot be empty"));
        }
        Ok(Self {
            id: HeroId::new(),
            name,
            secret_identity,
            power_level,
            health: Health::full(),
        })
    }

    // ──────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────

    /// Get the unique identifier for this hero.
    pub fn id(&self) -> HeroId {
        self.id
    }

    /// Get the public hero name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw power rating.
    pub fn power_level(&self) -> u32 {
        self.power_level
    }

    /// Get the current health value.
    pub fn health(&self) -> u32 {
        self.health.current()
    }

    // ──────────────────────────────────────────────────────────────────────
    // Operations
    // ──────────────────────────────────────────────────────────────────────

    /// Controlled disclosure of the secret identity.
    pub fn reveal_identity(&self) -> String {
        format!("{}'s secret identity is {}!", self.name, self.secret_identity)
    }

    /// Unflavored attack line, used by variants without a signature move.
    pub fn base_attack(&self) -> String {
        format!("{} attacks with power level {}!", self.name, self.power_level)
    }

    /// Apply damage (floored at zero) and report the resulting health.
    pub fn take_damage(&mut self, amount: u32) -> String {
        let remaining = self.health.damage(amount);
        format!("{} now has {remaining} health!", self.name)
    }
}

/// Capability implemented once per hero variant.
///
/// Required methods carry the variant flavor; provided methods delegate to
/// the shared profile so every variant gets identity disclosure, damage
/// handling, and the display summary for free.
pub trait Hero {
    /// Shared profile state.
    fn profile(&self) -> &HeroProfile;

    /// Mutable access to the shared profile.
    fn profile_mut(&mut self) -> &mut HeroProfile;

    /// Display name of the concrete variant (e.g., "FlyingHero").
    fn archetype(&self) -> &'static str;

    /// Variant-flavored attack line.
    fn attack(&self) -> String;

    /// Variant movement line; the default is the unflavored heroic one.
    fn movement(&self) -> String {
        format!("{} moves heroically!", self.profile().name())
    }

    /// Controlled disclosure of the secret identity.
    fn reveal_identity(&self) -> String {
        self.profile().reveal_identity()
    }

    /// Apply damage and report the resulting health.
    fn take_damage(&mut self, amount: u32) -> String {
        self.profile_mut().take_damage(amount)
    }

    /// Current health value.
    fn health(&self) -> u32 {
        self.profile().health()
    }

    /// One-line display summary of the hero.
    fn summary(&self) -> String {
        let profile = self.profile();
        format!(
            "{}: {} | Power: {}",
            self.archetype(),
            profile.name(),
            profile.power_level()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal variant relying on every provided default.
    struct PlainHero(HeroProfile);

    impl Hero for PlainHero {
        fn profile(&self) -> &HeroProfile {
            &self.0
        }

        fn profile_mut(&mut self) -> &mut HeroProfile {
            &mut self.0
        }

        fn archetype(&self) -> &'static str {
            "PlainHero"
        }

        fn attack(&self) -> String {
            self.profile().base_attack()
        }
    }

    fn profile() -> HeroProfile {
        HeroProfile::new("Sky Guardian", "Alex Johnson", 8500).expect("valid profile")
    }

    #[test]
    fn new_profile_starts_at_full_health() {
        assert_eq!(profile().health(), 100);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = HeroProfile::new("  ", "Alex Johnson", 8500).expect_err("empty name");
        assert_eq!(
            err,
            DomainError::validation("Hero name cannot be empty")
        );
    }

    #[test]
    fn empty_identity_is_rejected() {
        assert!(HeroProfile::new("Sky Guardian", "", 8500).is_err());
    }

    #[test]
    fn reveal_identity_formats_disclosure() {
        assert_eq!(
            profile().reveal_identity(),
            "Sky Guardian's secret identity is Alex Johnson!"
        );
    }

    #[test]
    fn base_attack_reports_power_level() {
        assert_eq!(
            profile().base_attack(),
            "Sky Guardian attacks with power level 8500!"
        );
    }

    #[test]
    fn take_damage_reports_remaining_health() {
        let mut profile = profile();
        assert_eq!(profile.take_damage(30), "Sky Guardian now has 70 health!");
        assert_eq!(profile.health(), 70);
    }

    #[test]
    fn take_damage_floors_at_zero() {
        let mut profile = profile();
        assert_eq!(profile.take_damage(500), "Sky Guardian now has 0 health!");
        assert_eq!(profile.health(), 0);
    }

    #[test]
    fn default_movement_is_the_heroic_line() {
        let hero = PlainHero(profile());
        assert_eq!(hero.movement(), "Sky Guardian moves heroically!");
    }

    #[test]
    fn summary_combines_archetype_name_and_power() {
        let hero = PlainHero(profile());
        assert_eq!(hero.summary(), "PlainHero: Sky Guardian | Power: 8500");
    }

    #[test]
    fn trait_damage_delegates_to_profile() {
        let mut hero = PlainHero(profile());
        hero.take_damage(30);
        hero.take_damage(25);
        assert_eq!(hero.health(), 45);
    }

    #[test]
    fn profile_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(profile()).expect("serialize profile");
        assert_eq!(json["name"], "Sky Guardian");
        assert_eq!(json["secretIdentity"], "Alex Johnson");
        assert_eq!(json["powerLevel"], 8500);
        assert_eq!(json["health"], 100);
    }
}
