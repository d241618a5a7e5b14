//! Health value object - clamped hit point tracking
//!
//! Health starts full, only ever decreases, and is clamped to
//! `[0, MAX_HEALTH]` so no damage sequence can drive it negative.

use serde::{Deserialize, Serialize};

/// Upper bound for any hero's health.
pub const MAX_HEALTH: u32 = 100;

/// Hero health, clamped to `[0, MAX_HEALTH]`.
///
/// There is no healing operation: the only mutation is [`Health::damage`],
/// which floors at zero. Values deserialized from storage are clamped to
/// the cap on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Health(u32);

impl Health {
    /// Full health, the state every hero starts in.
    pub fn full() -> Self {
        Self(MAX_HEALTH)
    }

    /// Current value.
    pub fn current(&self) -> u32 {
        self.0
    }

    /// Subtract `amount`, flooring at zero. Returns the new value.
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.0 = self.0.saturating_sub(amount);
        self.0
    }

    /// True once health has reached zero.
    pub fn is_depleted(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

impl From<u32> for Health {
    fn from(value: u32) -> Self {
        Self(value.min(MAX_HEALTH))
    }
}

impl From<Health> for u32 {
    fn from(value: Health) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_starts_full() {
        assert_eq!(Health::full().current(), 100);
        assert_eq!(Health::default().current(), 100);
    }

    #[test]
    fn damage_subtracts_amount() {
        let mut health = Health::full();
        assert_eq!(health.damage(30), 70);
        assert_eq!(health.current(), 70);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut health = Health::full();
        assert_eq!(health.damage(250), 0);
        assert!(health.is_depleted());
    }

    #[test]
    fn damage_sequence_never_goes_negative() {
        let mut health = Health::full();
        for amount in [30, 25, 40, 40, 40] {
            let value = health.damage(amount);
            assert!(value <= MAX_HEALTH);
        }
        assert_eq!(health.current(), 0);
    }

    #[test]
    fn battle_sequence_matches_expected_totals() {
        // 100 - 30 - 25 = 45
        let mut health = Health::full();
        health.damage(30);
        assert_eq!(health.damage(25), 45);
    }

    #[test]
    fn from_clamps_to_cap() {
        assert_eq!(Health::from(250).current(), MAX_HEALTH);
        assert_eq!(Health::from(40).current(), 40);
    }

    #[test]
    fn serde_round_trip_is_a_plain_integer() {
        let mut health = Health::full();
        health.damage(55);
        let json = serde_json::to_string(&health).expect("serialize health");
        assert_eq!(json, "45");
        let back: Health = serde_json::from_str(&json).expect("deserialize health");
        assert_eq!(back, health);
    }

    #[test]
    fn deserializing_an_oversized_value_clamps() {
        let health: Health = serde_json::from_str("9999").expect("deserialize health");
        assert_eq!(health.current(), MAX_HEALTH);
    }
}
