//! Demonstration routines
//!
//! Pure functions that assemble the printed lines; only `main` touches
//! stdout, which keeps the scripted sequences testable.

use heroverse_domain::{Hero, Mobile};

/// Walk an ordered lineup of movables, one 1-based indexed line each.
pub fn movement_showcase(entities: &[&dyn Mobile]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entities.len() + 2);
    lines.push(String::new());
    lines.push("=== Movement Showcase ===".to_string());
    for (i, entity) in entities.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, entity.movement()));
    }
    lines
}

/// Scripted battle: both heroes attack, the first takes 30 damage, the
/// second takes 25, then both report their remaining health.
pub fn hero_battle(first: &mut dyn Hero, second: &mut dyn Hero) -> Vec<String> {
    let mut lines = vec![String::new(), "=== Hero Battle ===".to_string()];
    lines.push(first.attack());
    lines.push(second.attack());
    lines.push(first.take_damage(30));
    lines.push(second.take_damage(25));
    lines.push(format!(
        "{}'s health: {}",
        first.profile().name(),
        first.health()
    ));
    lines.push(format!(
        "{}'s health: {}",
        second.profile().name(),
        second.health()
    ));
    lines
}
