//! Heroverse Domain - Core domain types, value objects, and invariants
//!
//! This crate holds the two small domains of the showcase:
//!
//! - **Heroes**: entities with a name, a guarded secret identity, a power
//!   level, and clamped [`Health`]. Variant behavior (attack and movement
//!   flavor) lives behind the [`Hero`] capability trait.
//! - **Mobility**: the [`Mobile`] capability plus the animal and vehicle
//!   lineups, each variant producing one fixed movement line.
//!
//! No I/O happens here; everything returns plain strings or mutates the
//! owning entity through accessors.

pub mod entities;
pub mod error;
pub mod ids;
pub mod mobility;
pub mod value_objects;

pub use entities::{FlyingHero, Hero, HeroProfile, TechHero};
pub use error::DomainError;
pub use ids::HeroId;
pub use mobility::{Animal, Mobile, Vehicle};
pub use value_objects::{Health, MAX_HEALTH};
