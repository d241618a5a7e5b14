//! Value objects - immutable-by-convention types with domain invariants

mod health;

pub use health::{Health, MAX_HEALTH};
