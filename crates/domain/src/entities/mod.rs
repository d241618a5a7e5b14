//! Hero entities and the capability trait they implement

mod flying_hero;
mod hero;
mod tech_hero;

pub use flying_hero::FlyingHero;
pub use hero::{Hero, HeroProfile};
pub use tech_hero::TechHero;
