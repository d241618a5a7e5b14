//! Heroverse Showcase - Main entry point.
//!
//! Runs the whole demonstration once, top to bottom: hero summaries,
//! identity reveals, the scripted battle, then the movement showcases.

use heroverse_domain::{Animal, FlyingHero, Hero, Mobile, TechHero, Vehicle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod demo;

use demo::{hero_battle, movement_showcase};

const BANNER_WIDTH: usize = 50;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heroverse_showcase=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Heroverse showcase");

    let mut sky_guardian = FlyingHero::new("Sky Guardian", "Alex Johnson", 8500, 500)?;
    let mut tech_wizard = TechHero::new("Tech Wizard", "Jamie Smith", 7800, "Quantum Blaster")?;

    print_banner("SUPERHERO DEMONSTRATION");
    println!("{}", sky_guardian.summary());
    println!("{}", tech_wizard.summary());
    println!("{}", sky_guardian.reveal_identity());
    println!("{}", tech_wizard.reveal_identity());
    for line in hero_battle(&mut sky_guardian, &mut tech_wizard) {
        println!("{line}");
    }
    println!("{}", Hero::movement(&sky_guardian));
    println!("{}", Hero::movement(&tech_wizard));

    print_banner("POLYMORPHISM DEMONSTRATION");
    let animals: [&dyn Mobile; 3] = [&Animal::Bird, &Animal::Fish, &Animal::Cheetah];
    for line in movement_showcase(&animals) {
        println!("{line}");
    }
    let vehicles: [&dyn Mobile; 3] = [
        &Vehicle::SportsCar,
        &Vehicle::Submarine,
        &Vehicle::Helicopter,
    ];
    for line in movement_showcase(&vehicles) {
        println!("{line}");
    }

    Ok(())
}

/// Decorative section header with `=` rules above and below the title.
fn print_banner(title: &str) {
    println!();
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(BANNER_WIDTH));
}
