/// Walkthrough example — generates a seeded world and tours every exit.
///
/// Prints the start location, then walks out through each exit and back,
/// describing each satellite and its residents. A wrong turn at the end
/// shows the error a front end would get.
///
/// Run with: cargo run --example walkthrough

use adventure_forge::core::generation::WorldGenerationService;
use adventure_forge::core::session::{GameSession, LocationInfo};
use adventure_forge::schema::direction::Direction;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let service = WorldGenerationService::builder()
        .satellite_count(5)
        .build()
        .expect("Failed to configure world generation");

    let world = service.generate_world("Walkthrough", 1987);
    let mut session = GameSession::new(world);
    session.create_player("Wanderer");

    let start = session
        .current_location_info()
        .expect("Start location missing");
    print_location(&start);

    for direction in start.exits.iter().copied() {
        println!(">>> go {}", direction);
        session
            .move_player(direction)
            .expect("Exit listed but not walkable");
        print_location(&session.current_location_info().expect("Lost after moving"));

        println!(">>> go {}", direction.reverse());
        session
            .move_player(direction.reverse())
            .expect("No way back to the start");
        println!();
    }

    // --- A wrong turn ---
    let blocked = Direction::ORDER
        .iter()
        .copied()
        .find(|d| !start.exits.contains(d));
    if let Some(direction) = blocked {
        println!(">>> go {}", direction);
        match session.move_player(direction) {
            Ok(location) => println!("Unexpectedly reached {}", location.name),
            Err(e) => println!("{}", e),
        }
    }
}

fn print_location(info: &LocationInfo) {
    println!("== {} [{}] ==", info.name, info.id);
    println!("{}.", info.description);
    for npc in &info.npcs {
        println!("  - {} the {}: {}", npc.name, npc.race, npc.description);
    }
    let exits: Vec<&str> = info.exits.iter().map(|d| d.name()).collect();
    println!("Exits: {}", exits.join(", "));
}
