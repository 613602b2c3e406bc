/// Explore — interactive shell for walking a generated world.
///
/// Usage: explore [--name <world name>] [--seed <n>] [--satellites <n>] [--vocabulary <file.ron>]
///
/// Commands:
///   look                 — describe the current location
///   go <dir> / <dir>     — move (north, n, southeast, se, ...)
///   exits                — list exits
///   npcs                 — list NPCs here in detail
///   player <name>        — create the player character
///   seed <n>             — regenerate the world with a new seed
///   world                — summary of every location
///   help                 — list commands
///   quit                 — exit

use adventure_forge::core::generation::WorldGenerationService;
use adventure_forge::core::session::GameSession;
use adventure_forge::schema::direction::Direction;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut name = "Default World".to_string();
    let mut seed: i64 = 0;
    let mut satellites = None;
    let mut vocabulary_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--name" if i + 1 < args.len() => {
                i += 1;
                name = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(0);
            }
            "--satellites" if i + 1 < args.len() => {
                i += 1;
                satellites = args[i].parse::<usize>().ok();
            }
            "--vocabulary" if i + 1 < args.len() => {
                i += 1;
                vocabulary_path = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut builder = WorldGenerationService::builder();
    if let Some(count) = satellites {
        builder = builder.satellite_count(count);
    }
    if let Some(ref path) = vocabulary_path {
        builder = builder.vocabulary_file(path);
    }
    let service = match builder.build() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = GameSession::new(service.generate_world(&name, seed));
    println!(
        "World '{}' (seed {}) with {} locations.",
        session.world().name(),
        session.world().seed(),
        session.world().location_count()
    );
    println!("Type 'help' for commands.\n");
    describe(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("explore> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "look" | "l" => {
                describe(&session);
            }
            "go" | "move" => {
                if parts.len() < 2 {
                    println!("Usage: go <direction>");
                    continue;
                }
                walk(&mut session, parts[1]);
            }
            "exits" => {
                print_exits(&session);
            }
            "npcs" => match session.current_location_info() {
                Ok(info) => {
                    if info.npcs.is_empty() {
                        println!("Nobody is here.");
                    }
                    for npc in &info.npcs {
                        println!("  [{}] {} the {}: {}", npc.id, npc.name, npc.race, npc.description);
                    }
                }
                Err(e) => println!("ERROR: {}", e),
            },
            "player" => {
                if parts.len() < 2 {
                    match session.player() {
                        Some(player) => println!(
                            "{} ({}), level {} {}",
                            player.name, player.id, player.level, player.race
                        ),
                        None => println!("Usage: player <name>"),
                    }
                    continue;
                }
                let player = session.create_player(&parts[1..].join(" "));
                println!("Welcome, {}. {}.", player.name, player.description);
            }
            "seed" => {
                if parts.len() < 2 {
                    println!("Current seed: {}", session.world().seed());
                    continue;
                }
                match parts[1].parse::<i64>() {
                    Ok(new_seed) => {
                        session = GameSession::new(service.generate_world(&name, new_seed));
                        println!("Regenerated with seed {}.\n", session.world().seed());
                        describe(&session);
                    }
                    Err(_) => {
                        println!("Invalid seed: {}", parts[1]);
                    }
                }
            }
            "world" => {
                let world = session.world();
                println!("\n=== {} (seed {}) ===", world.name(), world.seed());
                for location in world.locations() {
                    let exits: Vec<String> = location
                        .exits
                        .iter()
                        .map(|(dir, target)| format!("{}->{}", dir.abbreviation(), target))
                        .collect();
                    println!(
                        "  {:<12} {:<20} {:<9} npcs={} exits=[{}]",
                        location.id.as_str(),
                        location.name,
                        location.location_type.name(),
                        location.npc_ids.len(),
                        exits.join(", ")
                    );
                }
                println!();
            }
            other => {
                // Bare directions are shorthand for "go".
                if other.parse::<Direction>().is_ok() {
                    walk(&mut session, other);
                } else {
                    println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
                }
            }
        }
    }
}

fn walk(session: &mut GameSession, input: &str) {
    let direction = match input.parse::<Direction>() {
        Ok(d) => d,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    match session.move_player(direction) {
        Ok(_) => describe(session),
        Err(e) => println!("{}", capitalize(&e.to_string())),
    }
}

fn describe(session: &GameSession) {
    match session.current_location_info() {
        Ok(info) => {
            println!("\n== {} ==", info.name);
            println!("{}.", info.description);
            if !info.npcs.is_empty() {
                let names: Vec<String> = info
                    .npcs
                    .iter()
                    .map(|n| format!("{} ({})", n.name, n.race))
                    .collect();
                println!("You see: {}.", names.join(", "));
            }
            print_exits(session);
            println!();
        }
        Err(e) => println!("ERROR: {}", e),
    }
}

fn print_exits(session: &GameSession) {
    let Some(location) = session.current_location() else {
        println!("You are nowhere.");
        return;
    };
    if location.exits.is_empty() {
        println!("There is no way out.");
        return;
    }
    let exits: Vec<&str> = location.exits.keys().map(|d| d.name()).collect();
    println!("Exits: {}", exits.join(", "));
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn print_usage() {
    println!("Explore — interactive shell for walking a generated world.");
    println!();
    println!("Usage: explore [--name <world name>] [--seed <n>] [--satellites <n>] [--vocabulary <file.ron>]");
    println!();
    println!("  --name <name>          World name (default: \"Default World\")");
    println!("  --seed <n>             RNG seed; 0 picks one from the clock (default: 0)");
    println!("  --satellites <n>       Locations around the start (default: 3)");
    println!("  --vocabulary <file>    RON vocabulary merged over the built-in one");
    println!();
    println!("Set RUST_LOG=debug to trace generation.");
}

fn print_help() {
    println!("Commands:");
    println!("  look                 Describe the current location");
    println!("  go <dir>             Move; bare directions work too (n, se, west, ...)");
    println!("  exits                List exits");
    println!("  npcs                 List NPCs here in detail");
    println!("  player [name]        Create or show the player character");
    println!("  seed [n]             Show the seed or regenerate with a new one");
    println!("  world                Summary of every location");
    println!("  help                 Show this help");
    println!("  quit                 Exit");
}
