/// World Dump — generates a world and writes it out as pretty RON.
///
/// Usage: world_dump --output <world.ron> [--name <name>] [--seed <n>] [--satellites <n>] [--vocabulary <file.ron>]
use adventure_forge::core::generation::WorldGenerationService;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: world_dump --output <world.ron> [--name <name>] [--seed <n>] [--satellites <n>] [--vocabulary <file.ron>]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    let mut output = None;
    let mut name = "Default World".to_string();
    let mut seed: i64 = 0;
    let mut satellites = None;
    let mut vocabulary = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" if i + 1 < args.len() => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--name" if i + 1 < args.len() => {
                i += 1;
                name = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an integer");
                    process::exit(1);
                });
            }
            "--satellites" if i + 1 < args.len() => {
                i += 1;
                satellites = Some(args[i].parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("Error: --satellites must be a non-negative integer");
                    process::exit(1);
                }));
            }
            "--vocabulary" if i + 1 < args.len() => {
                i += 1;
                vocabulary = Some(args[i].clone());
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let output_path = output.unwrap_or_else(|| {
        eprintln!("Error: --output is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let mut builder = WorldGenerationService::builder();
    if let Some(count) = satellites {
        builder = builder.satellite_count(count);
    }
    if let Some(ref path) = vocabulary {
        builder = builder.vocabulary_file(path);
    }
    let service = builder.build().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let world = service.generate_world(&name, seed);

    let issues = world.integrity_issues();
    for issue in &issues {
        eprintln!("WARNING: {}", issue);
    }

    let text = ron::ser::to_string_pretty(&world, ron::ser::PrettyConfig::default())
        .unwrap_or_else(|e| {
            eprintln!("Error serializing world: {}", e);
            process::exit(1);
        });

    std::fs::write(&output_path, text).unwrap_or_else(|e| {
        eprintln!("Error writing '{}': {}", output_path, e);
        process::exit(1);
    });

    println!(
        "World '{}' (seed {}): {} locations, {} npcs saved to '{}'",
        world.name(),
        world.seed(),
        world.location_count(),
        world.npc_count(),
        output_path
    );
}
