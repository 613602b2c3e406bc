/// Vocabulary Linter — checks a vocabulary file for pool coverage and
/// generates a range of worlds from it to verify graph integrity.
///
/// Usage: vocabulary_linter <vocabulary.ron> [--satellites <n>] [--seeds <n>] [--standalone]

use adventure_forge::core::generation::WorldGenerationService;
use adventure_forge::core::vocabulary::Vocabulary;
use adventure_forge::schema::direction::Direction;
use adventure_forge::schema::location::LocationType;
use adventure_forge::schema::npc::Race;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: vocabulary_linter <vocabulary.ron> [--satellites <n>] [--seeds <n>] [--standalone]");
        println!();
        println!("  --satellites <n>  Satellite count to validate against (default: 3)");
        println!("  --seeds <n>       Number of seeds to generate and check (default: 100)");
        println!("  --standalone      Lint the file alone instead of merged over the built-in vocabulary");
        process::exit(0);
    }

    let vocabulary_path = &args[1];
    let mut satellites = 3usize;
    let mut seeds = 100i64;
    let mut standalone = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--satellites" if i + 1 < args.len() => {
                i += 1;
                satellites = args[i].parse().unwrap_or(satellites);
            }
            "--seeds" if i + 1 < args.len() => {
                i += 1;
                seeds = args[i].parse().unwrap_or(seeds);
            }
            "--standalone" => standalone = true,
            _ => {}
        }
        i += 1;
    }

    let overlay = match Vocabulary::load_from_ron(Path::new(vocabulary_path)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("ERROR: Failed to load vocabulary file: {}", e);
            process::exit(1);
        }
    };

    let vocabulary = if standalone {
        overlay
    } else {
        let mut base = match Vocabulary::builtin() {
            Ok(v) => v,
            Err(e) => {
                eprintln!("ERROR: Built-in vocabulary is broken: {}", e);
                process::exit(1);
            }
        };
        base.merge(overlay);
        base
    };

    let (mut errors, warnings) = lint_vocabulary(&vocabulary, satellites);

    if errors.is_empty() {
        errors.extend(check_generated_worlds(vocabulary.clone(), satellites, seeds));
    }

    println!("\n=== Vocabulary Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_vocabulary(vocabulary: &Vocabulary, satellites: usize) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let pool = vocabulary.name_pool();
    if pool.len() < satellites {
        errors.push(format!(
            "Only {} unique location names for {} satellites",
            pool.len(),
            satellites
        ));
    }

    let mut seen = FxHashSet::default();
    for name in &vocabulary.location_names {
        if !seen.insert(name.as_str()) {
            warnings.push(format!("Location name '{}' is listed more than once", name));
        }
    }
    if seen.contains(vocabulary.start_name()) {
        warnings.push(format!(
            "Start name '{}' is also in the location name pool and will be skipped",
            vocabulary.start_name()
        ));
    }

    if satellites > Direction::ORDER.len() {
        warnings.push(format!(
            "{} satellites requested but only {} directions exist; the rest will be unreachable",
            satellites,
            Direction::ORDER.len()
        ));
    }

    for location_type in LocationType::GENERATED {
        let descriptions = vocabulary.location_descriptions(location_type);
        if descriptions.is_empty() {
            warnings.push(format!(
                "No descriptions for location type '{}' (placeholder text will be used)",
                location_type
            ));
        } else if descriptions.len() < 3 {
            warnings.push(format!(
                "Location type '{}' has only {} descriptions (minimum 3 recommended)",
                location_type,
                descriptions.len()
            ));
        }
    }

    for race in Race::ALL {
        if vocabulary.race_names(race).is_empty() {
            warnings.push(format!("No names for race '{}'", race));
        }
        if vocabulary.race_descriptions(race).is_empty() {
            warnings.push(format!("No descriptions for race '{}'", race));
        }
    }

    if vocabulary.primary_race(LocationType::Start).is_some() {
        warnings.push("Primary race set for the start type; it applies to the start location".to_string());
    }

    (errors, warnings)
}

fn check_generated_worlds(vocabulary: Vocabulary, satellites: usize, seeds: i64) -> Vec<String> {
    let service = match WorldGenerationService::builder()
        .with_vocabulary(vocabulary)
        .satellite_count(satellites)
        .build()
    {
        Ok(service) => service,
        Err(e) => return vec![format!("Configuration rejected: {}", e)],
    };

    let mut errors = Vec::new();
    for seed in 1..=seeds {
        let world = service.generate_world("Lint", seed);
        for issue in world.integrity_issues() {
            errors.push(format!("Seed {}: {}", seed, issue));
        }
    }
    println!("Generated {} worlds with {} satellites each", seeds, satellites);
    errors
}
