mod screen;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Randomized interval workout timer", long_about = None)]
struct Cli {
    /// Workout intensity level
    #[arg(short, long, value_enum)]
    level: Option<Level>,

    /// Only print the workout, don't actually run it
    #[arg(short, long, alias = "print_only")]
    print_only: bool,

    /// Print the plan as JSON instead of text
    #[arg(long, requires = "print_only")]
    json: bool,

    /// Relative frequency of leg moves in the workout
    #[arg(long, value_name = "N")]
    leg: Option<u32>,

    /// Relative frequency of ab moves in the workout
    #[arg(long, value_name = "N")]
    ab: Option<u32>,

    /// Relative frequency of back moves in the workout
    #[arg(long, value_name = "N")]
    back: Option<u32>,

    /// Relative frequency of arm moves in the workout
    #[arg(long, value_name = "N")]
    arm: Option<u32>,

    /// Relative frequency of killer moves in the workout
    #[arg(long, value_name = "N")]
    killer: Option<u32>,

    /// Override workout ON time (seconds)
    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_INTERVAL_SECS))
    )]
    on: Option<u32>,

    /// Override workout OFF time (seconds)
    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_INTERVAL_SECS))
    )]
    off: Option<u32>,

    /// Override workout SETS count
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    sets: Option<u32>,

    /// Override workout REPS count
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    reps: Option<u32>,

    /// Seed for a reproducible plan
    #[arg(long)]
    seed: Option<u64>,

    /// Read defaults from this config file instead of the standard location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn weights(&self, defaults: Weights) -> Weights {
        let mut weights = defaults;
        let flags = [
            (Category::Leg, self.leg),
            (Category::Ab, self.ab),
            (Category::Back, self.back),
            (Category::Arm, self.arm),
            (Category::Killer, self.killer),
        ];
        for (category, flag) in flags {
            if let Some(weight) = flag {
                weights.set(category, weight);
            }
        }
        weights
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            on: self.on,
            off: self.off,
            sets: self.sets,
            reps: self.reps,
        }
    }
}

/// Shape of `--print-only --json` output
#[derive(Serialize)]
struct PlanReport<'a> {
    level: Level,
    settings: &'a Settings,
    duration: String,
    moves: &'a [String],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level_filter = if cli.verbose { "debug" } else { "warn" };
    match &cli.log_file {
        Some(path) => logging::init_to_file(path, level_filter)?,
        None => logging::init_with_level(level_filter),
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog = default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let level = cli.level.unwrap_or(config.workout.level);
    let settings = Settings::from_level(level)
        .with_weights(cli.weights(config.weights))
        .with_overrides(cli.overrides());
    settings.validate()?;
    tracing::debug!(?level, ?settings, "Resolved settings");

    let plan = match cli.seed {
        Some(seed) => generate_plan(catalog, &settings, &mut StdRng::seed_from_u64(seed))?,
        None => generate_plan(catalog, &settings, &mut rand::thread_rng())?,
    };

    if cli.json {
        let report = PlanReport {
            level,
            settings: &settings,
            duration: format_duration(settings.total_duration()),
            moves: plan.moves(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", plan.summary(&settings));

    if cli.print_only {
        return Ok(());
    }

    match screen::play(&plan, &settings)? {
        screen::Outcome::Completed => println!("workout complete"),
        screen::Outcome::Stopped(at) => println!("stopped during {}", at),
    }

    Ok(())
}
