//! CLI frontend for the duality dice engine.

mod commands;
mod party;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dh_mechanics::RollConfig;

const DEFAULT_PARTY: &str = "party.json";

#[derive(Parser)]
#[command(
    name = "dh",
    about = "Duality dice: roll Hope and Fear, track Hope between sessions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log mechanics decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Make a bare duality roll with no character attached
    Roll {
        /// Modifier added to the dice
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        modifier: i32,

        /// Target total (default: 10)
        #[arg(short, long, allow_hyphen_values = true)]
        difficulty: Option<i32>,

        /// Add a d6 bonus die
        #[arg(long)]
        bonus_die: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a character to the party file
    New {
        /// Character name
        name: String,

        #[command(flatten)]
        traits: commands::new::TraitArgs,

        /// Starting Hope (0-6)
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=6))]
        hope: u8,

        /// Party file
        #[arg(short, long, default_value = DEFAULT_PARTY)]
        party: PathBuf,
    },

    /// List the party's characters and Hope
    List {
        /// Party file
        #[arg(short, long, default_value = DEFAULT_PARTY)]
        party: PathBuf,
    },

    /// Roll one of a character's traits
    Trait {
        /// Character name (case-insensitive)
        name: String,

        /// Trait to roll: agility, strength, finesse, instinct, presence, knowledge
        #[arg(value_name = "TRAIT")]
        trait_name: String,

        /// Target total (default: 10)
        #[arg(short, long, allow_hyphen_values = true)]
        difficulty: Option<i32>,

        /// Spend 1 Hope to add a d6
        #[arg(long)]
        spend_hope: bool,

        /// Spend 1 Hope to use an Experience for +2
        #[arg(long)]
        experience: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Party file
        #[arg(short, long, default_value = DEFAULT_PARTY)]
        party: PathBuf,
    },

    /// Adjust a character's Hope by one
    Hope {
        /// Character name (case-insensitive)
        name: String,

        /// Whether to add or remove a point
        action: HopeAction,

        /// Party file
        #[arg(short, long, default_value = DEFAULT_PARTY)]
        party: PathBuf,
    },
}

/// Manual Hope controls.
#[derive(Clone, Copy, ValueEnum)]
enum HopeAction {
    /// Gain one Hope
    Add,
    /// Spend one Hope
    Remove,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "dh_mechanics=debug,dh=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config(seed: Option<u64>) -> RollConfig {
    let config = RollConfig::default();
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            modifier,
            difficulty,
            bonus_die,
            seed,
            json,
        } => commands::roll::run(&config(seed), modifier, difficulty, bonus_die, json),
        Commands::New {
            name,
            traits,
            hope,
            party,
        } => commands::new::run(&party, &name, &traits, hope),
        Commands::List { party } => commands::list::run(&party),
        Commands::Trait {
            name,
            trait_name,
            difficulty,
            spend_hope,
            experience,
            seed,
            json,
            party,
        } => commands::trait_roll::run(
            &party,
            &config(seed),
            &commands::trait_roll::RollArgs {
                name,
                trait_name,
                difficulty,
                spend_hope,
                experience,
                json,
            },
        ),
        Commands::Hope {
            name,
            action,
            party,
        } => match action {
            HopeAction::Add => commands::hope::add(&party, &name),
            HopeAction::Remove => commands::hope::remove(&party, &name),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
