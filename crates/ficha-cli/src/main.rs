//! CLI frontend for the Ficha character sheet rules engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ficha",
    about = "Ficha: dice pools, rolls, and spell odds for a character sheet",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log pool building and roll resolution to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every pool on the sheet
    Sheet {
        /// Character JSON file
        file: PathBuf,
    },

    /// Roll a skill, or cast through a spellcasting ability
    Roll {
        /// Character JSON file
        file: PathBuf,

        /// Skill name (e.g. stealth) or spellcasting ability ID
        target: String,

        /// RNG seed for a repeatable roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Use the legacy flat d20 rules
        #[arg(long)]
        legacy: bool,

        /// Number of times to roll
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Show the net-success distribution of a skill pool
    Odds {
        /// Character JSON file
        file: PathBuf,

        /// Skill name or spellcasting ability ID
        target: String,
    },

    /// Chance to learn a spell
    Learn {
        /// Character JSON file
        file: PathBuf,

        /// Spell circle (1-8)
        #[arg(short, long)]
        circle: u8,

        /// Spellcasting ability to learn through (default: the first one)
        #[arg(short, long)]
        ability: Option<String>,

        /// Treat this as the character's first spell
        #[arg(long)]
        first: bool,

        /// Modifier from spells already known
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        known: i32,

        /// Modifier from the spell's matrix
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        matrix: i32,

        /// Any other modifier
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        other: i32,
    },

    /// Show power per round, spell pools, and circle costs
    Spells {
        /// Character JSON file
        file: PathBuf,

        /// Simulate channeling for 1-3 actions first
        #[arg(long)]
        channel: Option<u8>,
    },

    /// Validate a character file
    Check {
        /// Character JSON file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sheet { file } => commands::sheet::run(&file),
        Commands::Roll {
            file,
            target,
            seed,
            legacy,
            times,
        } => commands::roll::run(&file, &target, seed, legacy, times),
        Commands::Odds { file, target } => commands::odds::run(&file, &target),
        Commands::Learn {
            file,
            circle,
            ability,
            first,
            known,
            matrix,
            other,
        } => commands::learn::run(
            &file,
            commands::learn::LearnArgs {
                circle,
                ability,
                first,
                known,
                matrix,
                other,
            },
        ),
        Commands::Spells { file, channel } => commands::spells::run(&file, channel),
        Commands::Check { file } => commands::check::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
