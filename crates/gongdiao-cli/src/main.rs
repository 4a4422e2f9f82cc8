//! Gongdiao CLI - Derive Chinese heptatonic mode parameters
//!
//! This binary derives a gong tonic, meter, mode family, gong scale and main
//! note for a short melody and reports each step.

use clap::{Parser, Subcommand};
use gongdiao_theory::{Degree, Meter, ModeFamily, Tonic, DEFAULT_OCTAVE, MAX_OCTAVE, MIN_OCTAVE};
use std::process::ExitCode;

use gongdiao_cli::commands;
use gongdiao_cli::commands::derive::{DeriveOptions, Pins, MAX_RUNS};
use gongdiao_cli::logging;

/// Gongdiao - Chinese Heptatonic Mode Parameter Derivation
#[derive(Parser)]
#[command(name = "gongdiao")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log every selection step to stderr (overridden by GONGDIAO_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive tonic, meter, mode, scale and main note at random
    Derive {
        /// Base seed for reproducible output (random when omitted)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Number of independent derivations
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_RUNS))
        )]
        count: u32,

        /// Pin the gong tonic (C, D, E, G, A)
        #[arg(long)]
        tonic: Option<Tonic>,

        /// Pin the meter (2/4, 3/4, 4/4)
        #[arg(long)]
        meter: Option<Meter>,

        /// Pin the mode family (qingyue, yayue, yanyue)
        #[arg(long)]
        mode: Option<ModeFamily>,

        /// Pin the main-note degree (gong, shang, jiao, zhi, yu)
        #[arg(long)]
        degree: Option<Degree>,

        /// JSON parameter pool overriding the canonical candidates
        #[arg(long)]
        pool: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Also print the signature and scale as a plain-text measure
        #[arg(long)]
        notation: bool,
    },

    /// Build the gong scale for a tonic and mode family
    Scale {
        /// Gong tonic (C, D, E, G, A)
        #[arg(short, long)]
        tonic: Tonic,

        /// Mode family (qingyue, yayue, yanyue)
        #[arg(short, long)]
        mode: ModeFamily,

        /// Octave of the tonic (-1 to 9)
        #[arg(
            long,
            default_value_t = DEFAULT_OCTAVE,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i8).range(i64::from(MIN_OCTAVE)..=i64::from(MAX_OCTAVE))
        )]
        octave: i8,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the mode families and their interval patterns
    Modes {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Derive {
            seed,
            count,
            tonic,
            meter,
            mode,
            degree,
            pool,
            json,
            notation,
        } => commands::derive::run(&DeriveOptions {
            seed,
            count,
            pins: Pins {
                tonic,
                meter,
                mode,
                degree,
            },
            pool,
            json,
            notation,
        }),
        Commands::Scale {
            tonic,
            mode,
            octave,
            json,
        } => commands::scale::run(tonic, octave, mode, json),
        Commands::Modes { json } => commands::modes::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
