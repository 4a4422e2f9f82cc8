//! Derive command implementation
//!
//! Runs one or more seeded derivations and reports them as text or JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use gongdiao_theory::{
    create_rng, derive_run_seed, Degree, Derivation, MelodyContext, Meter, ModeFamily,
    ParameterPool, TheoryError, Tonic,
};
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::reporting::{print_melody, TextMeasure};

/// Upper bound on runs per invocation.
pub const MAX_RUNS: u32 = 10_000;

/// Values pinned on the command line instead of drawn at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pins {
    pub tonic: Option<Tonic>,
    pub meter: Option<Meter>,
    pub mode: Option<ModeFamily>,
    pub degree: Option<Degree>,
}

/// Options for the derive command.
#[derive(Debug, Clone, Default)]
pub struct DeriveOptions {
    /// Base seed; drawn at random when absent.
    pub seed: Option<u32>,
    /// Number of independent runs.
    pub count: u32,
    pub pins: Pins,
    /// Optional JSON parameter pool file.
    pub pool: Option<String>,
    pub json: bool,
    /// Also print the plain-text measure handed to the notation boundary.
    pub notation: bool,
}

/// One derivation in the JSON report.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub run: u32,
    pub seed: u32,
    pub melody: MelodyContext,
}

/// JSON report of a derive invocation.
#[derive(Debug, Serialize)]
pub struct DeriveReport {
    pub version: &'static str,
    pub base_seed: u32,
    pub runs: Vec<RunReport>,
}

/// Run the derive command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(options: &DeriveOptions) -> Result<ExitCode> {
    anyhow::ensure!(
        options.count <= MAX_RUNS,
        "run count {} exceeds the maximum of {}",
        options.count,
        MAX_RUNS
    );
    let pool = load_pool(options.pool.as_deref())?;
    let base_seed = options.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let report = derive_all(&pool, base_seed, options.count.max(1), &options.pins)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    for (i, run) in report.runs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_melody(run.run, run.seed, &run.melody);
        if options.notation {
            let mut measure = TextMeasure::default();
            run.melody.write_signature(&mut measure);
            run.melody.write_scale(&mut measure);
            println!("  {} {:<12} {}", "->".green(), "Notation", measure.render());
        }
    }
    if options.seed.is_none() {
        println!();
        println!(
            "{}",
            format!("Reproduce with --seed {}", base_seed).dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the parameter pool, falling back to the canonical one.
pub fn load_pool(path: Option<&str>) -> Result<ParameterPool> {
    match path {
        Some(path) => ParameterPool::from_path(Path::new(path))
            .with_context(|| format!("failed to load parameter pool from {}", path)),
        None => Ok(ParameterPool::default()),
    }
}

/// Derive `count` runs, each seeded from `base_seed` and its run index.
pub fn derive_all(
    pool: &ParameterPool,
    base_seed: u32,
    count: u32,
    pins: &Pins,
) -> Result<DeriveReport> {
    let mut runs = Vec::new();
    for run in 0..count {
        let seed = derive_run_seed(base_seed, run);
        let mut rng = create_rng(seed);
        let melody = derive_pinned(&mut rng, pool, pins)
            .with_context(|| format!("derivation {} (seed {}) failed", run + 1, seed))?;
        info!(run, seed, label = melody.label(), "derived melody context");
        runs.push(RunReport { run, seed, melody });
    }

    Ok(DeriveReport {
        version: gongdiao_theory::VERSION,
        base_seed,
        runs,
    })
}

/// Run the pipeline, drawing every value that is not pinned.
pub fn derive_pinned<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &ParameterPool,
    pins: &Pins,
) -> Result<MelodyContext, TheoryError> {
    let start = Derivation::new(rng, pool);
    let with_tonic = match pins.tonic {
        Some(tonic) => start.with_tonic(tonic),
        None => start.choose_tonic()?,
    };
    let with_meter = match pins.meter {
        Some(meter) => with_tonic.with_meter(meter),
        None => with_tonic.choose_meter()?,
    };
    let with_mode = match pins.mode {
        Some(mode) => with_meter.with_mode(mode),
        None => with_meter.choose_mode()?,
    };
    let scale_built = with_mode.build_scale()?;
    let with_main_note = match pins.degree {
        Some(degree) => scale_built.with_main_degree(degree)?,
        None => scale_built.choose_main_note()?,
    };
    Ok(with_main_note.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derive_all_is_reproducible() {
        let pool = ParameterPool::default();
        let a = derive_all(&pool, 42, 4, &Pins::default()).unwrap();
        let b = derive_all(&pool, 42, 4, &Pins::default()).unwrap();
        assert_eq!(a.runs.len(), 4);
        for (x, y) in a.runs.iter().zip(&b.runs) {
            assert_eq!(x.seed, y.seed);
            assert_eq!(x.melody, y.melody);
        }
    }

    #[test]
    fn test_pins_are_respected() {
        let pool = ParameterPool::default();
        let pins = Pins {
            tonic: Some(Tonic::G),
            meter: None,
            mode: Some(ModeFamily::Yanyue),
            degree: Some(Degree::Zhi),
        };
        let report = derive_all(&pool, 1, 3, &pins).unwrap();
        for run in &report.runs {
            assert_eq!(run.melody.label(), "G zhi yanyue");
        }
    }

    #[test]
    fn test_pinned_auxiliary_degree_fails() {
        let pool = ParameterPool::default();
        let pins = Pins {
            degree: Some(Degree::Aux1),
            ..Pins::default()
        };
        let err = derive_all(&pool, 1, 1, &pins).unwrap_err();
        let theory = err.downcast_ref::<TheoryError>().unwrap();
        assert_eq!(theory.code(), "THEORY_005");
    }

    #[test]
    fn test_run_rejects_excessive_count() {
        let options = DeriveOptions {
            seed: Some(1),
            count: 4_000_000_000,
            ..DeriveOptions::default()
        };
        let err = run(&options).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"), "{}", err);
    }

    #[test]
    fn test_load_pool_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.json");
        std::fs::write(&path, r#"{ "tonics": ["A"] }"#).unwrap();
        let pool = load_pool(path.to_str()).unwrap();
        assert_eq!(pool.tonics, vec![Tonic::A]);

        let report = derive_all(&pool, 5, 5, &Pins::default()).unwrap();
        assert!(report
            .runs
            .iter()
            .all(|r| r.melody.tonic().name() == "A"));
    }

    #[test]
    fn test_load_pool_missing_file() {
        let err = load_pool(Some("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to load parameter pool"));
    }

    #[test]
    fn test_report_json_shape() {
        let pool = ParameterPool::default();
        let report = derive_all(&pool, 9, 2, &Pins::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["base_seed"], 9);
        assert_eq!(value["runs"].as_array().unwrap().len(), 2);
        assert_eq!(value["runs"][0]["melody"]["scale"].as_array().unwrap().len(), 7);
    }
}
