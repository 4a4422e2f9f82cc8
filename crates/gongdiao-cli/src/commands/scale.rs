//! Scale command implementation
//!
//! Builds and prints a single gong scale without any random draws.

use anyhow::Result;
use colored::Colorize;
use gongdiao_theory::{Degree, IntervalPattern, ModeFamily, Pitch, Scale, Tonic};
use serde::Serialize;
use std::process::ExitCode;

use super::reporting::print_scale;

/// One scale position in the JSON report.
#[derive(Debug, Serialize)]
pub struct DegreeEntry {
    pub degree: Degree,
    pub structural: bool,
    pub pitch: Pitch,
}

/// JSON report of the scale command.
#[derive(Debug, Serialize)]
pub struct ScaleReport {
    pub tonic: Pitch,
    pub mode: ModeFamily,
    pub pattern: IntervalPattern,
    pub degrees: Vec<DegreeEntry>,
}

/// Build the report for `tonic` at `octave` in `mode`.
pub fn build_report(tonic: Tonic, octave: i8, mode: ModeFamily) -> Result<ScaleReport> {
    let tonic = Pitch::new(tonic.pitch_class(), octave);
    let pattern = mode.pattern();
    let scale = Scale::build(tonic, &pattern)?;
    let degrees = Degree::ALL
        .iter()
        .zip(scale.pitches())
        .map(|(&degree, &pitch)| DegreeEntry {
            degree,
            structural: degree.is_structural(),
            pitch,
        })
        .collect();

    Ok(ScaleReport {
        tonic,
        mode,
        pattern,
        degrees,
    })
}

/// Run the scale command
pub fn run(tonic: Tonic, octave: i8, mode: ModeFamily, json: bool) -> Result<ExitCode> {
    let report = build_report(tonic, octave, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {}",
        format!("{} {} ({})", report.tonic, mode.name(), mode.hanzi())
            .cyan()
            .bold(),
        report.pattern.to_string().dimmed()
    );
    let pitches = report.degrees.iter().map(|d| d.pitch).collect();
    print_scale(&Scale::from_pitches(pitches));

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_marks_auxiliary_degrees() {
        let report = build_report(Tonic::C, 4, ModeFamily::Qingyue).unwrap();
        let structural: Vec<bool> = report.degrees.iter().map(|d| d.structural).collect();
        assert_eq!(structural, [true, true, true, false, true, true, false]);
    }

    #[test]
    fn test_report_respects_octave() {
        let report = build_report(Tonic::A, 3, ModeFamily::Yayue).unwrap();
        let names: Vec<String> = report.degrees.iter().map(|d| d.pitch.to_string()).collect();
        assert_eq!(names, ["A3", "B3", "C#4", "D#4", "E4", "F#4", "G#4"]);
    }

    #[test]
    fn test_report_json() {
        let report = build_report(Tonic::D, 4, ModeFamily::Yayue).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["tonic"], "D4");
        assert_eq!(value["mode"], "yayue");
        assert_eq!(value["pattern"][3], 1);
        assert_eq!(value["degrees"][2]["pitch"], "F#4");
        assert_eq!(value["degrees"][3]["degree"], "aux-1");
    }
}
