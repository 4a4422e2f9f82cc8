use colored::Colorize;
use gongdiao_theory::{Degree, MelodyContext, NotationSink, Pitch, Scale};

/// Print the step-by-step report for one derivation.
pub(crate) fn print_melody(run: u32, seed: u32, melody: &MelodyContext) {
    println!(
        "{} {}",
        format!("Run {}", run + 1).cyan().bold(),
        format!("(seed {})", seed).dimmed()
    );

    let mode = melody.mode();
    let main = melody.main_note();
    print_step("Gong tonic", &melody.tonic().to_string());
    print_step("Meter", &melody.meter().beat_text());
    print_step(
        "Mode family",
        &format!("{} ({}) {}", mode.name(), mode.hanzi(), mode.pattern()),
    );
    print_step("Gong scale", &melody.scale().to_string());
    print_step(
        "Main note",
        &format!("{} ({}) {}", main.degree, main.degree.hanzi(), main.pitch),
    );
    println!(
        "  {} {:<12} {} / {}",
        "=>".green(),
        "Mode",
        melody.label().bold(),
        melody.label_hanzi()
    );
}

fn print_step(name: &str, value: &str) {
    println!("  {} {:<12} {}", "->".green(), name, value);
}

/// Print a scale with one line per degree, marking auxiliary degrees.
pub(crate) fn print_scale(scale: &Scale) {
    for (degree, pitch) in Degree::ALL.iter().zip(scale.pitches()) {
        let line = format!(
            "  {} {:<6} {:<4} {}",
            degree.position(),
            degree.name(),
            degree.hanzi(),
            pitch
        );
        if degree.is_structural() {
            println!("{}", line);
        } else {
            println!("{}", line.dimmed());
        }
    }
}

/// Plain-text measure built through the notation boundary.
#[derive(Debug, Default)]
pub(crate) struct TextMeasure {
    header: Vec<String>,
    notes: Vec<String>,
}

impl TextMeasure {
    pub(crate) fn render(&self) -> String {
        format!("| {} | {} |", self.header.join(" "), self.notes.join(" "))
    }
}

impl NotationSink for TextMeasure {
    fn time_signature(&mut self, meter: &str) {
        self.header.push(meter.to_string());
    }

    fn key_signature(&mut self, tonic: &Pitch) {
        self.header.push(format!("key={}", tonic.name()));
    }

    fn note(&mut self, pitch: &Pitch) {
        self.notes.push(pitch.to_string());
    }
}
