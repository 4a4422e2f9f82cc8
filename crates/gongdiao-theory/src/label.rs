//! Human-readable mode labels.

use crate::degree::Degree;
use crate::pitch::Pitch;

/// Composes "<tonic letter> <degree> <mode>", e.g. "G zhi yanyue".
pub fn compose(tonic: &Pitch, degree: Degree, mode_name: &str) -> String {
    format!("{} {} {}", tonic.letter(), degree.name(), mode_name)
}

/// Composes the label in traditional notation, e.g. "G 徵 燕乐调式".
pub fn compose_hanzi(tonic: &Pitch, degree: Degree, mode_hanzi: &str) -> String {
    format!("{} {} {}调式", tonic.letter(), degree.hanzi(), mode_hanzi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Tonic;

    #[test]
    fn test_compose_order() {
        assert_eq!(
            compose(&Tonic::G.pitch(), Degree::Zhi, "yanyue"),
            "G zhi yanyue"
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let tonic = Tonic::D.pitch();
        let first = compose(&tonic, Degree::Shang, "yayue");
        for _ in 0..10 {
            assert_eq!(compose(&tonic, Degree::Shang, "yayue"), first);
        }
    }

    #[test]
    fn test_compose_uses_letter_only() {
        let f_sharp: Pitch = "F#4".parse().unwrap();
        assert_eq!(compose(&f_sharp, Degree::Yu, "qingyue"), "F yu qingyue");
    }

    #[test]
    fn test_compose_hanzi() {
        assert_eq!(
            compose_hanzi(&Tonic::G.pitch(), Degree::Zhi, "燕乐"),
            "G 徵 燕乐调式"
        );
    }
}
