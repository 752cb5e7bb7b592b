/// Symbol for a rest.
pub const REST: &str = "z";

/// Symbol for an unpitched percussion hit.
pub const PERCUSSION_HIT: &str = "x";

/// Frequencies of every symbol the notation understands, in Hz.
const PITCH_TABLE: [(&str, f32); 37] = [
    // Sub-bass
    ("A,,", 55.00),
    ("B,,", 61.74),
    ("C,,", 65.41),
    ("D,,", 73.42),
    ("E,,", 82.41),
    ("F,,", 87.31),
    ("G,,", 98.00),
    // Lower bass
    ("C,", 130.81),
    ("D,", 146.83),
    ("E,", 164.81),
    ("F,", 174.61),
    ("G,", 196.00),
    ("A,", 220.00),
    ("B,", 246.94),
    // Bass/tenor
    ("C", 261.63),
    ("D", 293.66),
    ("E", 329.63),
    ("F", 349.23),
    ("G", 392.00),
    ("A", 440.00),
    ("B", 493.88),
    // Treble
    ("c", 523.25),
    ("d", 587.33),
    ("e", 659.25),
    ("f", 698.46),
    ("g", 783.99),
    ("a", 880.00),
    ("b", 987.77),
    // High
    ("c'", 1046.50),
    ("d'", 1174.66),
    ("e'", 1318.51),
    ("f'", 1396.91),
    ("g'", 1567.98),
    ("a'", 1760.00),
    ("b'", 1975.53),
    // Specials: silence, and the nominal fundamental of a snare hit
    (REST, 0.0),
    (PERCUSSION_HIT, 200.0),
];

/// Looks up the frequency of a note symbol in Hz.
///
/// Symbols that are not in the table map to `0.0`, which every tone generator treats as silence.
pub fn frequency(symbol: &str) -> f32 {
    entry(symbol).map(|(_, hz)| hz).unwrap_or(0.0)
}

/// Whether the symbol appears in the pitch table.
pub fn is_known(symbol: &str) -> bool {
    entry(symbol).is_some()
}

/// Whether the symbol triggers a percussion hit rather than a pitched tone.
pub fn is_percussion(symbol: &str) -> bool {
    symbol == PERCUSSION_HIT
}

fn entry(symbol: &str) -> Option<(&'static str, f32)> {
    PITCH_TABLE.iter().copied().find(|(name, _)| *name == symbol)
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_hz(symbol: &str, expected: f32) {
        let actual = frequency(symbol);
        assert!(
            (actual - expected).abs() <= 1e-2,
            "{symbol}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_pitches() {
        assert_hz("A,,", 55.0);
        assert_hz("G,,", 98.0);
        assert_hz("C,", 130.81);
        assert_hz("C", 261.63);
        assert_hz("A", 440.0);
        assert_hz("a", 880.0);
        assert_hz("g", 783.99);
        assert_hz("c'", 1046.5);
        assert_hz("b'", 1975.53);
    }

    #[test]
    fn test_full_table() {
        let documented = [
            ("A,,", 55.00),
            ("B,,", 61.74),
            ("C,,", 65.41),
            ("D,,", 73.42),
            ("E,,", 82.41),
            ("F,,", 87.31),
            ("G,,", 98.00),
            ("C,", 130.81),
            ("D,", 146.83),
            ("E,", 164.81),
            ("F,", 174.61),
            ("G,", 196.00),
            ("A,", 220.00),
            ("B,", 246.94),
            ("C", 261.63),
            ("D", 293.66),
            ("E", 329.63),
            ("F", 349.23),
            ("G", 392.00),
            ("A", 440.00),
            ("B", 493.88),
            ("c", 523.25),
            ("d", 587.33),
            ("e", 659.25),
            ("f", 698.46),
            ("g", 783.99),
            ("a", 880.00),
            ("b", 987.77),
            ("c'", 1046.50),
            ("d'", 1174.66),
            ("e'", 1318.51),
            ("f'", 1396.91),
            ("g'", 1567.98),
            ("a'", 1760.00),
            ("b'", 1975.53),
            ("z", 0.0),
            ("x", 200.0),
        ];
        assert_eq!(documented.len(), PITCH_TABLE.len());
        for (symbol, expected) in documented {
            assert!(is_known(symbol), "{symbol} missing");
            assert_hz(symbol, expected);
        }
    }

    #[test]
    fn test_specials() {
        assert_eq!(frequency(REST), 0.0);
        assert_eq!(frequency(PERCUSSION_HIT), 200.0);
        assert!(is_percussion("x"));
        assert!(!is_percussion("X"));
    }

    #[test]
    fn test_unknown_symbols_are_silent() {
        for symbol in ["", "H", "c''", "C,,,", "A,,,", "zz", "[CEG]"] {
            assert_eq!(frequency(symbol), 0.0);
            assert!(!is_known(symbol));
        }
    }

    #[test]
    fn test_every_letter_resolves_in_core_octaves() {
        for letter in ["A", "B", "C", "D", "E", "F", "G"] {
            let low = format!("{},", letter);
            let lower = letter.to_string();
            let upper = letter.to_lowercase();
            let high = format!("{}'", upper);
            for symbol in [low, lower, upper, high] {
                assert!(is_known(&symbol), "{symbol} missing");
                assert!(frequency(&symbol) > 100.0);
            }
        }
    }

    #[test]
    fn test_octaves_ascend() {
        assert!(frequency("C,") < frequency("C"));
        assert!(frequency("C") < frequency("c"));
        assert!(frequency("c") < frequency("c'"));
        assert!((frequency("a") / frequency("A") - 2.0).abs() < 1e-4);
    }
}
