use crate::note;
use crate::synth::{Instrument, SnarePreset, Waveform};
use std::fmt;

/// How a voice is played, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentType {
    Melody,
    Chords,
    Bass,
    Timpani,
    Snare,
    Cannon,
    Explosion,
}

/// Name keywords in priority order. The first keyword found in the lower-cased voice name wins.
pub const NAME_KEYWORDS: [(&str, InstrumentType); 9] = [
    ("melody", InstrumentType::Melody),
    ("chord", InstrumentType::Chords),
    ("bass", InstrumentType::Bass),
    ("timpani", InstrumentType::Timpani),
    ("percussion", InstrumentType::Timpani),
    ("snare", InstrumentType::Snare),
    ("fire", InstrumentType::Cannon),
    ("impact", InstrumentType::Explosion),
    ("metal", InstrumentType::Explosion),
];

const CHORDS_CHORD_AMPLITUDE: f32 = 0.3;
const CHORD_AMPLITUDE: f32 = 0.25;
const SNARE_AMPLITUDE: f32 = 0.5;

impl InstrumentType {
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        NAME_KEYWORDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|&(_, instrument)| instrument)
            .unwrap_or(InstrumentType::Melody)
    }

    /// Level of each bracketed chord in a voice of this type.
    pub fn chord_amplitude(&self) -> f32 {
        match self {
            InstrumentType::Chords => CHORDS_CHORD_AMPLITUDE,
            _ => CHORD_AMPLITUDE,
        }
    }

    /// The instrument that plays a single `symbol` in a voice of this type.
    pub fn note_instrument(&self, symbol: &str) -> Instrument {
        if note::is_percussion(symbol) {
            let preset = match self {
                InstrumentType::Snare => SnarePreset::Crisp,
                _ => SnarePreset::Standard,
            };
            return Instrument::Snare {
                preset,
                amplitude: SNARE_AMPLITUDE,
            };
        }
        match self {
            InstrumentType::Melody => Instrument::Tone {
                waveform: Waveform::Mixed,
                amplitude: 0.4,
            },
            InstrumentType::Bass => Instrument::Tone {
                waveform: Waveform::Sawtooth,
                amplitude: 0.35,
            },
            InstrumentType::Chords => Instrument::Tone {
                waveform: Waveform::Sine,
                amplitude: 0.3,
            },
            InstrumentType::Timpani => Instrument::Timpani { amplitude: 0.4 },
            // Snare voices only sound on percussion hits.
            InstrumentType::Snare => Instrument::Silence,
            InstrumentType::Cannon => Instrument::Cannon { amplitude: 0.9 },
            InstrumentType::Explosion => Instrument::Explosion { amplitude: 0.8 },
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstrumentType::Melody => "melody",
            InstrumentType::Chords => "chords",
            InstrumentType::Bass => "bass",
            InstrumentType::Timpani => "timpani",
            InstrumentType::Snare => "snare",
            InstrumentType::Cannon => "cannon",
            InstrumentType::Explosion => "explosion",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::InstrumentType::*;

    #[test]
    fn test_from_name() {
        assert_eq!(InstrumentType::from_name("Melody"), Melody);
        assert_eq!(InstrumentType::from_name("Chords"), Chords);
        assert_eq!(InstrumentType::from_name("Bass Line"), Bass);
        assert_eq!(InstrumentType::from_name("TIMPANI"), Timpani);
        assert_eq!(InstrumentType::from_name("percussion"), Timpani);
        assert_eq!(InstrumentType::from_name("Snare"), Snare);
        assert_eq!(InstrumentType::from_name("Cannon Fire"), Cannon);
        assert_eq!(InstrumentType::from_name("Impact"), Explosion);
        assert_eq!(InstrumentType::from_name("Metal Clang"), Explosion);
        assert_eq!(InstrumentType::from_name("Strings"), Melody);
        assert_eq!(InstrumentType::from_name(""), Melody);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(InstrumentType::from_name("Melody Chords"), Melody);
        assert_eq!(InstrumentType::from_name("Bass Chord"), Chords);
        assert_eq!(InstrumentType::from_name("Snare Percussion"), Timpani);
        assert_eq!(InstrumentType::from_name("Fire Impact"), Cannon);
        assert_eq!(InstrumentType::from_name("Metal Snare"), Snare);
    }

    #[test]
    fn test_percussion_hits_use_snare_presets() {
        assert_eq!(
            Snare.note_instrument("x"),
            Instrument::Snare {
                preset: SnarePreset::Crisp,
                amplitude: 0.5
            }
        );
        for instrument in [Melody, Chords, Bass, Timpani, Cannon, Explosion] {
            assert_eq!(
                instrument.note_instrument("x"),
                Instrument::Snare {
                    preset: SnarePreset::Standard,
                    amplitude: 0.5
                }
            );
        }
    }

    #[test]
    fn test_pitched_notes() {
        assert_eq!(Snare.note_instrument("C"), Instrument::Silence);
        assert_eq!(Cannon.note_instrument("C,"), Instrument::Cannon { amplitude: 0.9 });
        assert_eq!(
            Bass.note_instrument("C,"),
            Instrument::Tone {
                waveform: Waveform::Sawtooth,
                amplitude: 0.35
            }
        );
        assert_eq!(Chords.chord_amplitude(), 0.3);
        assert_eq!(Melody.chord_amplitude(), 0.25);
    }
}
