//! Turns a parsed voice into one contiguous buffer of samples.

pub use self::instrument::{InstrumentType, NAME_KEYWORDS};
pub use self::timeline::Timeline;
use crate::note;
use crate::score::{NoteEvent, Voice};
use crate::synth::chord;
use rand::Rng;

mod instrument;
mod timeline;

/// Renders every event of `voice` in order and concatenates the results.
///
/// Each event occupies exactly its own duration, so the track length is the sum of the
/// event lengths. Noise-based instruments draw from `rng`.
pub fn render_track<R: Rng + ?Sized>(
    voice: &Voice,
    tempo: u32,
    sample_rate: u32,
    instrument: InstrumentType,
    rng: &mut R,
) -> Vec<f32> {
    let timeline = Timeline::new(tempo, sample_rate);
    let mut track = Vec::with_capacity(timeline.samples(voice.total_beats()));
    for event in &voice.events {
        let duration = timeline.seconds(event.beats());
        match event {
            NoteEvent::Chord { symbols, .. } => {
                track.extend(chord(symbols, duration, sample_rate, instrument.chord_amplitude()));
            }
            NoteEvent::Note { symbol, .. } => {
                let samples = instrument
                    .note_instrument(symbol)
                    .synthesize(note::frequency(symbol), duration, sample_rate, rng);
                track.extend(samples);
            }
            NoteEvent::Rest { beats } => {
                track.resize(track.len() + timeline.samples(*beats), 0.0);
            }
        }
    }
    track
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::sample_count;
    use rand::{rngs::StdRng, SeedableRng};

    fn note(symbol: &str, beats: f32) -> NoteEvent {
        NoteEvent::Note {
            symbol: symbol.to_string(),
            beats,
        }
    }

    #[test]
    fn test_track_length_is_sum_of_events() {
        let voice = Voice::new(
            1,
            "Melody",
            vec![
                note("C", 0.5),
                note("D", 0.5),
                note("E", 0.5),
                note("F", 1.0),
                NoteEvent::Rest { beats: 1.0 },
            ],
        );
        let mut rng = StdRng::seed_from_u64(1);
        let track = render_track(&voice, 120, 44100, InstrumentType::Melody, &mut rng);
        assert_eq!(track.len(), 3 * 11025 + 2 * 22050);
        // The trailing rest is silent.
        assert!(track[track.len() - 22050..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_every_instrument_keeps_timing() {
        let events = vec![
            note("C,", 1.0),
            note("x", 0.5),
            NoteEvent::Chord {
                symbols: vec!["C".into(), "E".into(), "G".into()],
                beats: 1.0,
            },
            NoteEvent::Rest { beats: 0.25 },
            note("H", 0.5),
        ];
        let expected: usize = events.iter().map(|e| sample_count(e.beats() * 0.5, 44100)).sum();
        let voice = Voice::new(2, "any", events);
        for (_, instrument) in NAME_KEYWORDS {
            let mut rng = StdRng::seed_from_u64(7);
            let track = render_track(&voice, 120, 44100, instrument, &mut rng);
            assert_eq!(track.len(), expected, "{instrument}");
        }
    }

    #[test]
    fn test_snare_voice_only_plays_hits() {
        let voice = Voice::new(3, "Snare", vec![note("C", 1.0), note("x", 1.0)]);
        let mut rng = StdRng::seed_from_u64(5);
        let track = render_track(&voice, 120, 44100, InstrumentType::Snare, &mut rng);
        assert!(track[..22050].iter().all(|&s| s == 0.0));
        assert!(track[22050..].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_huge_events_are_clamped() {
        let events = vec![note("C", 5e8), NoteEvent::Rest { beats: 5e8 }];
        let voice = Voice::new(1, "Melody", events);
        let mut rng = StdRng::seed_from_u64(5);
        let track = render_track(&voice, 120, 1000, InstrumentType::Melody, &mut rng);
        assert_eq!(track.len(), 2 * 60_000);
    }

    #[test]
    fn test_unknown_pitch_is_silent() {
        let voice = Voice::new(1, "Melody", vec![note("H", 1.0)]);
        let mut rng = StdRng::seed_from_u64(5);
        let track = render_track(&voice, 120, 44100, InstrumentType::Melody, &mut rng);
        assert_eq!(track.len(), 22050);
        assert!(track.iter().all(|&s| s == 0.0));
    }
}
