use crate::audio::AudioSample;
use crate::constants::DEFAULT_SAMPLE_RATE;
use crate::processor::{MasteringContext, Mixer, Normalizer, Processor};
use crate::score::{Score, Voice};
use crate::track::{render_track, InstrumentType};
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

/// Spreads voice ids across the seed space so neighbouring voices get unrelated noise.
const VOICE_SEED_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub sample_rate: u32,
    /// Makes noise-based instruments reproducible. Fresh entropy is used when absent.
    pub seed: Option<u64>,
    pub context: MasteringContext,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: None,
            context: MasteringContext::Standard,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered(AudioSample),
    /// The score has no voices, or every voice rendered to zero samples.
    Empty,
}

/// Renders whole scores: voices in parallel, then mixing and mastering.
pub struct RenderEngine {
    options: RenderOptions,
}

impl RenderEngine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Parses and renders notation text.
    pub fn render_text(&self, text: &str) -> RenderOutcome {
        self.render(&Score::parse(text))
    }

    pub fn render(&self, score: &Score) -> RenderOutcome {
        if score.is_empty() {
            return RenderOutcome::Empty;
        }

        let tracks = self.render_tracks(score);
        let mut mixed = Mixer::new(self.options.sample_rate).mix(&tracks);
        if mixed.is_empty() {
            return RenderOutcome::Empty;
        }

        Normalizer::for_context(self.options.context).process(&mut mixed);
        RenderOutcome::Rendered(AudioSample::new_mono(self.options.sample_rate, mixed))
    }

    /// Renders each voice to its own track, in voice id order.
    pub fn render_tracks(&self, score: &Score) -> Vec<Vec<f32>> {
        let voices: Vec<&Voice> = score.voices().collect();
        voices
            .par_iter()
            .map(|voice| {
                let instrument = InstrumentType::from_name(&voice.name);
                let mut rng = self.voice_rng(voice.id);
                let track = render_track(
                    voice,
                    score.tempo,
                    self.options.sample_rate,
                    instrument,
                    &mut rng,
                );
                debug!(
                    voice = voice.id,
                    name = %voice.name,
                    %instrument,
                    events = voice.events.len(),
                    samples = track.len(),
                    "Rendered voice"
                );
                track
            })
            .collect()
    }

    fn voice_rng(&self, voice_id: u32) -> StdRng {
        match self.options.seed {
            Some(seed) => {
                StdRng::seed_from_u64(seed ^ (voice_id as u64).wrapping_mul(VOICE_SEED_MULTIPLIER))
            }
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::peak;

    const MELODY: &str =
        "X:1\nT:Test\nM:4/4\nL:1/8\nQ:1/4=120\nK:C\nV:1 name=\"Melody\"\nCDEF2z2\n";

    fn rendered(outcome: RenderOutcome) -> AudioSample {
        match outcome {
            RenderOutcome::Rendered(sample) => sample,
            RenderOutcome::Empty => panic!("expected audio"),
        }
    }

    #[test]
    fn test_melody_end_to_end() {
        let engine = RenderEngine::default();
        let sample = rendered(engine.render_text(MELODY));
        assert_eq!(sample.sample_rate(), 44100);
        // 3 * 0.25 s + 2 * 0.5 s, plus nothing from the reverb.
        assert_eq!(sample.length(), 77175);
        assert!((peak(sample.data()) - 0.85).abs() < 1e-4);
        assert!(sample.data()[77175 - 22050..].iter().all(|&s| s.abs() < 0.2));
    }

    #[test]
    fn test_ending_context_is_quieter() {
        let engine = RenderEngine::new(RenderOptions {
            context: MasteringContext::Ending,
            ..Default::default()
        });
        let sample = rendered(engine.render_text(MELODY));
        assert!((peak(sample.data()) - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_nothing_to_render() {
        let engine = RenderEngine::default();
        assert_eq!(engine.render_text(""), RenderOutcome::Empty);
        assert_eq!(engine.render(&Score::default()), RenderOutcome::Empty);
        // Without a key line the implicit voice has no events and mixes to nothing.
        assert_eq!(engine.render_text("X:1\nT:Nothing\n"), RenderOutcome::Empty);
    }

    #[test]
    fn test_oversized_durations_do_not_abort() {
        let engine = RenderEngine::default();
        let sample = rendered(engine.render_text("K:C\nC999999999 D\n"));
        assert_eq!(sample.length(), 11025);

        // Only the absurd note is present, so nothing is left to render.
        assert_eq!(engine.render_text("K:C\nC999999999\n"), RenderOutcome::Empty);
    }

    #[test]
    fn test_all_rests_stay_silent() {
        let engine = RenderEngine::default();
        let sample = rendered(engine.render_text("K:C\nz4\n"));
        assert_eq!(sample.length(), 44100);
        assert!(sample.data().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_seeded_renders_are_reproducible() {
        let text = concat!(
            "L:1/8\nQ:1/4=120\nK:C\n",
            "V:1 name=\"Melody\"\nC4\n",
            "V:2 name=\"Snare\"\nx2x2\n",
            "V:3 name=\"Impact\"\nC,4\n",
        );
        let options = RenderOptions {
            seed: Some(42),
            ..Default::default()
        };
        let first = RenderEngine::new(options).render_text(text);
        let second = RenderEngine::new(options).render_text(text);
        assert_eq!(first, second);

        let other = RenderEngine::new(RenderOptions {
            seed: Some(43),
            ..Default::default()
        })
        .render_text(text);
        assert_ne!(first, other);
    }

    #[test]
    fn test_tracks_follow_voice_order() {
        let text = "K:C\nV:2 name=\"Bass\"\nC4\nV:1 name=\"Melody\"\nC2\n";
        let score = Score::parse(text);
        let tracks = RenderEngine::default().render_tracks(&score);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].len(), 22050);
        assert_eq!(tracks[1].len(), 44100);
    }
}
