pub use self::cannon::cannon;
pub use self::chord::chord;
pub use self::explosion::explosion;
pub use self::oscillators::Waveform;
pub use self::snare::{snare, SnarePreset};
pub use self::timpani::timpani;
pub use self::tone::tone;
use crate::util::sample_count;
use rand::Rng;

mod cannon;
mod chord;
mod envelope;
mod explosion;
pub mod noise;
pub mod oscillators;
mod snare;
mod timpani;
mod tone;

/// A fully configured sound source for a single pitched event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instrument {
    Tone { waveform: Waveform, amplitude: f32 },
    Timpani { amplitude: f32 },
    Snare { preset: SnarePreset, amplitude: f32 },
    Cannon { amplitude: f32 },
    Explosion { amplitude: f32 },
    /// Produces zeros for the duration of the event.
    Silence,
}

impl Instrument {
    /// Renders one event. Unpitched instruments ignore `frequency`.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        frequency: f32,
        duration: f32,
        sample_rate: u32,
        rng: &mut R,
    ) -> Vec<f32> {
        match *self {
            Instrument::Tone {
                waveform,
                amplitude,
            } => tone(frequency, duration, sample_rate, amplitude, waveform),
            Instrument::Timpani { amplitude } => {
                timpani(frequency, duration, sample_rate, amplitude, rng)
            }
            Instrument::Snare { preset, amplitude } => {
                snare(duration, sample_rate, amplitude, preset, rng)
            }
            Instrument::Cannon { amplitude } => {
                cannon(frequency, duration, sample_rate, amplitude, rng)
            }
            Instrument::Explosion { amplitude } => {
                explosion(frequency, duration, sample_rate, amplitude, rng)
            }
            Instrument::Silence => vec![0.0; sample_count(duration, sample_rate)],
        }
    }
}
