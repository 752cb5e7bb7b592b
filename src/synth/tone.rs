use super::envelope::{fade_in_out, FADE_SECONDS};
use super::oscillators::{cycle, Waveform};
use crate::util::{offset_samples, sample_count};

/// Generates a plain oscillator tone with short fades at either end to avoid clicks.
///
/// A frequency of zero (a rest, or a symbol missing from the pitch table) produces exact silence.
pub fn tone(
    frequency: f32,
    duration: f32,
    sample_rate: u32,
    amplitude: f32,
    waveform: Waveform,
) -> Vec<f32> {
    let len = sample_count(duration, sample_rate);
    if !(frequency > 0.0 && frequency.is_finite()) {
        return vec![0.0; len];
    }

    let mut samples: Vec<f32> = (0..len)
        .map(|idx| amplitude * waveform.sample(cycle(frequency, idx, sample_rate)))
        .collect();
    fade_in_out(&mut samples, offset_samples(FADE_SECONDS, sample_rate));
    samples
}
