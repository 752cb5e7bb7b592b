use super::oscillators::Waveform;
use super::tone::tone;
use crate::audio::buffer::AudioBufferMut;
use crate::note;
use crate::util::sample_count;

/// Generates a chord as a sum of sine tones.
///
/// Each tone gets `amplitude / symbols.len()` so a chord is about as loud as a single note.
/// Symbols missing from the pitch table contribute nothing.
pub fn chord<S: AsRef<str>>(
    symbols: &[S],
    duration: f32,
    sample_rate: u32,
    amplitude: f32,
) -> Vec<f32> {
    let mut samples = vec![0.0; sample_count(duration, sample_rate)];
    if symbols.is_empty() {
        return samples;
    }

    let voice_amplitude = amplitude / symbols.len() as f32;
    for symbol in symbols.iter().map(AsRef::as_ref).filter(|s| note::is_known(s)) {
        let frequency = note::frequency(symbol);
        let voice = tone(frequency, duration, sample_rate, voice_amplitude, Waveform::Sine);
        samples.as_mut_slice().add(voice.as_slice());
    }
    samples
}
