use super::envelope::exp_decay;
use super::noise::gaussian;
use super::oscillators::{cycle, sine};
use crate::util::{sample_count, sample_time};
use rand::Rng;

/// Generates a timpani stroke: a pitch that settles from 20% sharp onto `frequency`,
/// a fifth-above overtone and a little attack noise, all under an exponential decay.
pub fn timpani<R: Rng + ?Sized>(
    frequency: f32,
    duration: f32,
    sample_rate: u32,
    amplitude: f32,
    rng: &mut R,
) -> Vec<f32> {
    let len = sample_count(duration, sample_rate);
    if !(frequency > 0.0 && frequency.is_finite()) {
        return vec![0.0; len];
    }

    (0..len)
        .map(|idx| {
            let t = sample_time(idx, sample_rate);
            let noise = 0.1 * gaussian(rng, 0.05) * exp_decay(10.0, t);
            let body = membrane(frequency, idx, sample_rate) + noise;
            amplitude * exp_decay(3.0, t) * body
        })
        .collect()
}

/// The struck pitch glides down from 20% sharp onto `frequency`.
fn membrane_pitch(frequency: f32, t: f32) -> f32 {
    frequency * (1.0 + 0.2 * exp_decay(8.0, t))
}

/// Fundamental plus a quieter fifth, both following the glide.
fn membrane(frequency: f32, idx: usize, sample_rate: u32) -> f32 {
    let pitch = membrane_pitch(frequency, sample_time(idx, sample_rate));
    0.6 * sine(cycle(pitch, idx, sample_rate)) + 0.3 * sine(cycle(pitch * 1.5, idx, sample_rate))
}
