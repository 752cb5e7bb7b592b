use super::envelope::{add_delayed_burst, exp_decay, linear_ramp};
use super::noise::{recursive_filter, white_noise};
use super::oscillators::{cycle, sine};
use crate::processor::{Processor, Saturator};
use crate::util::{offset_samples, sample_count, sample_time};
use rand::Rng;

/// Start of the aftershock thump, in seconds.
const AFTERSHOCK_DELAY: f64 = 0.05;

/// Length of the aftershock thump, in seconds.
const AFTERSHOCK_LENGTH: f64 = 0.1;

/// Generates an explosion: a pitch-swept tone with sub-bass and harmonics, a white-noise crack,
/// coloured debris noise and a low aftershock thump shortly after the blast.
pub fn explosion<R: Rng + ?Sized>(
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

    let crack = white_noise(rng, len, 1.0);
    let mut debris = white_noise(rng, len, 1.0);
    for (idx, sample) in debris.iter_mut().enumerate() {
        *sample *= 0.2 * exp_decay(12.0, sample_time(idx, sample_rate));
    }
    recursive_filter(&mut debris, &[-0.5, 0.3]);

    let mut samples: Vec<f32> = crack
        .into_iter()
        .zip(debris)
        .enumerate()
        .map(|(idx, (crack, debris))| {
            let t = sample_time(idx, sample_rate);
            // A fast spike on top of a slower fall.
            let pitch = frequency * (1.0 + 2.0 * exp_decay(50.0, t)) * exp_decay(8.0, t);
            let osc = |ratio: f32| sine(cycle(pitch * ratio, idx, sample_rate));
            let body = 0.4 * osc(1.0) + 0.3 * osc(0.5) + 0.15 * osc(2.0) + 0.1 * osc(3.0);
            body + 0.4 * crack * exp_decay(30.0, t) + debris
        })
        .collect();

    add_aftershock(&mut samples, sample_rate);
    linear_ramp(&mut samples, offset_samples(0.002, sample_rate), 0.5, 2.0);
    Saturator::new(0.8, 1.25).process(&mut samples);

    for (idx, sample) in samples.iter_mut().enumerate() {
        let t = sample_time(idx, sample_rate);
        *sample *= amplitude * (0.5 + 0.5 * exp_decay(100.0, t)) * exp_decay(5.0, t);
    }
    samples
}

/// Adds the 30Hz thump that follows the blast. It is only added when it fits completely.
fn add_aftershock(samples: &mut [f32], sample_rate: u32) -> bool {
    let len = samples.len();
    let start = offset_samples(AFTERSHOCK_DELAY, sample_rate);
    let aftershock_len = offset_samples(AFTERSHOCK_LENGTH, sample_rate);
    if len <= aftershock_len || start >= len - aftershock_len {
        return false;
    }
    add_delayed_burst(samples, AFTERSHOCK_DELAY, AFTERSHOCK_LENGTH, sample_rate, |idx, t| {
        0.3 * sine(cycle(30.0, idx, sample_rate)) * exp_decay(20.0, t)
    });
    true
}
