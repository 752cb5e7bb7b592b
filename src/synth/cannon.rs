use super::envelope::{add_delayed_burst, exp_decay, linear_ramp};
use super::noise::{gaussian, recursive_filter, white_noise};
use super::oscillators::{cycle, sine};
use crate::processor::{Processor, Saturator};
use crate::util::{offset_samples, sample_count, sample_time};
use rand::Rng;

/// Inharmonic partials of the barrel ring, as multiples of the fundamental.
const BARREL_PARTIALS: [f32; 3] = [3.7, 5.2, 7.1];

/// Generates a cannon shot: a low blast and boom, a metallic barrel ring, a filtered crack,
/// a mechanical clunk at the onset, then a delayed pressure hiss and shell ring.
///
/// The layers are summed, punched up over the first half millisecond and soft clipped,
/// so peaks stay controlled while the shot stays loud.
pub fn cannon<R: Rng + ?Sized>(
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

    let blast_hz = frequency * 0.5;
    let boom_hz = frequency * 0.15;
    let osc = |hz: f32, idx: usize| sine(cycle(hz, idx, sample_rate));

    // Tonal layers: blast, boom and barrel resonance.
    let mut samples: Vec<f32> = (0..len)
        .map(|idx| {
            let t = sample_time(idx, sample_rate);
            let blast = (0.4 * osc(blast_hz, idx)
                + 0.25 * osc(blast_hz * 1.5, idx)
                + 0.15 * osc(blast_hz * 2.0, idx)
                + 0.1 * osc(blast_hz * 3.0, idx))
                * exp_decay(30.0, t);
            let boom = 0.5 * osc(boom_hz, idx) * exp_decay(12.0, t);
            let ring = 0.3 * osc(frequency * 2.5, idx)
                + BARREL_PARTIALS
                    .iter()
                    .map(|partial| 0.1 * osc(frequency * partial, idx))
                    .sum::<f32>();
            blast + boom + ring * exp_decay(25.0, t)
        })
        .collect();

    // Crack: band-limited noise burst.
    let mut crack = white_noise(rng, len, 1.0);
    for (idx, sample) in crack.iter_mut().enumerate() {
        *sample *= 0.3 * exp_decay(50.0, sample_time(idx, sample_rate));
    }
    recursive_filter(&mut crack, &[-0.6, 0.2]);
    for (sample, crack) in samples.iter_mut().zip(crack) {
        *sample += crack;
    }

    // Clunk: 2ms of 800Hz with a doubled click at the very start.
    let clunk_len = offset_samples(0.002, sample_rate);
    if clunk_len < len {
        let click_len = offset_samples(0.0002, sample_rate);
        for idx in 0..clunk_len {
            let t = sample_time(idx, sample_rate);
            let click = if idx < click_len { 2.0 } else { 1.0 };
            samples[idx] += click * 0.35 * osc(800.0, idx) * exp_decay(80.0, t);
        }
    }

    // Pressure release: 50ms of hiss starting 10ms in.
    add_delayed_burst(&mut samples, 0.01, 0.05, sample_rate, |_, t| {
        0.2 * gaussian(rng, 1.0) * exp_decay(15.0, t)
    });

    add_shell_ring(&mut samples, sample_rate);

    linear_ramp(&mut samples, offset_samples(0.0005, sample_rate), 1.0, 2.5);
    Saturator::new(0.6, 1.6).process(&mut samples);

    for (idx, sample) in samples.iter_mut().enumerate() {
        let t = sample_time(idx, sample_rate);
        *sample *= amplitude * (0.8 * exp_decay(35.0, t) + 0.2 * exp_decay(8.0, t));
    }
    samples
}

/// Shell ejection: 20ms of 1.2kHz ring starting 30ms in.
fn add_shell_ring(samples: &mut [f32], sample_rate: u32) {
    add_delayed_burst(samples, 0.03, 0.02, sample_rate, |idx, t| {
        0.15 * sine(cycle(1200.0, idx, sample_rate)) * exp_decay(40.0, t)
    });
}
