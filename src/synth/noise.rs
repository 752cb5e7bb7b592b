use rand::Rng;
use std::f64::consts::PI;

/// Draws a normally distributed sample with zero mean, using the Box-Muller transform.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: f32) -> f32 {
    // `gen` is in [0, 1); flip it so the logarithm never sees zero.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    z as f32 * std_dev
}

/// A buffer of Gaussian white noise.
pub fn white_noise<R: Rng + ?Sized>(rng: &mut R, len: usize, std_dev: f32) -> Vec<f32> {
    (0..len).map(|_| gaussian(rng, std_dev)).collect()
}

/// Runs the buffer through an all-pole recursive filter, in place:
/// `y[i] = x[i] + feedback[0] * y[i - 1] + feedback[1] * y[i - 2] + ...`.
///
/// The first `feedback.len()` samples pass through unchanged.
pub fn recursive_filter(samples: &mut [f32], feedback: &[f32]) {
    let order = feedback.len();
    for idx in order..samples.len() {
        let echo: f32 = feedback
            .iter()
            .enumerate()
            .map(|(k, coeff)| coeff * samples[idx - 1 - k])
            .sum();
        samples[idx] += echo;
    }
}
