use crate::util::{offset_samples, sample_time};

/// Length of the click-suppressing fade at each end of a melodic tone, in seconds.
pub const FADE_SECONDS: f64 = 0.01;

/// Value `idx` of `n` evenly spaced points from `start` to `end`, both inclusive.
pub fn linspace(start: f32, end: f32, n: usize, idx: usize) -> f32 {
    if n <= 1 {
        start
    } else {
        start + (end - start) * idx as f32 / (n - 1) as f32
    }
}

/// Exponential decay `e^(-rate * t)`.
#[inline]
pub fn exp_decay(rate: f32, t: f32) -> f32 {
    (-rate * t).exp()
}

/// Gain of a linear fade-in/fade-out envelope at sample `idx` of `len`.
///
/// Where the fades overlap the fade-out takes priority.
fn fade_gain(idx: usize, len: usize, fade: usize) -> f32 {
    if idx >= len - fade {
        linspace(1.0, 0.0, fade, idx - (len - fade))
    } else if idx < fade {
        linspace(0.0, 1.0, fade, idx)
    } else {
        1.0
    }
}

/// Applies a linear fade of `fade` samples at both ends of the buffer.
/// Buffers no longer than the fade are left untouched.
pub fn fade_in_out(samples: &mut [f32], fade: usize) {
    let len = samples.len();
    if fade == 0 || fade >= len {
        return;
    }
    for (idx, sample) in samples.iter_mut().enumerate() {
        *sample *= fade_gain(idx, len, fade);
    }
}

/// Multiplies the first `len` samples by a linear ramp from `start` to `end`.
/// Buffers no longer than the ramp are left untouched.
pub fn linear_ramp(samples: &mut [f32], len: usize, start: f32, end: f32) {
    if len >= samples.len() {
        return;
    }
    for (idx, sample) in samples[..len].iter_mut().enumerate() {
        *sample *= linspace(start, end, len, idx);
    }
}

/// Adds a burst of at most `length` seconds starting `delay` seconds into the buffer,
/// truncated at the end of the buffer. `burst` receives the sample index and time relative
/// to the start of the burst.
pub fn add_delayed_burst(
    samples: &mut [f32],
    delay: f64,
    length: f64,
    sample_rate: u32,
    mut burst: impl FnMut(usize, f32) -> f32,
) {
    let start = offset_samples(delay, sample_rate);
    if start >= samples.len() {
        return;
    }
    let len = offset_samples(length, sample_rate).min(samples.len() - start);
    for (idx, sample) in samples[start..start + len].iter_mut().enumerate() {
        *sample += burst(idx, sample_time(idx, sample_rate));
    }
}
