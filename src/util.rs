use crate::constants::MAX_EVENT_SECONDS;

/// Number of samples needed to hold `duration` seconds of audio, rounded to the nearest sample.
///
/// Non-finite, zero or negative durations and a zero sample rate all produce an empty buffer.
/// Durations beyond [`MAX_EVENT_SECONDS`] are clamped to it.
pub fn sample_count(duration: f32, sample_rate: u32) -> usize {
    let duration = duration as f64;
    if !(duration.is_finite() && duration > 0.0) {
        return 0;
    }
    (duration.min(MAX_EVENT_SECONDS) * sample_rate as f64).round() as usize
}

/// Number of whole samples in `seconds`, truncated. Used for fixed offsets inside a sound.
pub fn offset_samples(seconds: f64, sample_rate: u32) -> usize {
    (seconds * sample_rate as f64) as usize
}

/// Time in seconds of sample `idx`.
#[inline]
pub fn sample_time(idx: usize, sample_rate: u32) -> f32 {
    (idx as f64 / sample_rate as f64) as f32
}

/// Largest absolute sample value.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
}
