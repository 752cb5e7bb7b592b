use crate::audio::buffer::AudioBufferMut;

/// Quantizes a mastered signal to signed 16-bit PCM.
///
/// Samples are clamped to `[-1, 1]`, scaled by `i16::MAX` and truncated toward zero,
/// so full scale maps to ±32767 and `-32768` never occurs.
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    let mut clipped = samples.to_vec();
    clipped.as_mut_slice().clip(-1.0, 1.0);
    clipped.iter().map(|&s| pcm_from_sample(s)).collect()
}

fn pcm_from_sample(sample: f32) -> i16 {
    (sample * i16::MAX as f32) as i16
}
