use std::f32::consts::PI;

/// Position within the waveform cycle, in `[0, 1)`, of a tone at `frequency` after `idx` samples.
///
/// Computed in double precision so long notes don't drift.
pub fn cycle(frequency: f32, idx: usize, sample_rate: u32) -> f32 {
    (frequency as f64 * idx as f64 / sample_rate as f64).fract() as f32
}

pub fn sine(phase: f32) -> f32 {
    (2.0 * PI * phase).sin()
}

/// The sign of a sine at the same phase, so the wave starts at zero.
pub fn square(phase: f32) -> f32 {
    let s = sine(phase);
    if s == 0.0 {
        0.0
    } else {
        s.signum()
    }
}

pub fn tri(phase: f32) -> f32 {
    2.0 * (2.0 * phase - 1.0).abs() - 1.0
}

pub fn saw(phase: f32) -> f32 {
    2.0 * phase - 1.0
}

/// Oscillator shapes available to the melodic tone generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Triangle,
    Sawtooth,
    Sine,
    /// 70% square and 30% triangle, for a chiptune lead.
    Mixed,
}

impl Waveform {
    pub fn sample(&self, phase: f32) -> f32 {
        match self {
            Waveform::Square => square(phase),
            Waveform::Triangle => tri(phase),
            Waveform::Sawtooth => saw(phase),
            Waveform::Sine => sine(phase),
            Waveform::Mixed => 0.7 * square(phase) + 0.3 * tri(phase),
        }
    }
}
