use super::{Delay, Processor};
use crate::audio::buffer::{AudioBuffer, AudioBufferMut};
use itertools::Itertools;
use tracing::debug;

const NORMAL_GAINS: [f32; 5] = [1.0, 0.6, 0.7, 0.5, 0.5];
const INTENSE_GAINS: [f32; 5] = [1.1, 0.7, 0.8, 0.6, 0.9];
/// Gain for any track beyond the end of a profile's table.
const OVERFLOW_GAIN: f32 = 0.5;
/// Track position whose activity switches the mix to the intense profile.
const INTENSITY_TRACK: usize = 4;
const INTENSITY_THRESHOLD: f32 = 0.01;

/// A positional table of per-track gains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixProfile {
    Normal,
    /// Used when the fifth track is audible, lifting everything so impacts cut through.
    Intense,
}

impl MixProfile {
    pub fn select(tracks: &[Vec<f32>]) -> Self {
        match tracks.get(INTENSITY_TRACK) {
            Some(track) if track.as_slice().peak() > INTENSITY_THRESHOLD => MixProfile::Intense,
            _ => MixProfile::Normal,
        }
    }

    pub fn gains(&self) -> &'static [f32] {
        match self {
            MixProfile::Normal => &NORMAL_GAINS,
            MixProfile::Intense => &INTENSE_GAINS,
        }
    }

    pub fn gain(&self, position: usize) -> f32 {
        self.gains().get(position).copied().unwrap_or(OVERFLOW_GAIN)
    }
}

/// Sums rendered tracks into one mono buffer and adds the room reverb.
pub struct Mixer {
    reverb: Delay,
}

impl Mixer {
    pub fn new(sample_rate: u32) -> Self {
        let mut reverb = Delay::reverb();
        reverb.set_sample_rate(sample_rate);
        Self { reverb }
    }

    /// Mixes `tracks` in order. Shorter tracks are treated as padded with trailing silence.
    pub fn mix(&mut self, tracks: &[Vec<f32>]) -> Vec<f32> {
        let len = tracks.iter().map(Vec::len).max().unwrap_or(0);
        let profile = MixProfile::select(tracks);
        debug!(
            ?profile,
            tracks = tracks.len(),
            gains = %tracks.iter().enumerate().map(|(idx, _)| profile.gain(idx)).join(", "),
            "Mixing"
        );

        let mut mixed = vec![0.0; len];
        for (idx, track) in tracks.iter().enumerate() {
            (&mut mixed[..track.len()]).add_scaled(track.as_slice(), profile.gain(idx));
        }
        self.reverb.process(&mut mixed);
        mixed
    }
}
