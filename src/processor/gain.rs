use super::Processor;
use crate::audio::buffer::{AudioBuffer, AudioBufferMut};
use std::fmt;

/// Where the rendered piece will be played, which decides its final loudness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MasteringContext {
    #[default]
    Standard,
    /// Quieter, for end-of-game stingers.
    Ending,
}

impl MasteringContext {
    pub fn ceiling(&self) -> f32 {
        match self {
            MasteringContext::Standard => 0.85,
            MasteringContext::Ending => 0.6,
        }
    }
}

impl fmt::Display for MasteringContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasteringContext::Standard => f.write_str("standard"),
            MasteringContext::Ending => f.write_str("ending"),
        }
    }
}

/// Scales a buffer so its absolute peak lands exactly on a ceiling.
pub struct Normalizer {
    ceiling: f32,
}

impl Normalizer {
    pub fn new(ceiling: f32) -> Self {
        Self { ceiling }
    }

    pub fn for_context(context: MasteringContext) -> Self {
        Self::new(context.ceiling())
    }

    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }
}

impl Processor for Normalizer {
    fn process(&mut self, samples: &mut [f32]) {
        let peak = (&*samples).peak();
        let scale = self.ceiling / peak;
        if peak == 0.0 || !scale.is_finite() {
            return;
        }
        samples.scale(scale);
    }
}
