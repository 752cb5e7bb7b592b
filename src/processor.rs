pub use delay::Delay;
pub use gain::{MasteringContext, Normalizer};
pub use mixer::{MixProfile, Mixer};
pub use saturator::Saturator;

mod delay;
mod gain;
mod mixer;
mod saturator;

/// An in-place transformation of a mono block of samples.
pub trait Processor {
    /// Provides the audio sample rate to the processor.
    /// Processors that work in seconds must receive this before calling `process`.
    fn set_sample_rate(&mut self, _sample_rate: u32) {}

    /// Processes a block of audio in place.
    fn process(&mut self, samples: &mut [f32]);
}
