pub mod buffer;
pub mod sample;

pub use sample::{AudioSample, WriteAudioError};
