pub mod audio;
pub mod constants;
pub mod convert;
pub mod engine;
pub mod note;
pub mod processor;
pub mod score;
pub mod synth;
pub mod track;
mod util;
