use crate::convert::to_pcm_i16;
use std::io::{Seek, Write};
use std::path::Path;
use thiserror::Error;

/// A finished mono recording: mastered `f32` samples and the rate they were rendered at.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSample {
    sample_rate: u32,
    data: Box<[f32]>,
}

impl AudioSample {
    pub fn new_mono(sample_rate: u32, data: Vec<f32>) -> Self {
        Self {
            sample_rate,
            data: data.into_boxed_slice(),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.data.len() as f64 / self.sample_rate as f64
    }

    pub fn to_pcm_i16(&self) -> Vec<i16> {
        to_pcm_i16(&self.data)
    }

    fn wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        }
    }

    /// Writes the sample as a 16-bit mono WAV file, replacing anything at `path`.
    pub fn write_wav(&self, path: impl AsRef<Path>) -> Result<(), WriteAudioError> {
        let mut wav = hound::WavWriter::create(path, self.wav_spec())?;
        self.write_samples(&mut wav)
    }

    pub fn write_wav_to<W: Write + Seek>(&self, writer: W) -> Result<(), WriteAudioError> {
        let mut wav = hound::WavWriter::new(writer, self.wav_spec())?;
        self.write_samples(&mut wav)
    }

    fn write_samples<W: Write + Seek>(
        &self,
        wav: &mut hound::WavWriter<W>,
    ) -> Result<(), WriteAudioError> {
        let mut writer = wav.get_i16_writer(self.data.len() as u32);
        for sample in self.to_pcm_i16() {
            writer.write_sample(sample);
        }
        writer.flush()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum WriteAudioError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Format error: {0}")]
    BadFormat(&'static str),
    #[error("Unexpected error")]
    UnexpectedError,
}

impl From<hound::Error> for WriteAudioError {
    fn from(err: hound::Error) -> Self {
        use hound::Error as A;
        use WriteAudioError as B;
        match err {
            A::IoError(inner) => B::IoError(inner),
            A::FormatError(inner) => B::BadFormat(inner),
            A::Unsupported => B::BadFormat("Unsupported format"),
            A::TooWide => B::BadFormat("Sample does not fit in 16 bits"),
            _ => B::UnexpectedError,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_wav_round_trip() {
        let sample = AudioSample::new_mono(22050, vec![0.0, 0.5, -1.0, 1.5]);
        let mut bytes = Cursor::new(Vec::new());
        sample.write_wav_to(&mut bytes).unwrap();

        bytes.set_position(0);
        let reader = hound::WavReader::new(bytes).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, 16);
        let pcm: Vec<i16> = reader.into_samples::<i16>().collect::<Result<_, _>>().unwrap();
        assert_eq!(pcm, vec![0, 16383, -32767, 32767]);
    }

    #[test]
    fn test_duration() {
        let sample = AudioSample::new_mono(44100, vec![0.0; 22050]);
        assert_eq!(sample.length(), 22050);
        assert_eq!(sample.duration_seconds(), 0.5);
        assert_eq!(AudioSample::new_mono(0, vec![0.0; 4]).duration_seconds(), 0.0);
    }
}
