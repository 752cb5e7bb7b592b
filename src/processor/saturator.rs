use super::Processor;

/// A `tanh` soft clipper with input drive and output makeup gain.
pub struct Saturator {
    drive: f32,
    makeup: f32,
}

impl Saturator {
    pub fn new(drive: f32, makeup: f32) -> Self {
        Self { drive, makeup }
    }

    pub fn saturate(&self, sample: f32) -> f32 {
        (self.drive * sample).tanh() * self.makeup
    }
}

impl Processor for Saturator {
    fn process(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.saturate(*sample);
        }
    }
}
