use super::Processor;
use crate::constants::DEFAULT_SAMPLE_RATE;
use crate::util::offset_samples;

/// A single feed-forward echo: each sample gains `decay` times the dry sample
/// `delay` seconds earlier.
pub struct Delay {
    sample_rate: u32,
    delay: f64,
    decay: f32,
}

impl Delay {
    pub fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            delay: 0.0,
            decay: 0.0,
        }
    }

    /// The short room reflection applied to every mix: 30 ms at 15%.
    pub fn reverb() -> Self {
        let mut delay = Self::new();
        delay.set_delay(0.03);
        delay.set_decay(0.15);
        delay
    }

    pub fn set_delay(&mut self, delay: f64) {
        self.delay = delay;
    }

    pub fn set_decay(&mut self, decay: f32) {
        self.decay = decay;
    }

    pub fn delay_samples(&self) -> usize {
        offset_samples(self.delay, self.sample_rate)
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for Delay {
    fn set_sample_rate(&mut self, sample_rate: u32) {
        self.sample_rate = sample_rate;
    }

    fn process(&mut self, samples: &mut [f32]) {
        let delay = self.delay_samples();
        if delay == 0 || samples.len() <= delay {
            return;
        }
        // Walk backwards so the source of every echo is still dry.
        for idx in (delay..samples.len()).rev() {
            samples[idx] += self.decay * samples[idx - delay];
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reverb_offset() {
        let mut delay = Delay::reverb();
        delay.set_sample_rate(44100);
        assert_eq!(delay.delay_samples(), 1323);
        delay.set_sample_rate(1000);
        assert_eq!(delay.delay_samples(), 30);
    }

    #[test]
    fn test_echo_is_not_fed_back() {
        let mut delay = Delay::reverb();
        delay.set_sample_rate(1000);
        let mut samples = vec![0.0; 100];
        samples[0] = 1.0;
        delay.process(&mut samples);
        assert_eq!(samples[0], 1.0);
        assert_eq!(samples[30], 0.15);
        assert_eq!(samples[60], 0.0);
        assert_eq!(samples.iter().filter(|&&s| s != 0.0).count(), 2);
    }

    #[test]
    fn test_short_buffers_are_untouched() {
        let mut delay = Delay::reverb();
        delay.set_sample_rate(1000);
        let mut samples = vec![1.0; 30];
        delay.process(&mut samples);
        assert!(samples.iter().all(|&s| s == 1.0));
    }
}
