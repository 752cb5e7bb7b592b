use crate::util::sample_count;

/// Converts beat durations into seconds and samples at a constant tempo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    sample_rate: u32,
    seconds_per_beat: f32,
}

impl Timeline {
    /// A tempo of zero makes every event empty rather than infinitely long.
    pub fn new(tempo: u32, sample_rate: u32) -> Self {
        let seconds_per_beat = if tempo == 0 { 0.0 } else { 60.0 / tempo as f32 };
        Self {
            sample_rate,
            seconds_per_beat,
        }
    }

    pub fn seconds(&self, beats: f32) -> f32 {
        beats * self.seconds_per_beat
    }

    pub fn samples(&self, beats: f32) -> usize {
        sample_count(self.seconds(beats), self.sample_rate)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_conversion() {
        let timeline = Timeline::new(120, 44100);
        assert_eq!(timeline.seconds(1.0), 0.5);
        assert_eq!(timeline.samples(0.5), 11025);
        assert_eq!(timeline.samples(2.0), 44100);

        let timeline = Timeline::new(90, 44100);
        assert_eq!(timeline.samples(1.5), 44100);
    }

    #[test]
    fn test_zero_tempo() {
        let timeline = Timeline::new(0, 44100);
        assert_eq!(timeline.samples(4.0), 0);
    }
}
