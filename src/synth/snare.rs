use super::envelope::{exp_decay, linear_ramp};
use super::noise::{recursive_filter, white_noise};
use super::oscillators::{cycle, sine};
use crate::util::{offset_samples, sample_count, sample_time};
use rand::Rng;

/// Pitch of the drum body, in Hz.
const BODY_HZ: f32 = 200.0;

/// Length of the onset ramp, in seconds.
const ATTACK_SECONDS: f64 = 0.001;

/// Tunings of the snare model. The two presets are kept distinct on purpose:
/// each voice context was voiced against its own one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnarePreset {
    /// Short and bright, with a hard onset. Used by voices dedicated to snare.
    Crisp,
    /// Slightly longer and darker. Used for hits scattered through other voices.
    Standard,
}

impl SnarePreset {
    /// Rate of the exponential amplitude decay, per second.
    pub fn decay(&self) -> f32 {
        match self {
            SnarePreset::Crisp => 25.0,
            SnarePreset::Standard => 20.0,
        }
    }

    /// Feedback coefficient of the noise colouring filter.
    pub fn feedback(&self) -> f32 {
        match self {
            SnarePreset::Crisp => -0.92,
            SnarePreset::Standard => -0.95,
        }
    }

    /// Gain reached at the end of the onset ramp.
    pub fn attack_gain(&self) -> f32 {
        match self {
            SnarePreset::Crisp => 3.0,
            SnarePreset::Standard => 2.0,
        }
    }
}

/// Generates a snare hit. The model is unpitched, so no frequency is taken.
pub fn snare<R: Rng + ?Sized>(
    duration: f32,
    sample_rate: u32,
    amplitude: f32,
    preset: SnarePreset,
    rng: &mut R,
) -> Vec<f32> {
    let len = sample_count(duration, sample_rate);

    let mut rattle = white_noise(rng, len, 0.75);
    recursive_filter(&mut rattle, &[preset.feedback()]);

    let mut samples: Vec<f32> = rattle
        .into_iter()
        .enumerate()
        .map(|(idx, noise)| {
            let t = sample_time(idx, sample_rate);
            let body = 0.25 * sine(cycle(BODY_HZ, idx, sample_rate))
                + 0.1 * sine(cycle(BODY_HZ * 1.5, idx, sample_rate));
            amplitude * exp_decay(preset.decay(), t) * (body + noise)
        })
        .collect();

    let attack = offset_samples(ATTACK_SECONDS, sample_rate);
    linear_ramp(&mut samples, attack, 0.0, preset.attack_gain());
    samples
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn energy(samples: &[f32]) -> f32 {
        samples.iter().map(|s| s * s).sum()
    }

    #[test]
    fn test_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(snare(0.25, 44100, 0.5, SnarePreset::Crisp, &mut rng).len(), 11025);
        assert!(snare(0.0, 44100, 0.5, SnarePreset::Crisp, &mut rng).is_empty());
    }

    #[test]
    fn test_onset_starts_at_zero() {
        let mut rng = StdRng::seed_from_u64(2);
        let samples = snare(0.25, 44100, 0.5, SnarePreset::Standard, &mut rng);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_energy_decays() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples = snare(0.5, 44100, 0.5, SnarePreset::Crisp, &mut rng);
        let early = energy(&samples[..2205]);
        let late = energy(&samples[8820..11025]);
        assert!(late < early * 0.05, "early {early} late {late}");
    }

    #[test]
    fn test_presets_differ() {
        assert_ne!(SnarePreset::Crisp, SnarePreset::Standard);
        assert!(SnarePreset::Crisp.decay() > SnarePreset::Standard.decay());
        assert!(SnarePreset::Crisp.attack_gain() > SnarePreset::Standard.attack_gain());

        // The slower decay leaves more energy in the tail.
        let crisp = snare(0.5, 44100, 0.5, SnarePreset::Crisp, &mut StdRng::seed_from_u64(4));
        let standard = snare(0.5, 44100, 0.5, SnarePreset::Standard, &mut StdRng::seed_from_u64(4));
        let tail = 4410..22050;
        assert!(energy(&standard[tail.clone()]) > energy(&crisp[tail]));
    }

    #[test]
    fn test_seeded_hits_repeat() {
        let a = snare(0.1, 44100, 0.5, SnarePreset::Crisp, &mut StdRng::seed_from_u64(9));
        let b = snare(0.1, 44100, 0.5, SnarePreset::Crisp, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
