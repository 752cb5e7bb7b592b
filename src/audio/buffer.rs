use itertools::Itertools;

pub trait AudioBuffer<'a>: Sized {
    fn samples(self) -> &'a [f32];

    /// The largest absolute sample value, or zero for an empty buffer.
    fn peak(self) -> f32 {
        crate::util::peak(self.samples())
    }
}

pub trait AudioBufferMut<'a>: AudioBuffer<'a> {
    fn samples_mut(self) -> &'a mut [f32];

    /// Multiplies the samples by `scale`.
    fn scale(self, scale: f32) {
        for sample in self.samples_mut().iter_mut() {
            *sample *= scale;
        }
    }

    /// Clips the samples to within the range `min` to `max`.
    fn clip(self, min: f32, max: f32) {
        for sample in self.samples_mut().iter_mut() {
            *sample = sample.clamp(min, max);
        }
    }

    /// Adds the samples from `other` to the samples in this buffer.
    fn add<'b>(self, other: impl AudioBuffer<'b>) {
        self.combine(other, |_, s_out, s_in| s_out + s_in)
    }

    /// Adds the samples from `other` to the samples in this buffer, multiplied by `scale`.
    fn add_scaled<'b>(self, other: impl AudioBuffer<'b>, scale: f32) {
        self.combine(other, |_, s_out, s_in| s_out + scale * s_in)
    }

    /// Panics if the buffers differ in length.
    fn combine<'b>(self, other: impl AudioBuffer<'b>, mut f: impl FnMut(usize, f32, f32) -> f32) {
        let samples = self.samples_mut().iter_mut().zip_eq(other.samples().iter());
        for (idx, (s_out, s_in)) in samples.enumerate() {
            *s_out = (f)(idx, *s_out, *s_in);
        }
    }
}

impl<'a> AudioBuffer<'a> for &'a [f32] {
    fn samples(self) -> &'a [f32] {
        self
    }
}

impl<'a> AudioBuffer<'a> for &'a mut [f32] {
    fn samples(self) -> &'a [f32] {
        self
    }
}

impl<'a> AudioBufferMut<'a> for &'a mut [f32] {
    fn samples_mut(self) -> &'a mut [f32] {
        self
    }
}
