use crate::num_complex::Complex64;

/// A window shape that can be evaluated one position at a time and applied
/// in place to real and complex sequences.
///
/// Implementors only need [`WindowingFn::ratio_at`]; the provided `apply*`
/// methods multiply every sample by its weight. Windows that can do better
/// (e.g. by exploiting symmetry) override them.
pub trait WindowingFn {
	/// Weight of the sample at `index` in a window spanning `n_of_samples` samples.
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64;

	/// Multiply every sample by its weight, in place, returning the same slice.
	fn apply<'a>(&self, seq: &'a mut [f64]) -> &'a mut [f64] {
		let n_of_samples = seq.len();
		for (i, sample) in seq.iter_mut().enumerate() {
			*sample *= self.ratio_at(i, n_of_samples);
		}
		seq
	}

	/// Scale both parts of every sample by its (real) weight, in place,
	/// returning the same slice. The phase of each sample is preserved.
	fn apply_complex<'a>(&self, seq: &'a mut [Complex64]) -> &'a mut [Complex64] {
		let n_of_samples = seq.len();
		for (i, sample) in seq.iter_mut().enumerate() {
			*sample = sample.scale(self.ratio_at(i, n_of_samples));
		}
		seq
	}
}
