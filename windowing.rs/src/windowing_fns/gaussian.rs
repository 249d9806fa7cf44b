use math_utils::{ext::FromUsize, symmetry};

use crate::{num_complex::Complex64, WindowingFn};

/// Gaussian window, `w[k] = exp(-0.5 * ((k - M) / (σ * M))²)` with `M = (N - 1) / 2`.
///
/// Smaller values of σ give a steeper taper: better side lobe suppression
/// at the cost of a wider main lobe.
///
/// σ is not validated. σ = 0 zeroes every weight except the center one, which
/// evaluates to `0 / 0` (NaN). A single-sample window is NaN as well, because `M = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianWindow {
	sigma: f64,
}

impl GaussianWindow {
	#[must_use]
	pub fn new(sigma: f64) -> Self {
		Self { sigma }
	}

	#[must_use]
	pub fn sigma(&self) -> f64 {
		self.sigma
	}

	fn ratio_around(&self, index: usize, center: f64) -> f64 {
		let x = (f64::from_usize(index) - center) / (self.sigma * center);
		f64::exp(-0.5 * x.powi(2))
	}
}

impl WindowingFn for GaussianWindow {
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		self.ratio_around(index, symmetry::center(n_of_samples))
	}

	fn apply<'a>(&self, seq: &'a mut [f64]) -> &'a mut [f64] {
		let center = symmetry::center(seq.len());
		for (i, sample) in seq.iter_mut().enumerate() {
			*sample *= self.ratio_around(i, center);
		}
		seq
	}

	fn apply_complex<'a>(&self, seq: &'a mut [Complex64]) -> &'a mut [Complex64] {
		let center = symmetry::center(seq.len());
		for (i, sample) in seq.iter_mut().enumerate() {
			*sample = sample.scale(self.ratio_around(i, center));
		}
		seq
	}
}
