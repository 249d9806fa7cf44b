use std::f64::consts::{PI, TAU};

use math_utils::{ext::FromUsize, symmetry};

use crate::{num_complex::Complex64, WindowingFn};

mod gaussian;
pub use gaussian::*;

mod tukey;
pub use tukey::*;

/// All weights are 1, applying it leaves the sequence untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectangularWindow;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HannWindow;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HammingWindow;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackmanWindow;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SineWindow;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangularWindow;
/// Main lobe of the normalized sinc function, stretched over the whole window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanczosWindow;

macro_rules! impl_new_for_unit_window {
	($t:ty) => {
		impl $t {
			#[must_use]
			pub fn new() -> Self {
				Self
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_new_for_unit_window!($t);
		impl_new_for_unit_window!($($others),+);
	};
}

impl_new_for_unit_window!(
	RectangularWindow,
	HannWindow,
	HammingWindow,
	BlackmanWindow,
	SineWindow,
	TriangularWindow,
	LanczosWindow
);

/// `N - 1`, computed in floating point.
fn span(n_of_samples: usize) -> f64 {
	f64::from_usize(n_of_samples) - 1.
}

impl WindowingFn for RectangularWindow {
	fn ratio_at(&self, _index: usize, _n_of_samples: usize) -> f64 {
		1.
	}

	fn apply<'a>(&self, seq: &'a mut [f64]) -> &'a mut [f64] {
		seq
	}

	fn apply_complex<'a>(&self, seq: &'a mut [Complex64]) -> &'a mut [Complex64] {
		seq
	}
}

impl WindowingFn for HannWindow {
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		0.5 * (1. - f64::cos((TAU * f64::from_usize(index)) / span(n_of_samples)))
	}
}

impl WindowingFn for HammingWindow {
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		0.54 - 0.46 * f64::cos((TAU * f64::from_usize(index)) / span(n_of_samples))
	}
}

impl WindowingFn for BlackmanWindow {
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		let x = (TAU * f64::from_usize(index)) / span(n_of_samples);
		0.42 - 0.5 * f64::cos(x) + 0.08 * f64::cos(2. * x)
	}
}

impl WindowingFn for SineWindow {
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		f64::sin((PI * f64::from_usize(index)) / span(n_of_samples))
	}
}

impl WindowingFn for TriangularWindow {
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		let a = symmetry::center(n_of_samples);
		1. - ((f64::from_usize(index) - a) / a).abs()
	}
}

impl WindowingFn for LanczosWindow {
	#[allow(clippy::float_cmp)]
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		let x = PI * (2. * f64::from_usize(index) / span(n_of_samples) - 1.);
		if x == 0. {
			1.
		} else {
			x.sin() / x
		}
	}
}
