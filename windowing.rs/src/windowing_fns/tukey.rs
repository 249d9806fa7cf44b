use std::f64::consts::TAU;

use math_utils::{
	ext::{FromUsize, TruncToUsize},
	symmetry,
};

use crate::{num_complex::Complex64, WindowingFn};

use super::{HannWindow, RectangularWindow};

/// Tukey (tapered cosine) window: a flat center with raised-cosine edges.
///
/// α is the fraction of the window covered by the taper. α = 0.5 leaves the
/// central half flat, α ≤ 0 degenerates to a [`RectangularWindow`] and α ≥ 1
/// to a [`HannWindow`]. No other validation takes place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TukeyWindow {
	alpha: f64,
}

enum TukeyShape {
	Rectangular,
	Hann,
	Tapered,
}

/// Left taper of a window spanning a given number of samples.
struct Taper {
	alpha_l: f64,
	width: usize,
}

impl Taper {
	fn new(alpha: f64, n_of_samples: usize) -> Self {
		let alpha_l = alpha * (f64::from_usize(n_of_samples) - 1.);
		Self {
			alpha_l,
			width: ((0.5 * alpha_l).trunc_usize() + 1).min(n_of_samples),
		}
	}

	fn ratio_at(&self, index: usize) -> f64 {
		0.5 * (1. - f64::cos(TAU * f64::from_usize(index) / self.alpha_l))
	}
}

impl TukeyWindow {
	#[must_use]
	pub fn new(alpha: f64) -> Self {
		Self { alpha }
	}

	#[must_use]
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	fn shape(&self) -> TukeyShape {
		if self.alpha <= 0. {
			TukeyShape::Rectangular
		} else if self.alpha >= 1. {
			TukeyShape::Hann
		} else {
			TukeyShape::Tapered
		}
	}

	/// Same as `shape`, reporting the degenerate cases. Called once per sequence.
	fn traced_shape(&self) -> TukeyShape {
		let shape = self.shape();
		match shape {
			TukeyShape::Rectangular => {
				tracing::trace!(alpha = self.alpha, "tukey window degenerates to rectangular");
			}
			TukeyShape::Hann => {
				tracing::trace!(alpha = self.alpha, "tukey window degenerates to hann");
			}
			TukeyShape::Tapered => {}
		}
		shape
	}
}

impl WindowingFn for TukeyWindow {
	fn ratio_at(&self, index: usize, n_of_samples: usize) -> f64 {
		match self.shape() {
			TukeyShape::Rectangular => RectangularWindow.ratio_at(index, n_of_samples),
			TukeyShape::Hann => HannWindow.ratio_at(index, n_of_samples),
			TukeyShape::Tapered => {
				let taper = Taper::new(self.alpha, n_of_samples);
				let index = symmetry::fold_left(index, n_of_samples);
				if index < taper.width {
					taper.ratio_at(index)
				} else {
					1.
				}
			}
		}
	}

	/// Only the two tapers are visited, each weight is computed once and
	/// applied to both mirrored samples, left one first.
	fn apply<'a>(&self, seq: &'a mut [f64]) -> &'a mut [f64] {
		match self.traced_shape() {
			TukeyShape::Rectangular => RectangularWindow.apply(seq),
			TukeyShape::Hann => HannWindow.apply(seq),
			TukeyShape::Tapered if seq.is_empty() => seq,
			TukeyShape::Tapered => {
				let n_of_samples = seq.len();
				let taper = Taper::new(self.alpha, n_of_samples);
				for i in 0..taper.width {
					let w = taper.ratio_at(i);
					seq[i] *= w;
					seq[symmetry::mirrored(i, n_of_samples)] *= w;
				}
				seq
			}
		}
	}

	fn apply_complex<'a>(&self, seq: &'a mut [Complex64]) -> &'a mut [Complex64] {
		match self.traced_shape() {
			TukeyShape::Rectangular => RectangularWindow.apply_complex(seq),
			TukeyShape::Hann => HannWindow.apply_complex(seq),
			TukeyShape::Tapered if seq.is_empty() => seq,
			TukeyShape::Tapered => {
				let n_of_samples = seq.len();
				let taper = Taper::new(self.alpha, n_of_samples);
				for i in 0..taper.width {
					let w = taper.ratio_at(i);
					seq[i] = seq[i].scale(w);
					let j = symmetry::mirrored(i, n_of_samples);
					seq[j] = seq[j].scale(w);
				}
				seq
			}
		}
	}
}
