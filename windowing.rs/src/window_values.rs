use crate::{num_complex::Complex64, WindowError, WindowingFn};

/// Precomputed window weights, reusable across any number of sequences of the
/// same length.
///
/// The default value is the identity: it holds no weights and applying it
/// leaves every sequence untouched, whatever its length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowValues {
	weights: Option<Box<[f64]>>,
}

impl WindowValues {
	#[must_use]
	pub const fn identity() -> Self {
		Self { weights: None }
	}

	/// Materialize the weights of `window` for sequences of `n_of_samples` samples,
	/// by applying it to a sequence of ones.
	#[must_use]
	pub fn new(window: &(impl WindowingFn + ?Sized), n_of_samples: usize) -> Self {
		Self::from_transform(
			|ones| {
				window.apply(ones);
			},
			n_of_samples,
		)
	}

	/// Same as [`WindowValues::new`], for window functions that only exist as
	/// an in-place transform.
	#[must_use]
	pub fn from_transform(transform: impl FnOnce(&mut [f64]), n_of_samples: usize) -> Self {
		let mut weights = vec![1.; n_of_samples].into_boxed_slice();
		transform(&mut weights);
		tracing::trace!(n_of_samples, "materialized window values");
		Self {
			weights: Some(weights),
		}
	}

	#[must_use]
	pub fn from_weights(weights: impl Into<Box<[f64]>>) -> Self {
		Self {
			weights: Some(weights.into()),
		}
	}

	/// `None` for the identity.
	#[must_use]
	pub fn weights(&self) -> Option<&[f64]> {
		self.weights.as_deref()
	}

	#[must_use]
	pub fn is_identity(&self) -> bool {
		self.weights.is_none()
	}

	pub(crate) fn weights_for(&self, n_of_samples: usize) -> Result<Option<&[f64]>, WindowError> {
		match self.weights() {
			Some(weights) if weights.len() != n_of_samples => {
				tracing::debug!(
					weights = weights.len(),
					samples = n_of_samples,
					"rejected sequence with incompatible length"
				);
				Err(WindowError::LengthMismatch {
					weights: weights.len(),
					samples: n_of_samples,
				})
			}
			weights => Ok(weights),
		}
	}

	/// Multiply every sample by the corresponding weight, in place, returning the same slice.
	///
	/// # Errors
	/// - [`WindowError::LengthMismatch`] if the sequence and the weights differ in length,
	///   in which case the sequence is left untouched.
	pub fn apply<'a>(&self, seq: &'a mut [f64]) -> Result<&'a mut [f64], WindowError> {
		let Some(weights) = self.weights_for(seq.len())? else {
			return Ok(seq);
		};
		for (sample, w) in seq.iter_mut().zip(weights) {
			*sample *= w;
		}
		Ok(seq)
	}

	/// Scale both parts of every sample by the corresponding weight, in place,
	/// returning the same slice.
	///
	/// # Errors
	/// - [`WindowError::LengthMismatch`] if the sequence and the weights differ in length,
	///   in which case the sequence is left untouched.
	pub fn apply_complex<'a>(
		&self,
		seq: &'a mut [Complex64],
	) -> Result<&'a mut [Complex64], WindowError> {
		let Some(weights) = self.weights_for(seq.len())? else {
			return Ok(seq);
		};
		for (sample, w) in seq.iter_mut().zip(weights) {
			*sample = sample.scale(*w);
		}
		Ok(seq)
	}
}

impl From<Vec<f64>> for WindowValues {
	fn from(weights: Vec<f64>) -> Self {
		Self::from_weights(weights)
	}
}
