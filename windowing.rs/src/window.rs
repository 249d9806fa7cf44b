use crate::{
	num_complex::Complex64,
	windowing_fns::{GaussianWindow, TukeyWindow},
	WindowError, WindowValues, WindowingFn,
};

/// Any of the adjustable windows, or precomputed weights.
#[derive(Debug, Clone, PartialEq)]
pub enum Window {
	Gaussian(GaussianWindow),
	Tukey(TukeyWindow),
	Values(WindowValues),
}

impl Window {
	/// # Errors
	/// - [`WindowError::LengthMismatch`] from the [`Window::Values`] variant, see [`WindowValues::apply`].
	pub fn apply<'a>(&self, seq: &'a mut [f64]) -> Result<&'a mut [f64], WindowError> {
		match self {
			Self::Gaussian(window) => Ok(window.apply(seq)),
			Self::Tukey(window) => Ok(window.apply(seq)),
			Self::Values(values) => values.apply(seq),
		}
	}

	/// # Errors
	/// - [`WindowError::LengthMismatch`] from the [`Window::Values`] variant, see [`WindowValues::apply_complex`].
	pub fn apply_complex<'a>(
		&self,
		seq: &'a mut [Complex64],
	) -> Result<&'a mut [Complex64], WindowError> {
		match self {
			Self::Gaussian(window) => Ok(window.apply_complex(seq)),
			Self::Tukey(window) => Ok(window.apply_complex(seq)),
			Self::Values(values) => values.apply_complex(seq),
		}
	}

	/// Weights for sequences of `n_of_samples` samples.
	///
	/// The [`Window::Values`] variant is already materialized and is cloned,
	/// the identity is valid for any length.
	///
	/// # Errors
	/// - [`WindowError::LengthMismatch`] if the [`Window::Values`] variant holds weights
	///   for a different number of samples.
	pub fn to_values(&self, n_of_samples: usize) -> Result<WindowValues, WindowError> {
		match self {
			Self::Gaussian(window) => Ok(WindowValues::new(window, n_of_samples)),
			Self::Tukey(window) => Ok(WindowValues::new(window, n_of_samples)),
			Self::Values(values) => {
				values.weights_for(n_of_samples)?;
				Ok(values.clone())
			}
		}
	}
}

impl From<GaussianWindow> for Window {
	fn from(window: GaussianWindow) -> Self {
		Self::Gaussian(window)
	}
}

impl From<TukeyWindow> for Window {
	fn from(window: TukeyWindow) -> Self {
		Self::Tukey(window)
	}
}

impl From<WindowValues> for Window {
	fn from(values: WindowValues) -> Self {
		Self::Values(values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_dispatch_matches_direct_application() {
		let mut direct = [0.5, 1., -2., 4., 8., 1.5, -0.25];
		let mut dispatched = direct;
		GaussianWindow::new(0.6).apply(&mut direct);
		Window::from(GaussianWindow::new(0.6))
			.apply(&mut dispatched)
			.unwrap();
		assert_eq!(direct, dispatched);

		let mut direct = [Complex64::new(1., -1.); 7];
		let mut dispatched = direct;
		TukeyWindow::new(0.4).apply_complex(&mut direct);
		Window::from(TukeyWindow::new(0.4))
			.apply_complex(&mut dispatched)
			.unwrap();
		assert_eq!(direct, dispatched);
	}

	#[test]
	fn test_values_variant() {
		let window = Window::from(TukeyWindow::new(0.5));
		let values = Window::from(window.to_values(5).unwrap());

		let mut seq = [1.; 5];
		assert_eq!(values.apply(&mut seq), Ok(&mut [0., 1., 1., 1., 0.][..]));
		assert_eq!(values.to_values(5), window.to_values(5));

		assert_eq!(
			values.apply(&mut [1.; 4]),
			Err(WindowError::LengthMismatch {
				weights: 5,
				samples: 4
			})
		);
		assert!(Window::from(WindowValues::identity())
			.apply_complex(&mut [Complex64::new(3., 4.); 2])
			.is_ok());
	}

	#[test]
	fn test_to_values_honours_the_requested_length() {
		let window = Window::from(TukeyWindow::new(0.5));
		let materialized = window.to_values(12).unwrap();
		assert_eq!(materialized.weights().map(<[f64]>::len), Some(12));

		let values = Window::from(window.to_values(5).unwrap());
		assert_eq!(
			values.to_values(12),
			Err(WindowError::LengthMismatch {
				weights: 5,
				samples: 12
			})
		);

		assert_eq!(
			Window::from(WindowValues::identity()).to_values(12),
			Ok(WindowValues::identity())
		);
	}
}
