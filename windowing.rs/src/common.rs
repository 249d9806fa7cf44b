#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
	#[error("window length mismatch: {weights} weights, {samples} samples")]
	LengthMismatch { weights: usize, samples: usize },
}
