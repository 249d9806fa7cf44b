pub trait TruncToUsize {
	/// Truncate towards zero. Negative values and NaN saturate to 0.
	#[must_use]
	fn trunc_usize(self) -> usize;
}

macro_rules! impl_trunc_for_float {
	($t:ty) => {
		#[allow(clippy::cast_sign_loss)]
		#[allow(clippy::cast_possible_truncation)]
		impl TruncToUsize for $t {
			fn trunc_usize(self) -> usize {
				self as usize
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_trunc_for_float!($t);
		impl_trunc_for_float!($($others),+);
	};
}

impl_trunc_for_float!(f32, f64);

pub trait FromUsize {
	#[must_use]
	fn from_usize(value: usize) -> Self;
}

macro_rules! impl_from_usize_for_float {
	($t:ty) => {
		#[allow(clippy::cast_precision_loss)]
		impl FromUsize for $t {
			fn from_usize(value: usize) -> Self {
				value as Self
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_from_usize_for_float!($t);
		impl_from_usize_for_float!($($others),+);
	};
}

impl_from_usize_for_float!(f32, f64);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_trunc_usize() {
		assert_eq!(0.99_f64.trunc_usize(), 0);
		assert_eq!(1.0_f64.trunc_usize(), 1);
		assert_eq!(2.5_f32.trunc_usize(), 2);
		assert_eq!((-0.5_f64).trunc_usize(), 0);
		assert_eq!(f64::NAN.trunc_usize(), 0);
	}

	#[test]
	fn test_from_usize() {
		assert!((f64::from_usize(7) - 7.).abs() < f64::EPSILON);
		assert!((f32::from_usize(0)).abs() < f32::EPSILON);
	}
}
