//! Index arithmetic for windows that are symmetric around their center.

use crate::ext::FromUsize;

/// Position of the axis of symmetry of a window spanning `n_of_samples` samples,
/// i.e. `(N - 1) / 2`.
///
/// The subtraction happens in floating point, so an empty window yields `-0.5`
/// instead of underflowing.
#[must_use]
pub fn center(n_of_samples: usize) -> f64 {
	(f64::from_usize(n_of_samples) - 1.) / 2.
}

/// Index on the opposite side of the axis of symmetry.
///
/// # Panics
/// - if `index >= n_of_samples` (debug builds only, via the subtraction overflow check).
#[must_use]
pub const fn mirrored(index: usize, n_of_samples: usize) -> usize {
	n_of_samples - 1 - index
}

/// Fold an index onto the left half of the window, so that
/// `fold_left(i, n) == fold_left(mirrored(i, n), n)`.
#[must_use]
pub const fn fold_left(index: usize, n_of_samples: usize) -> usize {
	let other = mirrored(index, n_of_samples);
	if index < other {
		index
	} else {
		other
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_center() {
		assert!((center(5) - 2.).abs() < f64::EPSILON);
		assert!((center(4) - 1.5).abs() < f64::EPSILON);
		assert!(center(1).abs() < f64::EPSILON);
		assert!((center(0) + 0.5).abs() < f64::EPSILON);
	}

	#[test]
	fn test_mirrored() {
		assert_eq!(mirrored(0, 5), 4);
		assert_eq!(mirrored(2, 5), 2);
		assert_eq!(mirrored(1, 4), 2);
		assert_eq!(mirrored(0, 1), 0);
	}

	#[test]
	fn test_fold_left() {
		for n in 1..20 {
			for i in 0..n {
				let folded = fold_left(i, n);
				assert!(folded <= i);
				assert!(folded * 2 < n);
				assert_eq!(folded, fold_left(mirrored(i, n), n));
			}
		}
	}
}
