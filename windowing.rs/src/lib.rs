pub use rustfft::num_complex;

mod common;
pub use common::*;

mod windowing_fn;
pub use windowing_fn::*;

pub mod windowing_fns;

mod window_values;
pub use window_values::*;

mod window;
pub use window::*;

#[cfg(test)]
mod test_utils;
