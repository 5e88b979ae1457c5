//! Library of one dimensional piecewise linear interpolation over sampled data.
//! It does not extrapolate beyond the sampled range.
//!
//! # Example
//! ```
//! use piecewise_linear::{LinearInterpolator, SampleSet};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![0.0, 10.0, 20.0, 5.0];
//!
//! let samples = SampleSet::from_slices(&x, &y).unwrap();
//! let interpolator = LinearInterpolator::new(samples);
//!
//! assert_approx_eq!(15.0, interpolator.evaluate(1.5), 1e-6);
//! assert_approx_eq!(0.0, interpolator.evaluate(5.0), 1e-6);
//! ```

mod interpolator;
mod samples;
mod search;

pub use interpolator::LinearInterpolator;
pub use samples::SampleSet;
