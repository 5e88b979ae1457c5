use std::{error::Error, fmt::Display};

use crate::samples::SampleSet;
use crate::search::{interval_contains, lower_bound};

pub struct LinearInterpolator<'a> {
    samples: SampleSet<'a>,
}

impl<'a> LinearInterpolator<'a> {
    pub fn new(samples: SampleSet<'a>) -> Self {
        LinearInterpolator { samples }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        // no extrapolation on either side; both boundary samples count as
        // outside, the first one by the bracket rule
        if x <= self.samples.min_x() || x >= self.samples.max_x() {
            return 0.0;
        }

        let xs = self.samples.get_x();
        // search skips the first sample; the found index is offset back to the
        // last sample lying strictly left of x
        let interval_index = lower_bound(&xs, x, 1) - 1;
        return self.blend(interval_index, x);
    }

    pub fn checked_evaluate(&self, x: f64) -> Result<f64, Box<dyn Error>> {
        if self.is_inside(x) {
            let xs = self.samples.get_x();
            let interval_index = lower_bound(&xs, x, 1) - 1;
            Ok(self.blend(interval_index, x))
        } else {
            return Err(Box::new(InterpolatorError("x is out of range".to_string())));
        }
    }

    pub fn batch_evaluate(&self, x_vector: &Vec<f64>) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut interval_index = 0;

        for &x in x_vector {
            if x <= self.samples.min_x() || x >= self.samples.max_x() {
                results.push(0.0);
            } else {
                interval_index = self.find_interval_with_hint(interval_index, x);
                results.push(self.blend(interval_index, x));
            }
        }
        return results;
    }

    pub fn get_samples(&self) -> &SampleSet<'a> {
        &self.samples
    }

    fn is_inside(&self, x: f64) -> bool {
        self.samples.min_x() < x && x < self.samples.max_x()
    }

    fn find_interval_with_hint(&self, index_hint: usize, x: f64) -> usize {
        let xs = self.samples.get_x();

        if interval_contains(&xs, index_hint, x) {
            return index_hint;
        }
        if index_hint < xs.len() - 2 && interval_contains(&xs, index_hint + 1, x) {
            return index_hint + 1;
        }
        return lower_bound(&xs, x, 1) - 1;
    }

    fn blend(&self, interval_index: usize, x: f64) -> f64 {
        let xs = self.samples.get_x();
        let ys = self.samples.get_y();

        let slope = (ys[interval_index + 1] - ys[interval_index])
            / (xs[interval_index + 1] - xs[interval_index]);
        slope * (x - xs[interval_index]) + ys[interval_index]
    }
}

#[derive(Debug)]
struct InterpolatorError(String);

impl Display for InterpolatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in LinearInterpolator: {}", self.0)
    }
}

impl Error for InterpolatorError {}
