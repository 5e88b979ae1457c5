use std::{error::Error, fmt::Display};

use nalgebra::DVectorView;

/// Minimum allowed spacing between adjacent sample abscissas.
const MIN_X_SPACING: f64 = 1e-16;

/// SampleSet is a non owning view of a sampled function: paired sequences of
/// sample abscissas and ordinates defining a piecewise linear curve.
/// - `x` - sample abscissas, strictly increasing,
/// - `y` - sample ordinates, one per abscissa.
///
/// The underlying data is owned elsewhere and must stay alive and unmodified
/// for the lifetime of the view. Structural validation happens once at
/// construction, so evaluation code never re-checks the data.
#[derive(Debug, Clone, Copy)]
pub struct SampleSet<'a> {
    x: DVectorView<'a, f64>,
    y: DVectorView<'a, f64>,
    min_x: f64,
    max_x: f64,
}

impl<'a> SampleSet<'a> {
    /// Creates [SampleSet] from two vector views.
    /// # Example
    /// ```
    /// use nalgebra::DVector;
    /// use piecewise_linear::SampleSet;
    ///
    /// let x = DVector::from_vec(vec![0.0, 1.0, 2.0]);
    /// let y = DVector::from_vec(vec![1.0, 3.0, 2.0]);
    ///
    /// let samples = SampleSet::new((&x).into(), (&y).into());
    /// assert!(samples.is_ok());
    /// ```
    /// # Errors
    /// Error is returned when the sequences differ in length, hold fewer than
    /// 2 samples or when `x` is not strictly increasing.
    /// ```
    /// use nalgebra::DVector;
    /// use piecewise_linear::SampleSet;
    ///
    /// let x = DVector::from_vec(vec![0.0, 2.0, 1.0]);
    /// let y = DVector::from_vec(vec![1.0, 3.0, 2.0]);
    ///
    /// // x is not strictly increasing
    /// let samples = SampleSet::new((&x).into(), (&y).into());
    /// assert!(samples.is_err());
    /// ```
    pub fn new(x: DVectorView<'a, f64>, y: DVectorView<'a, f64>) -> Result<Self, Box<dyn Error>> {
        if x.len() != y.len() {
            return Err(Box::new(SampleSetError(format!(
                "x has {} samples while y has {}",
                x.len(),
                y.len()
            ))));
        }
        if x.len() < 2 {
            return Err(Box::new(SampleSetError(
                "SampleSet must have at least 2 samples".to_string(),
            )));
        }
        for i in 1..x.len() {
            if x[i] - x[i - 1] < MIN_X_SPACING {
                return Err(Box::new(SampleSetError(
                    "x values must be strictly increasing".to_string(),
                )));
            }
        }

        let min_x = x[0];
        let max_x = x[x.len() - 1];
        Ok(SampleSet { x, y, min_x, max_x })
    }

    /// Creates [SampleSet] borrowing two plain slices.
    /// # Example
    /// ```
    /// use piecewise_linear::SampleSet;
    ///
    /// let x = vec![0.0, 1.0, 2.0];
    /// let y = vec![1.0, 3.0, 2.0];
    ///
    /// let samples = SampleSet::from_slices(&x, &y).unwrap();
    /// assert_eq!(3, samples.len());
    /// ```
    /// # Errors
    /// Same conditions as [SampleSet::new].
    pub fn from_slices(x: &'a [f64], y: &'a [f64]) -> Result<Self, Box<dyn Error>> {
        let x_view = DVectorView::from_slice(x, x.len());
        let y_view = DVectorView::from_slice(y, y.len());
        SampleSet::new(x_view, y_view)
    }

    pub fn get_x(&self) -> DVectorView<'a, f64> {
        self.x
    }

    pub fn get_y(&self) -> DVectorView<'a, f64> {
        self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }
}

#[derive(Debug)]
struct SampleSetError(String);

impl Display for SampleSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in SampleSet: {}", self.0)
    }
}

impl Error for SampleSetError {}
