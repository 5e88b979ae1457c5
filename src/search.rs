use nalgebra::DVectorView;

/// First index at or after `from` whose sample is not less than `x`.
/// Returns the number of samples when every candidate lies below `x`.
pub(crate) fn lower_bound(xs: &DVectorView<'_, f64>, x: f64, from: usize) -> usize {
    let mut low = from;
    let mut high = xs.len();

    while low < high {
        let mid = (low + high) / 2;
        if xs[mid] < x {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Checks whether `x` lies within the interval starting at `interval_index`.
pub(crate) fn interval_contains(
    xs: &DVectorView<'_, f64>,
    interval_index: usize,
    x: f64,
) -> bool {
    xs[interval_index] <= x && x <= xs[interval_index + 1]
}
