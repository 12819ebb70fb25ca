//! Compensated summation of sequences with progress logging.

use crate::{capability::Kahanizable, Compensated};
use dsi_progress_logger::ProgressLog;

/// Sums `values` left to right into a new [`Compensated`], logging progress.
///
/// If the iterator reports an exact length, it is used as the number of
/// expected updates. Pass `&mut Option::<ProgressLogger>::None` as `pl` to
/// disable logging.
///
/// No reordering takes place: the result depends on the order of the values
/// exactly as with [`Compensated::accumulate`].
///
/// # Examples
/// ```
/// # use compensated::sum::compensated_sum;
/// # use dsi_progress_logger::ProgressLogger;
/// let mut pl = Option::<ProgressLogger>::None;
/// let acc = compensated_sum([1E100, 1.0, -1E100], &mut pl);
/// assert_eq!(acc.value(), 1.0);
/// ```
pub fn compensated_sum<V: Kahanizable>(
    values: impl IntoIterator<Item = V>,
    pl: &mut impl ProgressLog,
) -> Compensated<V> {
    let values = values.into_iter();
    let expected = match values.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(upper),
        _ => None,
    };

    pl.item_name("value");
    pl.expected_updates(expected);
    pl.start(format!(
        "Summing values with the {} algorithm...",
        Compensated::<V>::algorithm()
    ));

    let mut acc = Compensated::new();
    for value in values {
        acc.add_value(value);
        pl.light_update();
    }

    pl.done();
    acc
}
