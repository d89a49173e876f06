use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::{Rng, seq::SliceRandom};

use super::{DataErr, Result};

/// The share of rows used for training when none is configured.
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.8;

/// Randomly splits `rows` into a train and a test set.
///
/// The first `floor(len * train_fraction)` shuffled rows are used for training, the rest for
/// testing.
///
/// # Returns
/// The `(train, test)` pair or an error if `train_fraction` is not in `[0, 1]`.
pub fn train_test_split<R: Rng + ?Sized>(
    rows: ArrayView2<f64>,
    train_fraction: f64,
    rng: &mut R,
) -> Result<(Array2<f64>, Array2<f64>)> {
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(DataErr::InvalidFraction(train_fraction));
    }

    let mut order: Vec<usize> = (0..rows.nrows()).collect();
    order.shuffle(rng);

    let train_len = (rows.nrows() as f64 * train_fraction) as usize;
    let (train, test) = order.split_at(train_len);

    Ok((rows.select(Axis(0), train), rows.select(Axis(0), test)))
}

/// Separates the `target` column from the rest.
///
/// # Returns
/// The features, every other column in its original order, and the target vector, or an
/// error if `target` is not a column of `rows`.
pub fn separate_column(rows: ArrayView2<f64>, target: usize) -> Result<(Array2<f64>, Array1<f64>)> {
    let width = rows.ncols();
    if target >= width {
        return Err(DataErr::ColumnOutOfRange {
            column: target,
            width,
        });
    }

    let features: Vec<usize> = (0..width).filter(|&column| column != target).collect();
    Ok((
        rows.select(Axis(1), &features),
        rows.column(target).to_owned(),
    ))
}
