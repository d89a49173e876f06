use std::num::NonZeroUsize;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::{Rng, seq::SliceRandom};

use crate::{MlErr, Result};

/// A borrowed view over a training set `(x, y)` with its own sample order.
///
/// Shuffling only permutes the internal order, the caller's data is never modified. Batches
/// are gathered through that order.
#[derive(Debug, Clone)]
pub struct Dataset<'a> {
    x: ArrayView2<'a, f64>,
    y: ArrayView1<'a, f64>,
    order: Vec<usize>,
}

impl<'a> Dataset<'a> {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The features, one sample per row.
    /// * `y` - The targets, one per row of `x`.
    ///
    /// # Returns
    /// A new `Dataset` or an error if the sizes of `x` and `y` differ or there are no samples.
    pub fn new(x: ArrayView2<'a, f64>, y: ArrayView1<'a, f64>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(MlErr::ShapeMismatch {
                what: "targets",
                got: y.len(),
                expected: x.nrows(),
            });
        }

        if x.nrows() == 0 {
            return Err(MlErr::EmptyDataset);
        }

        Ok(Self {
            x,
            y,
            order: (0..x.nrows()).collect(),
        })
    }

    /// Returns the amount of samples.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns the amount of features of every sample.
    pub fn num_features(&self) -> usize {
        self.x.ncols()
    }

    /// Randomly permutes the order in which samples are batched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
    }

    /// The amount of full batches of `batch_size` samples, the trailing remainder is dropped.
    pub fn num_batches(&self, batch_size: NonZeroUsize) -> usize {
        self.len() / batch_size.get()
    }

    /// Iterates over consecutive batches of exactly `batch_size` samples in the current order.
    ///
    /// A trailing remainder shorter than `batch_size` is skipped, so no batch is yielded at all
    /// when `batch_size` exceeds the amount of samples.
    pub fn batches(
        &self,
        batch_size: NonZeroUsize,
    ) -> impl Iterator<Item = (Array2<f64>, Array1<f64>)> + '_ {
        self.order
            .chunks_exact(batch_size.get())
            .map(move |idx| (self.x.select(Axis(0), idx), self.y.select(Axis(0), idx)))
    }
}
