use ndarray::{Array1, ArrayView1, ArrayView2};

use super::FitStats;
use crate::{Result, loss::LossKind};

/// A trainable linear estimator, regardless of the loss it minimizes.
pub trait Trainer {
    /// Trains the weights on `(x, y)`, initializing them first if this is the first call.
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<FitStats>;

    /// Returns `x · w` for the current weights.
    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>>;

    /// Evaluates the current weights on held-out data.
    fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64>;

    /// The current weights, `None` until the first successful `fit`.
    fn weights(&self) -> Option<ArrayView1<'_, f64>>;

    /// The loss this trainer minimizes.
    fn loss_kind(&self) -> LossKind;
}
