use ndarray::{Array1, ArrayView1, ArrayView2};

use super::LossKind;

/// A loss strategy for a linear model `f(x) = x · w`.
///
/// Every method receives the predictions the trainer already computed for the batch, so that a
/// single forward pass is shared between logging, the gradient and the score.
pub trait LossFn {
    /// The configuration value that selects this loss.
    const KIND: LossKind;

    /// The name of the model this loss trains, used in error messages.
    const MODEL: &'static str;

    /// The mean loss over a batch, only used for diagnostics.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;

    /// Computes the gradient of the batch loss with respect to the weights, including the L2
    /// penalty and already normalized by the batch size.
    ///
    /// # Arguments
    /// * `x` - The batch features, one sample per row.
    /// * `y` - The batch targets.
    /// * `y_pred` - The model output for `x`.
    /// * `w` - The current weights.
    /// * `l2` - The L2 penalty coefficient.
    ///
    /// # Returns
    /// A vector with the same length as `w`.
    fn gradient(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        y_pred: ArrayView1<f64>,
        w: ArrayView1<f64>,
        l2: f64,
    ) -> Array1<f64>;

    /// The held-out evaluation metric for this loss.
    fn score(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}
