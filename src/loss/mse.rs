use ndarray::{Array1, ArrayView1, ArrayView2, linalg};

use super::{LossFn, LossKind};

/// Mean squared error loss function.
///
/// Its gradient is the exact gradient of the batch mean squared error plus the L2 weight decay,
/// `2/n * (xᵀ(x·w - y) + l2 * w)`. Scores are reported as the mean absolute residual.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    const KIND: LossKind = LossKind::Mse;
    const MODEL: &'static str = "linear regressor";

    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        mean_abs_residual(y_pred, y)
    }

    fn gradient(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        y_pred: ArrayView1<f64>,
        w: ArrayView1<f64>,
        l2: f64,
    ) -> Array1<f64> {
        let n = x.nrows() as f64;
        let e = &y_pred - &y;

        let mut grad = w.mapv(|w| l2 * w);
        linalg::general_mat_vec_mul(1.0, &x.t(), &e, 1.0, &mut grad);
        grad.mapv_inplace(|g| 2.0 * g / n);
        grad
    }

    fn score(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        mean_abs_residual(y_pred, y)
    }
}

fn mean_abs_residual(y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    (&y_pred - &y)
        .mapv(f64::abs)
        .mean()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn gradient_matches_closed_form() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1.0, 2.0];
        let w = array![0.5, -0.5];
        let y_pred = array![-0.5, -0.5];

        // e = [-1.5, -2.5], xᵀe = [-9, -13], l2 * w = [0.05, -0.05], 2/n = 1
        let grad = Mse.gradient(x.view(), y.view(), y_pred.view(), w.view(), 0.1);

        assert!((grad[0] - -8.95).abs() < 1e-12);
        assert!((grad[1] - -13.05).abs() < 1e-12);
    }

    #[test]
    fn zero_residual_leaves_only_weight_decay() {
        let x = array![[1.0], [2.0], [3.0]];
        let w = array![2.0];
        let y = array![2.0, 4.0, 6.0];

        let grad = Mse.gradient(x.view(), y.view(), y.view(), w.view(), 3.0);

        // 2/3 * 3 * 2
        assert!((grad[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn score_is_mean_absolute_residual() {
        let y_pred = array![1.0, 2.0, 3.0, 4.0];
        let y = array![2.0, 2.0, 1.0, 4.0];

        assert_eq!(Mse.score(y_pred.view(), y.view()), 0.75);
        assert_eq!(Mse.loss(y_pred.view(), y.view()), 0.75);
    }
}
