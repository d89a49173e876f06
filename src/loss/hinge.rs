use ndarray::{Array1, ArrayView1, ArrayView2};

use super::{LossFn, LossKind};

/// Hinge loss function for labels in {-1, +1}.
///
/// A sample violates the margin when `y * (x·w) < 1`. Samples exactly on the margin get no
/// gradient. Labels outside {-1, +1} are not rejected, they just yield meaningless gradients.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hinge;

impl Hinge {
    /// Returns a new `Hinge`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Hinge {
    const KIND: LossKind = LossKind::Hinge;
    const MODEL: &'static str = "linear classifier";

    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        let n = y.len();
        if n == 0 {
            return 0.0;
        }

        let total: f64 = y_pred
            .iter()
            .zip(y)
            .map(|(p, t)| (1.0 - p * t).max(0.0))
            .sum();

        total / n as f64
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
        let mut grad = w.mapv(|w| 2.0 * l2 * w);

        for (row, (p, t)) in x.outer_iter().zip(y_pred.iter().zip(y)) {
            if p * t < 1.0 {
                // subgradient of max(0, 1 - t * x·w) is -t * x
                grad.scaled_add(-t, &row);
            }
        }

        grad.mapv_inplace(|g| g / n);
        grad
    }

    fn score(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        let n = y.len();
        if n == 0 {
            return 0.0;
        }

        let correct = y_pred
            .iter()
            .zip(y)
            .filter(|&(p, t)| p * t >= 0.0)
            .count();

        correct as f64 / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn margin_boundary_contributes_nothing() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1.0, 1.0];
        let w = array![0.0, 0.0];
        let y_pred = array![1.0, 1.0];

        let grad = Hinge.gradient(x.view(), y.view(), y_pred.view(), w.view(), 0.0);
        assert_eq!(grad, array![0.0, 0.0]);
    }

    #[test]
    fn violating_row_contributes_its_features() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1.0, 1.0];
        let w = array![0.0, 0.0];
        let y_pred = array![1.0, 0.999];

        let grad = Hinge.gradient(x.view(), y.view(), y_pred.view(), w.view(), 0.0);
        assert_eq!(grad, array![-1.5, -2.0]);
    }

    #[test]
    fn negative_labels_flip_the_contribution() {
        let x = array![[1.0, 2.0]];
        let y = array![-1.0];
        let w = array![0.0, 0.0];
        let y_pred = array![0.5];

        let grad = Hinge.gradient(x.view(), y.view(), y_pred.view(), w.view(), 0.0);
        assert_eq!(grad, array![1.0, 2.0]);
    }

    #[test]
    fn weight_decay_is_twice_l2() {
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let y = array![1.0, -1.0];
        let w = array![2.0, -2.0];
        let y_pred = array![2.0, -2.0]; // both margins are 2

        let grad = Hinge.gradient(x.view(), y.view(), y_pred.view(), w.view(), 0.5);
        assert_eq!(grad, array![1.0, -1.0]);
    }

    #[test]
    fn zero_margin_counts_as_correct() {
        let y_pred = array![0.0, 2.0, -1.0, 3.0];
        let y = array![1.0, 1.0, 1.0, -1.0];

        assert_eq!(Hinge.score(y_pred.view(), y.view()), 0.5);
    }

    #[test]
    fn loss_ignores_satisfied_margins() {
        let y_pred = array![2.0, 0.5];
        let y = array![1.0, 1.0];

        assert_eq!(Hinge.loss(y_pred.view(), y.view()), 0.25);
    }
}
