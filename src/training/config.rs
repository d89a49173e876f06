use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{MlErr, Result, loss::LossKind};

const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(31);

/// The hyperparameters of a linear trainer, immutable once the trainer is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// The gradient descent step size (alpha).
    pub learning_rate: f64,
    /// The L2 penalty coefficient.
    pub l2: f64,
    /// The amount of samples per gradient update.
    pub batch_size: NonZeroUsize,
    /// The amount of passes over the training set per `fit` call.
    pub epochs: usize,
    pub loss: LossKind,
    /// Whether to log every batch at info level.
    pub verbose: bool,
}

impl TrainerConfig {
    /// Creates a new `TrainerConfig`.
    ///
    /// # Arguments
    /// * `learning_rate` - The gradient descent step size, must be positive.
    /// * `l2` - The L2 penalty coefficient, must be non negative.
    /// * `batch_size` - The amount of samples per gradient update.
    /// * `epochs` - The amount of passes over the training set per `fit` call.
    /// * `loss` - The loss to minimize.
    /// * `verbose` - Whether to log every batch.
    pub fn new(
        learning_rate: f64,
        l2: f64,
        batch_size: NonZeroUsize,
        epochs: usize,
        loss: LossKind,
        verbose: bool,
    ) -> Self {
        Self {
            learning_rate,
            l2,
            batch_size,
            epochs,
            loss,
            verbose,
        }
    }

    /// Checks that every hyperparameter is within its domain.
    ///
    /// # Returns
    /// An `InvalidConfig` error describing the first offending value.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MlErr::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }

        if !(self.l2.is_finite() && self.l2 >= 0.0) {
            return Err(MlErr::InvalidConfig(format!(
                "l2 must be non negative and finite, got {}",
                self.l2
            )));
        }

        Ok(())
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            l2: 0.0,
            batch_size: DEFAULT_BATCH_SIZE,
            epochs: 100,
            loss: LossKind::Mse,
            verbose: false,
        }
    }
}
