use std::{cell::RefCell, rc::Rc};

use log::{debug, info};
use ndarray::{Array1, ArrayView1, ArrayView2, linalg};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{FitStats, Trainer, TrainerConfig};
use crate::{
    MlErr, Result,
    dataset::Dataset,
    initialization::{RandWeightGen, WeightGen},
    loss::{Hinge, LossFn, LossKind, Mse},
    optimization::{GradientDescent, Optimizer},
};

/// A linear model `f(x) = x · w` trained with mini-batch gradient descent.
///
/// The loss strategy `L` decides both the update rule and the held-out metric, the rest of the
/// training protocol is shared: every epoch shuffles the sample order, splits it into full
/// batches of `batch_size` samples and takes one gradient step per batch.
///
/// The random source is shared through `Rc<RefCell<_>>`, so a trainer is not `Sync`.
pub struct LinearTrainer<L, R = StdRng>
where
    L: LossFn,
    R: Rng,
{
    config: TrainerConfig,
    loss_fn: L,
    optimizer: GradientDescent,
    rng: Rc<RefCell<R>>,
    weight_gen: Box<dyn WeightGen>,
    weights: Option<Array1<f64>>,
}

/// A least squares linear regressor.
pub type LinearRegressor<R = StdRng> = LinearTrainer<Mse, R>;

/// A linear classifier for labels in {-1, +1}.
pub type LinearClassifier<R = StdRng> = LinearTrainer<Hinge, R>;

impl<L> LinearTrainer<L, StdRng>
where
    L: LossFn + Default,
{
    /// Creates a new `LinearTrainer` seeded from the operating system.
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    ///
    /// # Returns
    /// The trainer or an error if the config is invalid or selects another loss.
    pub fn new(config: TrainerConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a new `LinearTrainer` whose weight initialization and shuffling are
    /// reproducible.
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    /// * `seed` - The seed of the random number generator.
    ///
    /// # Returns
    /// The trainer or an error if the config is invalid or selects another loss.
    pub fn with_seed(config: TrainerConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<L, R> LinearTrainer<L, R>
where
    L: LossFn + Default,
    R: Rng + 'static,
{
    /// Creates a new `LinearTrainer` that initializes its weights from N(0, 1).
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    /// * `rng` - The random number generator used for initialization and shuffling.
    ///
    /// # Returns
    /// The trainer or an error if the config is invalid or selects another loss.
    pub fn with_rng(config: TrainerConfig, rng: R) -> Result<Self> {
        let rng = Rc::new(RefCell::new(rng));
        let weight_gen = Box::new(RandWeightGen::standard_normal(Rc::clone(&rng)));
        Self::with_shared_rng(config, rng, weight_gen)
    }

    /// Creates a new `LinearTrainer` from its parts.
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    /// * `rng` - The random number generator used for shuffling, possibly shared with
    ///   `weight_gen`.
    /// * `weight_gen` - The source of the initial weights.
    ///
    /// # Returns
    /// The trainer or an error if the config is invalid or selects another loss.
    pub fn with_shared_rng(
        config: TrainerConfig,
        rng: Rc<RefCell<R>>,
        weight_gen: Box<dyn WeightGen>,
    ) -> Result<Self> {
        config.validate()?;

        if config.loss != L::KIND {
            return Err(MlErr::UnsupportedLoss {
                model: L::MODEL,
                loss: config.loss,
            });
        }

        Ok(Self {
            config,
            loss_fn: L::default(),
            optimizer: GradientDescent::new(config.learning_rate),
            rng,
            weight_gen,
            weights: None,
        })
    }
}

impl<L, R> LinearTrainer<L, R>
where
    L: LossFn,
    R: Rng,
{
    /// Replaces the weight generator used on the first `fit`.
    pub fn with_weight_gen(mut self, weight_gen: impl WeightGen + 'static) -> Self {
        self.weight_gen = Box::new(weight_gen);
        self
    }

    /// Starts training from the given weights instead of generated ones.
    pub fn with_weights(mut self, weights: Array1<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn loss_kind(&self) -> LossKind {
        L::KIND
    }

    /// The current weights, `None` until the first successful `fit`.
    pub fn weights(&self) -> Option<ArrayView1<'_, f64>> {
        self.weights.as_ref().map(|weights| weights.view())
    }

    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Trains the weights for `epochs` epochs over `(x, y)`.
    ///
    /// The weights are generated on the first call and trained further on every later one.
    /// Every check happens before any update, so a failing call leaves the weights untouched.
    ///
    /// # Arguments
    /// * `x` - The features, one sample per row.
    /// * `y` - The targets, one per row of `x`.
    ///
    /// # Returns
    /// The statistics of this call or an error if the data is empty or its shape does not
    /// match.
    pub fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<FitStats> {
        let mut dataset = Dataset::new(x, y)?;
        let num_features = dataset.num_features();

        if let Some(weights) = &self.weights {
            check_features(num_features, weights.len())?;
        }

        let mut weights = match self.weights.take() {
            Some(weights) => weights,
            None => self.init_weights(num_features),
        };

        let stats = self.run_epochs(&mut dataset, &mut weights);
        self.weights = Some(weights);

        debug!(
            "fit done after {} epochs, {} batches, {} samples",
            stats.epochs(),
            stats.batches(),
            stats.samples()
        );

        Ok(stats)
    }

    /// Computes `x · w` with the current weights.
    ///
    /// # Returns
    /// The predictions or an error if the model is not fitted or `x` has a different amount
    /// of features.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let weights = self.weights.as_ref().ok_or(MlErr::NotFitted)?;
        check_features(x.ncols(), weights.len())?;

        let mut y_pred = Array1::zeros(x.nrows());
        linalg::general_mat_vec_mul(1.0, &x, weights, 0.0, &mut y_pred);
        Ok(y_pred)
    }

    /// Evaluates the current weights on `(x, y)` with the metric of the loss.
    ///
    /// # Returns
    /// The score or an error if the shapes do not match, the model is not fitted or there
    /// are no samples.
    pub fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64> {
        if x.nrows() != y.len() {
            return Err(MlErr::ShapeMismatch {
                what: "targets",
                got: y.len(),
                expected: x.nrows(),
            });
        }

        let y_pred = self.predict(x)?;

        if y.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        Ok(self.loss_fn.score(y_pred.view(), y))
    }

    fn init_weights(&mut self, num_features: usize) -> Array1<f64> {
        debug!("initializing {num_features} weights");
        Array1::from(self.weight_gen.sample(num_features))
    }

    fn run_epochs(&mut self, dataset: &mut Dataset<'_>, weights: &mut Array1<f64>) -> FitStats {
        let TrainerConfig {
            l2,
            batch_size,
            epochs,
            verbose,
            ..
        } = self.config;

        let num_batches = dataset.num_batches(batch_size);
        debug!("{num_batches} batches per epoch");

        let mut stats = FitStats::default();
        // no batch is ever yielded when batch_size exceeds the dataset
        let mut y_pred = Array1::zeros(if num_batches > 0 { batch_size.get() } else { 0 });

        for epoch in 0..epochs {
            dataset.shuffle(&mut *self.rng.borrow_mut());

            let mut batches = 0;
            let mut loss_sum = 0.0;

            for (batch, (x, y)) in dataset.batches(batch_size).enumerate() {
                linalg::general_mat_vec_mul(1.0, &x, &*weights, 0.0, &mut y_pred);

                let loss = self.loss_fn.loss(y_pred.view(), y.view());
                if verbose {
                    info!(epoch = epoch, batch = batch; "mean batch loss {loss}");
                }

                let grad = self
                    .loss_fn
                    .gradient(x.view(), y.view(), y_pred.view(), weights.view(), l2);
                self.optimizer.update_params(weights.view_mut(), grad.view());

                batches += 1;
                loss_sum += loss;
            }

            stats.record_epoch(batches, batches * batch_size.get(), loss_sum);

            if !verbose {
                debug!(epoch = epoch; "epoch done, mean loss {:?}", stats.last_epoch_loss());
            }
        }

        stats
    }
}

fn check_features(got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(MlErr::ShapeMismatch {
            what: "features",
            got,
            expected,
        });
    }

    Ok(())
}

impl<L, R> Trainer for LinearTrainer<L, R>
where
    L: LossFn,
    R: Rng,
{
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<FitStats> {
        self.fit(x, y)
    }

    fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        self.predict(x)
    }

    fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64> {
        self.score(x, y)
    }

    fn weights(&self) -> Option<ArrayView1<'_, f64>> {
        self.weights()
    }

    fn loss_kind(&self) -> LossKind {
        self.loss_kind()
    }
}
