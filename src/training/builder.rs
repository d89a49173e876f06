use std::{cell::RefCell, rc::Rc};

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use super::{LinearClassifier, LinearRegressor, Trainer, TrainerConfig};
use crate::{
    Result,
    initialization::{WeightGen, WeightInit},
    loss::LossKind,
};

/// Builds a `Trainer` out of its configuration, picking the model variant from the loss.
#[derive(Debug, Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Trainer` following the given configuration.
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    /// * `init` - How the weights are initialized on the first `fit`.
    /// * `seed` - An optional seed for reproducible runs, the OS is used if absent.
    ///
    /// # Returns
    /// A new trainer or an error if the configuration is invalid.
    pub fn build(
        &self,
        config: TrainerConfig,
        init: WeightInit,
        seed: Option<u64>,
    ) -> Result<Box<dyn Trainer>> {
        let rng = Rc::new(RefCell::new(self.generate_rng(seed)));
        let weight_gen = init.weight_gen(Rc::clone(&rng))?;
        self.resolve_model(config, rng, weight_gen)
    }

    fn resolve_model(
        &self,
        config: TrainerConfig,
        rng: Rc<RefCell<StdRng>>,
        weight_gen: Box<dyn WeightGen>,
    ) -> Result<Box<dyn Trainer>> {
        debug!("building a trainer for the {} loss", config.loss);

        let trainer: Box<dyn Trainer> = match config.loss {
            LossKind::Mse => Box::new(LinearRegressor::with_shared_rng(config, rng, weight_gen)?),
            LossKind::Hinge => Box::new(LinearClassifier::with_shared_rng(
                config, rng, weight_gen,
            )?),
        };

        Ok(trainer)
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MlErr;
    use ndarray::array;

    #[test]
    fn picks_model_from_loss() {
        let builder = TrainerBuilder::new();

        for loss in [LossKind::Mse, LossKind::Hinge] {
            let config = TrainerConfig {
                loss,
                ..Default::default()
            };
            let trainer = builder.build(config, WeightInit::default(), Some(0)).unwrap();
            assert_eq!(trainer.loss_kind(), loss);
        }
    }

    #[test]
    fn uses_configured_initializer() {
        let config = TrainerConfig {
            epochs: 0,
            ..Default::default()
        };
        let mut trainer = TrainerBuilder::new()
            .build(config, WeightInit::Constant { value: 2.0 }, None)
            .unwrap();

        trainer.fit(array![[1.0, 1.0]].view(), array![0.0].view()).unwrap();

        assert_eq!(trainer.weights().unwrap(), array![2.0, 2.0]);
        assert_eq!(trainer.predict(array![[1.0, 0.5]].view()).unwrap(), array![3.0]);
    }

    #[test]
    fn same_seed_same_initial_weights() {
        let config = TrainerConfig {
            epochs: 0,
            ..Default::default()
        };
        let builder = TrainerBuilder::new();
        let x = array![[1.0, 2.0, 3.0]];
        let y = array![1.0];

        let mut a = builder.build(config, WeightInit::default(), Some(5)).unwrap();
        let mut b = builder.build(config, WeightInit::default(), Some(5)).unwrap();
        a.fit(x.view(), y.view()).unwrap();
        b.fit(x.view(), y.view()).unwrap();

        assert_eq!(a.weights(), b.weights());
    }

    #[test]
    fn invalid_initializer_is_a_config_error() {
        let init = WeightInit::Normal {
            mean: 0.0,
            std_dev: -1.0,
        };

        let err = TrainerBuilder::new()
            .build(TrainerConfig::default(), init, Some(0))
            .err()
            .unwrap();
        assert!(matches!(err, MlErr::InvalidConfig(_)));
    }
}
