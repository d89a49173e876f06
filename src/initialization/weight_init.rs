use std::{cell::RefCell, rc::Rc};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ConstWeightGen, RandWeightGen, Result, WeightGen};

/// Describes how a model's weights are initialized before the first `fit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightInit {
    /// Independent draws from N(0, 1).
    #[default]
    StandardNormal,
    Normal {
        mean: f64,
        std_dev: f64,
    },
    Uniform {
        low: f64,
        high: f64,
    },
    Constant {
        value: f64,
    },
}

impl WeightInit {
    /// Resolves this description into a weight generator.
    ///
    /// # Arguments
    /// * `rng` - The random number generator random initializers draw from.
    ///
    /// # Returns
    /// The weight generator or an error if the distribution parameters are invalid.
    pub fn weight_gen<R: Rng + 'static>(&self, rng: Rc<RefCell<R>>) -> Result<Box<dyn WeightGen>> {
        let weight_gen: Box<dyn WeightGen> = match *self {
            WeightInit::StandardNormal => Box::new(RandWeightGen::standard_normal(rng)),
            WeightInit::Normal { mean, std_dev } => {
                Box::new(RandWeightGen::normal(rng, mean, std_dev)?)
            }
            WeightInit::Uniform { low, high } => Box::new(RandWeightGen::uniform(rng, low, high)?),
            WeightInit::Constant { value } => Box::new(ConstWeightGen::new(value)),
        };

        Ok(weight_gen)
    }
}
