use std::{cell::RefCell, rc::Rc};

use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal, Uniform};

use super::{RandErr, Result, WeightGen};

/// A weight generator that draws every weight independently from a probabilistic distribution.
///
/// The random number generator is shared so that the owner of the generator (usually a
/// trainer) can keep drawing from the same stream, e.g. for shuffling.
pub struct RandWeightGen<R: Rng, D: Distribution<f64>> {
    rng: Rc<RefCell<R>>,
    distribution: D,
}

impl<R: Rng, D: Distribution<f64>> RandWeightGen<R, D> {
    /// Creates a new `RandWeightGen` weight generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    pub fn new(rng: Rc<RefCell<R>>, distribution: D) -> Self {
        Self { rng, distribution }
    }
}

impl<R: Rng> RandWeightGen<R, StandardNormal> {
    /// Creates a new `RandWeightGen` weight generator sampling from N(0, 1).
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    pub fn standard_normal(rng: Rc<RefCell<R>>) -> Self {
        Self::new(rng, StandardNormal)
    }
}

impl<R: Rng> RandWeightGen<R, Normal<f64>> {
    /// Creates a new `RandWeightGen` weight generator with a normal distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    ///
    /// # Returns
    /// An error if `std_dev` is not finite (Nan or infinite) or negative.
    pub fn normal(rng: Rc<RefCell<R>>, mean: f64, std_dev: f64) -> Result<Self> {
        if std_dev < 0.0 {
            return Err(RandErr::negative_std_dev(std_dev));
        }

        Ok(Self::new(rng, Normal::new(mean, std_dev)?))
    }
}

impl<R: Rng> RandWeightGen<R, Uniform<f64>> {
    /// Creates a new `RandWeightGen` weight generator with a uniform distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high).
    pub fn uniform(rng: Rc<RefCell<R>>, low: f64, high: f64) -> Result<Self> {
        Ok(Self::new(rng, Uniform::new(low, high)?))
    }
}

impl<R: Rng, D: Distribution<f64>> WeightGen for RandWeightGen<R, D> {
    fn sample(&mut self, n: usize) -> Vec<f64> {
        let mut rng = self.rng.borrow_mut();
        (0..n).map(|_| self.distribution.sample(&mut *rng)).collect()
    }
}
