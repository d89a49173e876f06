use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The specific result type for the different instances of `RandWeightGen` generators.
pub type Result<T> = std::result::Result<T, RandErr>;

/// Error returned by the `RandWeightGen` constructors whenever the requested distribution
/// cannot be built, each constructor has it's own constraints given that they use different
/// distributions.
#[derive(Debug)]
pub struct RandErr(String);

impl RandErr {
    pub(super) fn negative_std_dev(std_dev: f64) -> Self {
        Self(format!(
            "invalid normal distribution: std_dev must not be negative, got {std_dev}"
        ))
    }
}

impl From<NormalError> for RandErr {
    fn from(value: NormalError) -> Self {
        Self(format!("invalid normal distribution: {value}"))
    }
}

impl From<UniformError> for RandErr {
    fn from(value: UniformError) -> Self {
        Self(format!("invalid uniform distribution: {value}"))
    }
}

impl Display for RandErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for RandErr {}
