use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::{initialization::RandErr, loss::LossKind};

/// The result type used in the entire training library.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The training library's error type.
#[derive(Debug)]
pub enum MlErr {
    /// Two inputs that must agree in size do not.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// `predict` or `score` was called before any successful `fit`.
    NotFitted,
    /// The trainer variant does not implement the configured loss.
    UnsupportedLoss {
        model: &'static str,
        loss: LossKind,
    },
    /// The provided data has no rows.
    EmptyDataset,
    /// A hyperparameter or initializer parameter is out of its domain.
    InvalidConfig(String),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            MlErr::NotFitted => write!(f, "the model has not been fitted yet"),
            MlErr::UnsupportedLoss { model, loss } => {
                write!(f, "the {model} does not support the '{loss}' loss")
            }
            MlErr::EmptyDataset => write!(f, "the dataset has no rows"),
            MlErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for MlErr {}

impl From<RandErr> for MlErr {
    fn from(value: RandErr) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}
