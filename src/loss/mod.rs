mod hinge;
mod loss_fn;
mod mse;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

pub use hinge::Hinge;
pub use loss_fn::LossFn;
pub use mse::Mse;

/// The closed set of losses a linear trainer can be configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossKind {
    /// Squared error, used for regression.
    #[default]
    #[serde(alias = "MSE")]
    Mse,
    /// Hinge loss, used for binary classification with labels in {-1, +1}.
    #[serde(alias = "Hinge")]
    Hinge,
}

impl Display for LossKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LossKind::Mse => "mse",
            LossKind::Hinge => "hinge",
        };

        f.write_str(s)
    }
}
