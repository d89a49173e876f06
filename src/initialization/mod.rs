mod constant;
mod error;
mod random;
mod weight_gen;
mod weight_init;

pub use constant::ConstWeightGen;
pub use error::{RandErr, Result};
pub use random::RandWeightGen;
pub use weight_gen::WeightGen;
pub use weight_init::WeightInit;
