//! Tabular data glue: CSV loading and train/test preparation.

mod error;
mod loader;
mod split;

pub use error::{DataErr, Result};
pub use loader::{load_columns, read_columns};
pub use split::{DEFAULT_TRAIN_FRACTION, separate_column, train_test_split};
