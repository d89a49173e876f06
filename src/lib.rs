pub mod config;
pub mod data;
mod dataset;
pub mod error;
pub mod initialization;
pub mod loss;
pub mod optimization;
pub mod training;

pub use error::{MlErr, Result};
