mod builder;
mod config;
mod linear_trainer;
mod stats;
mod trainer;

pub use builder::TrainerBuilder;
pub use config::TrainerConfig;
pub use linear_trainer::{LinearClassifier, LinearRegressor, LinearTrainer};
pub use stats::FitStats;
pub use trainer::Trainer;
