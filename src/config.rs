use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{data::DEFAULT_TRAIN_FRACTION, initialization::WeightInit, training::TrainerConfig};

/// Where the data of a run comes from and how it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The path of the CSV file.
    pub path: PathBuf,
    /// The CSV columns to read, in order.
    pub columns: Vec<usize>,
    /// The index of the target among `columns`, the last one if absent.
    #[serde(default)]
    pub target: Option<usize>,
    #[serde(default = "has_headers_default")]
    pub has_headers: bool,
    /// The maximum amount of records to read.
    #[serde(default)]
    pub max_rows: Option<usize>,
}

impl DatasetConfig {
    /// The index of the target among the selected columns.
    pub fn target_column(&self) -> usize {
        self.target
            .unwrap_or_else(|| self.columns.len().saturating_sub(1))
    }
}

fn has_headers_default() -> bool {
    true
}

fn train_fraction_default() -> f64 {
    DEFAULT_TRAIN_FRACTION
}

/// The configuration of a whole training run, from loading the data to scoring the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub dataset: DatasetConfig,
    #[serde(default = "train_fraction_default")]
    pub train_fraction: f64,
    #[serde(default)]
    pub trainer: TrainerConfig,
    #[serde(default)]
    pub init: WeightInit,
    /// Seeds the split, the weight initialization and the shuffling, the OS is used if absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Parses a `RunConfig` from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::LossKind;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = RunConfig::from_json(
            r#"{ "dataset": { "path": "data.csv", "columns": [1, 2, 3] } }"#,
        )
        .unwrap();

        assert_eq!(config.dataset.path, PathBuf::from("data.csv"));
        assert!(config.dataset.has_headers);
        assert_eq!(config.dataset.max_rows, None);
        assert_eq!(config.dataset.target_column(), 2);
        assert_eq!(config.train_fraction, DEFAULT_TRAIN_FRACTION);
        assert_eq!(config.trainer, TrainerConfig::default());
        assert_eq!(config.init, WeightInit::StandardNormal);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn full_config() {
        let config = RunConfig::from_json(
            r#"{
                "dataset": {
                    "path": "iris.csv",
                    "columns": [0, 1, 4],
                    "target": 0,
                    "has_headers": false,
                    "max_rows": 9
                },
                "train_fraction": 0.5,
                "trainer": {
                    "learning_rate": 1e-7,
                    "batch_size": 100,
                    "epochs": 100,
                    "loss": "MSE",
                    "verbose": true
                },
                "init": { "kind": "uniform", "low": -1.0, "high": 1.0 },
                "seed": 42
            }"#,
        )
        .unwrap();

        assert_eq!(config.dataset.target_column(), 0);
        assert!(!config.dataset.has_headers);
        assert_eq!(config.dataset.max_rows, Some(9));
        assert_eq!(config.train_fraction, 0.5);
        assert_eq!(config.trainer.learning_rate, 1e-7);
        assert_eq!(config.trainer.batch_size.get(), 100);
        assert_eq!(config.trainer.loss, LossKind::Mse);
        assert!(config.trainer.verbose);
        assert_eq!(
            config.init,
            WeightInit::Uniform {
                low: -1.0,
                high: 1.0
            }
        );
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn unknown_loss_is_rejected() {
        let parsed = RunConfig::from_json(
            r#"{ "dataset": { "path": "d.csv", "columns": [0] }, "trainer": { "loss": "huber" } }"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RunConfig::load("/nonexistent/config.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
