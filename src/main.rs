use std::env;

use anyhow::Context;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use linear_sgd::{config::RunConfig, data, training::TrainerBuilder};

const DEFAULT_CONFIG: &str = "config.json";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = RunConfig::load(&path).with_context(|| format!("cannot load config '{path}'"))?;
    let dataset = &config.dataset;

    let rows = data::load_columns(
        &dataset.path,
        &dataset.columns,
        dataset.has_headers,
        dataset.max_rows,
    )
    .with_context(|| format!("cannot read dataset '{}'", dataset.path.display()))?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (train, test) = data::train_test_split(rows.view(), config.train_fraction, &mut rng)?;
    let target = dataset.target_column();
    let (x_train, y_train) = data::separate_column(train.view(), target)?;
    let (x_test, y_test) = data::separate_column(test.view(), target)?;
    info!(
        "training on {} samples, testing on {}",
        x_train.nrows(),
        x_test.nrows()
    );

    let mut trainer = TrainerBuilder::new().build(config.trainer, config.init, config.seed)?;
    let stats = trainer.fit(x_train.view(), y_train.view())?;
    info!(
        epochs = stats.epochs(),
        batches = stats.batches(),
        samples = stats.samples();
        "fit done, last epoch loss {:?}",
        stats.last_epoch_loss()
    );

    let score = trainer
        .score(x_test.view(), y_test.view())
        .context("cannot score the test set")?;
    println!("{score}");

    Ok(())
}
