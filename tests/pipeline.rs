use rand::{SeedableRng, rngs::StdRng};

use linear_sgd::{config::RunConfig, data, loss::LossKind, training::TrainerBuilder};

/// `y = 2a - b` with a few malformed records mixed in.
fn csv() -> String {
    let mut csv = String::from("id,a,b,y\n");
    for i in 0..40 {
        let a = (i % 7) as f64;
        let b = (i % 5) as f64;
        csv.push_str(&format!("{i},{a},{b},{}\n", 2.0 * a - b));
    }
    csv.push_str("40,n/a,1,1\n41,2\n");
    csv
}

#[test]
fn config_driven_run_fits_held_out_data() {
    let config = RunConfig::from_json(
        r#"{
            "dataset": { "path": "unused.csv", "columns": [1, 2, 3] },
            "trainer": { "learning_rate": 0.01, "batch_size": 4, "epochs": 300, "loss": "mse" },
            "seed": 3
        }"#,
    )
    .unwrap();
    let dataset = &config.dataset;

    let rows = data::read_columns(
        csv().as_bytes(),
        &dataset.columns,
        dataset.has_headers,
        dataset.max_rows,
    )
    .unwrap();
    assert_eq!(rows.dim(), (40, 3));

    let mut rng = StdRng::seed_from_u64(3);
    let (train, test) =
        data::train_test_split(rows.view(), config.train_fraction, &mut rng).unwrap();
    assert_eq!((train.nrows(), test.nrows()), (32, 8));

    let target = dataset.target_column();
    let (x_train, y_train) = data::separate_column(train.view(), target).unwrap();
    let (x_test, y_test) = data::separate_column(test.view(), target).unwrap();

    let mut trainer = TrainerBuilder::new()
        .build(config.trainer, config.init, config.seed)
        .unwrap();
    assert_eq!(trainer.loss_kind(), LossKind::Mse);

    let stats = trainer.fit(x_train.view(), y_train.view()).unwrap();
    assert_eq!(stats.batches(), 300 * 8);

    let weights = trainer.weights().unwrap();
    assert!((weights[0] - 2.0).abs() < 1e-3);
    assert!((weights[1] + 1.0).abs() < 1e-3);
    assert!(trainer.score(x_test.view(), y_test.view()).unwrap() < 0.01);
}

#[test]
fn row_limit_counts_records() {
    let rows = data::read_columns(csv().as_bytes(), &[1, 2, 3], true, Some(9)).unwrap();
    assert_eq!(rows.nrows(), 9);
}
