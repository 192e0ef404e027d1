use linreg::model_selection::{split_indices, train_test_split_seeded};
use linreg::pipeline::{compare, compare_estimators, cross_val_score, evaluate_holdout};
use linreg::{Dataset, EstimatorKind, KFold, Matrix, PipelineConfig, RegressionError, Vector};
use ndarray::{Array1, Array2, Axis, array};
use ndarray_rand::RandomExt;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand_distr::Uniform;

fn nyc_january_temperatures() -> Dataset {
    let mut rng = StdRng::seed_from_u64(1895);
    let years = Array1::from_iter((1895..=2018).map(|y| y as f64));
    let noise = Array1::random_using(years.len(), Uniform::new(-2.0, 2.0), &mut rng);
    let temps = years.mapv(|y| 30.0 + 0.03 * (y - 1895.0)) + noise;

    let n = years.len();
    Dataset::new(years.into_shape_with_order((n, 1)).unwrap(), temps)
        .unwrap()
        .with_feature_names(["Date"])
        .unwrap()
        .with_target_name("Temperature")
}

/// Eight independent features on very different scales, with a linear target.
fn housing(n_samples: usize) -> Dataset {
    let mut rng = StdRng::seed_from_u64(20640);
    let ranges = [
        (0.5, 15.0),
        (1.0, 52.0),
        (2.0, 8.0),
        (0.8, 1.4),
        (100.0, 3000.0),
        (1.5, 4.5),
        (32.5, 42.0),
        (-124.3, -114.3),
    ];
    let weights = array![0.4, 0.01, -0.1, 0.6, 0.00001, -0.05, -0.4, -0.4];

    let mut features = Array2::<f64>::zeros((n_samples, ranges.len()));
    for (j, &(low, high)) in ranges.iter().enumerate() {
        let column = Array1::random_using(n_samples, Uniform::new(low, high), &mut rng);
        features.column_mut(j).assign(&column);
    }

    let noise = Array1::random_using(n_samples, Uniform::new(-1.0, 1.0), &mut rng);
    let targets = features.dot(&weights) - 30.0 + noise;

    Dataset::new(features, targets)
        .unwrap()
        .with_feature_names([
            "MedInc",
            "HouseAge",
            "AveRooms",
            "AveBedrms",
            "Population",
            "AveOccup",
            "Latitude",
            "Longitude",
        ])
        .unwrap()
        .with_target_name("MedHouseValue")
}

#[test]
fn split_is_deterministic_for_every_seed_and_fraction() {
    for seed in [0, 1, 11, 42, 12345] {
        for fraction in [0.1, 0.25, 0.5, 0.9] {
            let a = split_indices(57, fraction, &mut StdRng::seed_from_u64(seed)).unwrap();
            let b = split_indices(57, fraction, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(a, b);

            let mut all: Vec<usize> = a.train.iter().chain(&a.test).copied().collect();
            all.sort_unstable();
            assert_eq!(all, (0..57).collect::<Vec<_>>());
        }
    }
}

#[test]
fn different_seeds_give_different_splits() {
    let a = split_indices(100, 0.25, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = split_indices(100, 0.25, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_ne!(a.test, b.test);
}

#[test]
fn folds_cover_every_sample_exactly_once() {
    for k in [2, 3, 7, 10] {
        for shuffle in [true, false] {
            let folds = KFold::new(k).shuffle(shuffle).seed(5).folds(53).unwrap();
            assert_eq!(folds.len(), k);

            let mut tested: Vec<usize> =
                folds.iter().flat_map(|f| f.test.iter().copied()).collect();
            tested.sort_unstable();
            assert_eq!(tested, (0..53).collect::<Vec<_>>());

            let sizes: Vec<usize> = folds.iter().map(|f| f.test.len()).collect();
            let max = sizes.iter().max().unwrap();
            let min = sizes.iter().min().unwrap();
            assert!(max - min <= 1);
        }
    }
}

#[test]
fn exact_line_fit_and_holdout_score() {
    let x = Matrix::from_shape_fn((40, 1), |(i, _)| i as f64 * 0.5 - 3.0);
    let y = x.column(0).mapv(|v| 2.0 * v + 3.0);
    let dataset = Dataset::new(x, y).unwrap();

    let report = evaluate_holdout(
        &EstimatorKind::LinearRegression,
        &dataset,
        &PipelineConfig::default(),
    )
    .unwrap();

    assert!((report.coefficients[0] - 2.0).abs() < 1e-9);
    assert!((report.intercept - 3.0).abs() < 1e-9);
    assert!((report.score - 1.0).abs() < 1e-9);
}

#[test]
fn unfitted_and_mismatched_estimators_fail() {
    let x = array![[1.0, 0.0], [2.0, 1.0], [3.0, 0.0], [4.0, 1.0]];
    let y = array![1.0, 2.0, 3.0, 5.0];

    for kind in EstimatorKind::defaults() {
        let mut model = kind.build();
        assert!(matches!(model.predict(&x), Err(RegressionError::Unfitted)));

        model.fit(&x, &y).unwrap();
        let narrow = x.column(0).to_owned().insert_axis(Axis(1));
        assert!(matches!(
            model.predict(&narrow),
            Err(RegressionError::DimensionMismatch { .. })
        ));
    }
}

#[test]
fn nyc_temperature_trend() {
    let dataset = nyc_january_temperatures();
    assert_eq!(dataset.n_samples(), 124);

    let (train, test) = train_test_split_seeded(&dataset, 0.25, 11).unwrap();
    assert_eq!(train.n_samples(), 93);
    assert_eq!(test.n_samples(), 31);

    let mut model = EstimatorKind::LinearRegression.build();
    model.fit(train.features(), train.targets()).unwrap();

    let slope = model.coefficients().unwrap()[0];
    assert!(slope > 0.01 && slope < 0.05, "slope {slope}");

    let predictions = model.predict(&array![[1890.0], [2021.0]]).unwrap();
    for p in predictions.iter() {
        assert!((25.0..=45.0).contains(p), "prediction {p}");
    }
    assert!(predictions[1] > predictions[0]);

    let simple = linreg::linregress(
        train.features().column(0).to_vec().as_slice(),
        train.targets().as_slice().unwrap(),
    )
    .unwrap();
    assert!((simple.slope - slope).abs() < 1e-9);
    assert!((simple.intercept - model.intercept().unwrap()).abs() < 1e-6);
}

#[test]
fn housing_estimator_comparison() {
    let dataset = housing(20640);
    let config = PipelineConfig::default().seed(11);

    let results = compare(&EstimatorKind::defaults(), &dataset, &config).unwrap();
    assert_eq!(results.len(), 4);

    let mean_of = |name: &str| {
        results
            .iter()
            .find(|r| r.estimator.name() == name)
            .and_then(|r| r.mean_score())
            .unwrap()
    };

    for result in &results {
        let scores = result.outcome.as_ref().unwrap();
        assert_eq!(scores.len(), 10);
        let mean = scores.mean();
        assert!((0.0..=1.0).contains(&mean), "{}: {mean}", result.estimator);
    }

    let ols = mean_of("LinearRegression");
    let ridge = mean_of("Ridge");
    let lasso = mean_of("Lasso");
    let enet = mean_of("ElasticNet");

    assert!(ols > 0.9);
    assert!((ols - ridge).abs() < (ols - lasso).abs());
    assert!((ols - ridge).abs() < (ols - enet).abs());
    assert!(lasso < ols);
    assert!(enet < ols);
}

#[test]
fn comparison_is_reproducible() {
    let dataset = housing(500);
    let config = PipelineConfig::default().n_splits(5).seed(3);

    let first = compare(&EstimatorKind::defaults(), &dataset, &config).unwrap();
    let second = compare(&EstimatorKind::defaults(), &dataset, &config).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.estimator, b.estimator);
        assert_eq!(a.outcome.as_ref().unwrap(), b.outcome.as_ref().unwrap());
    }
}

#[test]
fn comparison_scores_every_estimator_on_the_same_folds() {
    let dataset = housing(300);
    let kfold = KFold::new(6).seed(42);
    let kinds = EstimatorKind::defaults();

    let results = compare_estimators(&kinds, &dataset, &kfold).unwrap();
    let folds = kfold.folds(dataset.n_samples()).unwrap();

    assert_eq!(results.len(), kinds.len());
    for (kind, result) in kinds.iter().zip(&results) {
        assert_eq!(&result.estimator, kind);
        let expected = cross_val_score(kind, &dataset, &folds).unwrap();
        assert_eq!(result.outcome.as_ref().unwrap(), &expected);
    }
}

#[test]
fn ols_recovers_coefficients_of_mixed_scale_features() {
    let mut rng = StdRng::seed_from_u64(7);
    let large = Array1::random_using(200, Uniform::new(0.0, 1e4), &mut rng);
    let small = Array1::from_iter((0..200).map(|i| (i % 7) as f64 * 1e-3));
    let targets = large.clone() + small.mapv(|v| 1000.0 * v) + 5.0;

    let mut features = Array2::<f64>::zeros((200, 2));
    features.column_mut(0).assign(&large);
    features.column_mut(1).assign(&small);

    let mut model = EstimatorKind::LinearRegression.build();
    model.fit(&features, &targets).unwrap();

    let coefficients = model.coefficients().unwrap();
    assert!((coefficients[0] - 1.0).abs() < 1e-9, "{coefficients}");
    assert!((coefficients[1] - 1000.0).abs() < 1e-6, "{coefficients}");
    assert!((model.intercept().unwrap() - 5.0).abs() < 1e-6);
}

#[test]
fn csv_round_trip_into_pipeline() {
    let mut csv = String::from("Date,Temperature\n");
    for year in 1895..1915 {
        csv.push_str(&format!("{},{}\n", year, 30.0 + 0.5 * (year - 1895) as f64));
    }

    let dataset = Dataset::from_csv_reader(csv.as_bytes(), "Temperature").unwrap();
    assert_eq!(dataset.n_samples(), 20);
    assert_eq!(dataset.targets(), &Vector::from_iter((0..20).map(|i| 30.0 + 0.5 * i as f64)));

    let report = evaluate_holdout(
        &EstimatorKind::LinearRegression,
        &dataset,
        &PipelineConfig::default(),
    )
    .unwrap();
    assert!((report.coefficients[0] - 0.5).abs() < 1e-6);
}
