use clap::Parser;
use linreg::pipeline::{compare, evaluate_holdout};
use linreg::{Dataset, EstimatorKind, PipelineConfig};
use ndarray::{Array1, Array2, array};
use ndarray_rand::RandomExt;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand_distr::Uniform;

const HOUSING_FEATURES: [&str; 8] = [
    "MedInc",
    "HouseAge",
    "AveRooms",
    "AveBedrms",
    "Population",
    "AveOccup",
    "Latitude",
    "Longitude",
];

/// Multiple linear regression on housing prices, then a k-fold comparison of
/// OLS against its regularized variants.
#[derive(Parser, Debug)]
struct Args {
    /// Headered numeric CSV. A synthetic 20640-sample dataset is used when omitted.
    #[arg(long)]
    csv: Option<String>,

    #[arg(long, default_value = "MedHouseValue")]
    target_column: String,

    #[arg(long, default_value_t = 0.25)]
    test_size: f64,

    #[arg(long, default_value_t = 10)]
    folds: usize,

    #[arg(long, default_value_t = 11)]
    seed: u64,

    #[arg(long)]
    no_shuffle: bool,

    #[arg(long, default_value_t = 1.0)]
    lasso_alpha: f64,

    #[arg(long, default_value_t = 1.0)]
    ridge_alpha: f64,

    #[arg(long, default_value_t = 1.0)]
    elastic_net_alpha: f64,

    #[arg(long, default_value_t = 0.5)]
    l1_ratio: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset = match &args.csv {
        Some(path) => Dataset::from_csv_path(path, &args.target_column)?,
        None => synthetic_housing(20640, args.seed)?,
    };
    println!(
        "Dataset: {} samples, {} features, target `{}`",
        dataset.n_samples(),
        dataset.n_features(),
        dataset.target_name()
    );

    let config = PipelineConfig::default()
        .test_size(args.test_size)
        .seed(args.seed)
        .n_splits(args.folds)
        .shuffle(!args.no_shuffle);

    let report = evaluate_holdout(&EstimatorKind::LinearRegression, &dataset, &config)?;
    println!("\n=== Multiple linear regression ===");
    for (name, coef) in dataset.feature_names().iter().zip(report.coefficients.iter()) {
        println!("{:>12}: {:>12.6}", name, coef);
    }
    println!("{:>12}: {:>12.6}", "intercept", report.intercept);
    println!("test R² on {} samples: {:.4}", report.n_test, report.score);

    let kinds = [
        EstimatorKind::ElasticNet {
            alpha: args.elastic_net_alpha,
            l1_ratio: args.l1_ratio,
        },
        EstimatorKind::Lasso {
            alpha: args.lasso_alpha,
        },
        EstimatorKind::LinearRegression,
        EstimatorKind::Ridge {
            alpha: args.ridge_alpha,
        },
    ];

    println!("\n=== {}-fold cross-validation ===", config.n_splits);
    println!("{:<40} {:>10} {:>10}", "Estimator", "mean R²", "std");
    println!("{}", "-".repeat(62));
    for result in compare(&kinds, &dataset, &config)? {
        match &result.outcome {
            Ok(scores) => println!(
                "{:<40} {:>10.4} {:>10.4}",
                result.estimator.to_string(),
                scores.mean(),
                scores.std()
            ),
            Err(e) => println!("{:<40} failed: {}", result.estimator.to_string(), e),
        }
    }

    Ok(())
}

fn synthetic_housing(n_samples: usize, seed: u64) -> linreg::Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);
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

    Ok(Dataset::new(features, targets)?
        .with_feature_names(HOUSING_FEATURES)?
        .with_target_name("MedHouseValue"))
}
