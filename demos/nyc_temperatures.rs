use clap::Parser;
use linreg::{Dataset, EstimatorKind, Matrix, PipelineConfig, linregress};
use ndarray::{Array1, array};
use ndarray_rand::RandomExt;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand_distr::Uniform;

/// Simple linear regression of NYC January average high temperatures.
#[derive(Parser, Debug)]
struct Args {
    /// CSV with a date column and a temperature column. Synthetic data is used when omitted.
    #[arg(long)]
    csv: Option<String>,

    #[arg(long, default_value = "Date")]
    date_column: String,

    #[arg(long, default_value = "Temperature")]
    target_column: String,

    /// Dates are stored as YYYYMM and get truncated to the year.
    #[arg(long)]
    yyyymm: bool,

    #[arg(long, default_value_t = 0.25)]
    test_size: f64,

    #[arg(long, default_value_t = 11)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let dataset = match &args.csv {
        Some(path) => Dataset::from_csv_path(path, &args.target_column)?
            .select_features(&[args.date_column.as_str()])?,
        None => synthetic_temperatures(args.seed)?,
    };
    let dataset = if args.yyyymm {
        dataset.map_features(|d| (d / 100.0).floor())
    } else {
        dataset
    };
    println!(
        "Dataset: {} samples ({} -> {})",
        dataset.n_samples(),
        dataset.feature_names()[0],
        dataset.target_name()
    );

    // Part 1: closed-form simple regression over every year.
    let years = dataset.features().column(0).to_vec();
    let temps = dataset.targets().to_vec();
    let line = linregress(&years, &temps)?;
    println!("\n=== Simple linear regression ===");
    println!(
        "slope: {:.6}  intercept: {:.6}  r²: {:.4}",
        line.slope,
        line.intercept,
        line.r_squared()
    );
    println!("predicted 2019 January average high: {:.2}", line.predict(2019.0));
    println!("predicted 1890 January average high: {:.2}", line.predict(1890.0));

    // Part 2: fit on a training split and check the held-out years.
    let config = PipelineConfig::default()
        .test_size(args.test_size)
        .seed(args.seed);
    let report =
        linreg::pipeline::evaluate_holdout(&EstimatorKind::LinearRegression, &dataset, &config)?;

    println!("\n=== Train/test evaluation ===");
    println!("train samples: {}, test samples: {}", report.n_train, report.n_test);
    println!("coefficient: {:.6}", report.coefficients[0]);
    println!("intercept:   {:.6}", report.intercept);
    println!("test R²:     {:.4}", report.score);

    println!("\npredicted vs expected (every 5th test sample):");
    for (i, (p, e)) in report.predicted.iter().zip(report.expected.iter()).enumerate().step_by(5) {
        println!("  sample {:>3}: predicted {:>6.2}, expected {:>6.2}", i, p, e);
    }

    let fit = linreg::LinearFit::new(report.coefficients.clone(), report.intercept);
    let future = fit.predict(&array![[2019.0], [1890.0]])?;
    println!("\npredict(2019) = {:.2}, predict(1890) = {:.2}", future[0], future[1]);

    Ok(())
}

fn synthetic_temperatures(seed: u64) -> linreg::Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);
    let years = Array1::from_iter((1895..=2018).map(|y| y as f64));
    let noise = Array1::random_using(years.len(), Uniform::new(-4.0, 4.0), &mut rng);
    let temps = years.mapv(|y| 36.0 + 0.015 * (y - 1895.0)) + noise;

    let features = Matrix::from_shape_fn((years.len(), 1), |(i, _)| years[i]);
    Dataset::new(features, temps)?
        .with_feature_names(["Date"])
        .map(|d| d.with_target_name("Temperature"))
}
