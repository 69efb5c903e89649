use std::io::Write;

use clap::Parser;
use vendor_pricing::{
    MarketConditions, ModelConfig, PricePredictionModel, PricingError, PricingReport, TRAINING_SET,
    format_price,
};

#[derive(Parser, Debug)]
#[command(name = "vendor-pricing")]
#[command(about = "Recommend a menu price from market conditions")]
struct Args {
    /// Month of the year (1-12)
    #[arg(long)]
    month: Option<String>,

    /// Expected demand in percent (0-100)
    #[arg(long)]
    demand: Option<String>,

    /// Competition level (1 = very low .. 5 = very high)
    #[arg(long)]
    competition: Option<String>,

    /// Ingredient cost in dollars
    #[arg(long)]
    ingredient_cost: Option<String>,

    /// JSON file with learning_rate, iterations and seed
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured learning rate
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Override the configured number of sweeps per training run
    #[arg(long)]
    iterations: Option<usize>,

    /// Seed weight initialization for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Extra training runs after the initial one
    #[arg(long, default_value_t = 0)]
    retrain: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable interactive prompt after training
    #[arg(short)]
    interactive: bool,
}

impl Args {
    fn model_config(&self) -> vendor_pricing::Result<ModelConfig> {
        let mut config = match &self.config {
            Some(path) => ModelConfig::from_json_file(path)?,
            None => ModelConfig::default(),
        };

        if let Some(learning_rate) = self.learning_rate {
            config = config.with_learning_rate(learning_rate);
        }
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }

    fn market_conditions(&self) -> vendor_pricing::Result<Option<MarketConditions>> {
        match (&self.month, &self.demand, &self.competition, &self.ingredient_cost) {
            (None, None, None, None) => Ok(None),
            (Some(month), Some(demand), Some(competition), Some(cost)) => {
                MarketConditions::parse(month, demand, competition, cost).map(Some)
            }
            _ => Err(PricingError::InvalidInput {
                message: "--month, --demand, --competition and --ingredient-cost must be given together"
                    .to_string(),
            }),
        }
    }
}

fn main() -> vendor_pricing::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = args.model_config()?;
    let conditions = args.market_conditions()?;

    let mut model = PricePredictionModel::from_config(&config);
    model.train();
    for _ in 0..args.retrain {
        model.train();
    }

    if let Some(conditions) = conditions {
        print_report(&model, conditions, args.json)?;
    } else if !args.interactive {
        print_fit(&model);
    }

    if args.interactive {
        run_interactive(&mut model, args.json)?;
    }

    Ok(())
}

fn print_report(
    model: &PricePredictionModel,
    conditions: MarketConditions,
    json: bool,
) -> vendor_pricing::Result<()> {
    let report = PricingReport::new(model, conditions);
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("Market conditions: {}", report.conditions);
        println!("Recommended price: {}", format_price(report.price));
        println!("\nPrice range analysis:\n{}", report.range);
    }
    Ok(())
}

fn print_fit(model: &PricePredictionModel) {
    println!("\n=== MODEL FIT ===");
    println!("Epochs trained: {}", model.epochs_trained());
    println!("Weights: {:?}", model.weights());
    for example in &TRAINING_SET {
        println!(
            "{:?} -> predicted {} (target {})",
            example.features,
            format_price(model.predict(&example.features)),
            format_price(example.price)
        );
    }
    println!("Training MSE: {:.6}", model.mean_squared_error());
}

fn run_interactive(model: &mut PricePredictionModel, json: bool) -> vendor_pricing::Result<()> {
    println!("\n--- Interactive Mode ---");
    println!("Enter: <month> <demand> <competition> <ingredient cost>");
    println!("Type 'retrain' to train further, 'exit' to quit.");

    let mut input = String::new();
    loop {
        input.clear();
        print!("\nConditions: ");
        std::io::stdout().flush()?;

        if std::io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let trimmed_input = input.trim();
        if trimmed_input.eq_ignore_ascii_case("exit") {
            println!("Exiting interactive mode.");
            break;
        }
        if trimmed_input.is_empty() {
            continue;
        }
        if trimmed_input.eq_ignore_ascii_case("retrain") {
            model.train();
            println!(
                "Retrained ({} epochs total, MSE {:.6})",
                model.epochs_trained(),
                model.mean_squared_error()
            );
            continue;
        }

        let fields: Vec<&str> = trimmed_input.split_whitespace().collect();
        let parsed = match fields.as_slice() {
            [month, demand, competition, cost] => {
                MarketConditions::parse(month, demand, competition, cost)
            }
            _ => Err(PricingError::InvalidInput {
                message: format!("expected 4 values, got {}", fields.len()),
            }),
        };

        match parsed {
            Ok(conditions) => print_report(model, conditions, json)?,
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
