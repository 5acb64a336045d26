mod output;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use employee_search::{
    EmployeeSearchClient, EmployeeSearchFilter, EngineConfig, IndexManager,
    mapping::EMPLOYEES_MAPPING,
};
use output::{GlobalOptions, OutputFormat, OutputManager};

#[derive(Parser)]
#[command(name = "employee-search")]
#[command(version = "0.1.0")]
#[command(
    about = "Demo client for the employees search index",
    long_about = r#"Demo client for the employees search index:

• setup   Recreate the index from its mapping and bulk-load a CSV file
• search  Compile ad-hoc filter flags into one boolean query and run it
• demo    Run the scripted demonstration searches
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Engine base URL
    #[arg(long, env = "ES_URL", default_value = "http://localhost:9200")]
    url: String,

    /// Target index name
    #[arg(long, env = "ES_INDEX", default_value = "employees")]
    index: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recreate the index and bulk-load it from a CSV file
    Setup {
        /// Path to the employee CSV file
        #[arg(long, default_value = "data/employees.csv")]
        data: PathBuf,
    },

    /// Run a filtered search
    Search(SearchArgs),

    /// Run the scripted demonstration searches
    Demo,
}

#[derive(Args)]
struct SearchArgs {
    /// Look up a single record number instead of filtering
    #[arg(long, conflicts_with_all = [
        "age", "gender", "occupation", "lifestyle",
        "salary_gte", "salary_lte", "expenditure_gte", "expenditure_lte",
    ])]
    no: Option<i64>,

    /// Exact age to match
    #[arg(long)]
    age: Option<i64>,

    /// Gender code to match (0 and up are all valid codes)
    #[arg(long)]
    gender: Option<i64>,

    /// Occupation text to match
    #[arg(long)]
    occupation: Option<String>,

    /// Healthy-lifestyle tag to match
    #[arg(long = "lifestyle")]
    lifestyle: Option<String>,

    /// Lower salary bound (inclusive)
    #[arg(long = "salary-gte")]
    salary_gte: Option<f64>,

    /// Upper salary bound (inclusive)
    #[arg(long = "salary-lte")]
    salary_lte: Option<f64>,

    /// Lower monthly-expenditure bound (inclusive)
    #[arg(long = "expenditure-gte")]
    expenditure_gte: Option<f64>,

    /// Upper monthly-expenditure bound (inclusive)
    #[arg(long = "expenditure-lte")]
    expenditure_lte: Option<f64>,
}

impl SearchArgs {
    fn into_filter(self) -> EmployeeSearchFilter {
        EmployeeSearchFilter {
            age: self.age,
            gender: self.gender,
            occupation: self.occupation,
            healthy_lifestyle: self.lifestyle,
            salary_gte: self.salary_gte,
            salary_lte: self.salary_lte,
            monthly_expenditure_gte: self.expenditure_gte,
            monthly_expenditure_lte: self.expenditure_lte,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let options = GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };
    let output = OutputManager::new(options);
    let config = EngineConfig {
        url: cli.url,
        index: cli.index,
    };

    match cli.command {
        Commands::Setup { data } => setup(config, &data, &output).await,
        Commands::Search(args) => search(config, args, &output).await,
        Commands::Demo => demo(config, &output).await,
    }
}

async fn setup(config: EngineConfig, data: &std::path::Path, output: &OutputManager) -> Result<()> {
    let manager = IndexManager::connect(config)
        .await
        .context("engine is not reachable")?;
    manager.create_index(&EMPLOYEES_MAPPING).await?;
    let indexed = manager.populate_index(data).await?;
    output.success(&format!(
        "index '{}' created and {indexed} documents indexed",
        manager.index()
    ));
    Ok(())
}

async fn search(config: EngineConfig, args: SearchArgs, output: &OutputManager) -> Result<()> {
    let client = EmployeeSearchClient::connect(config)
        .await
        .context("engine is not reachable")?;

    let result = if let Some(no) = args.no {
        client.get_by_no(no).await?
    } else {
        client.search(&args.into_filter()).await?
    };

    output.hits(&result)?;
    Ok(())
}

/// The scripted searches: one lookup by record number, then three
/// filtered queries of increasing shape.
async fn demo(config: EngineConfig, output: &OutputManager) -> Result<()> {
    let client = EmployeeSearchClient::connect(config)
        .await
        .context("engine is not reachable")?;

    output.heading("employee no 4");
    let result = client.get_by_no(4).await?;
    output.hits(&result)?;

    output.heading("occupation \"software engineer\"");
    let filter = EmployeeSearchFilter::new().with_occupation("software engineer");
    let result = client.search(&filter).await?;
    output.hits(&result)?;

    output.heading("age 34, gender 0");
    let filter = EmployeeSearchFilter::new().with_age(34).with_gender(0);
    let result = client.search(&filter).await?;
    output.hits(&result)?;

    output.heading("age 34, salary between 28000 and 38000");
    let filter = EmployeeSearchFilter::new()
        .with_age(34)
        .with_salary_gte(28000.0)
        .with_salary_lte(38000.0);
    let result = client.search(&filter).await?;
    output.hits(&result)?;

    Ok(())
}
