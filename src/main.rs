mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use feast::Config;

use cli::{group::GroupCommand, plan::PlanCommand, recipes::RecipesCommand, shopping::FormatArg};

/// feast - dinner party meal planning
#[derive(Parser)]
#[command(name = "feast")]
#[command(about = "Plan three-course meals for your groups and build the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Browse the recipe catalog
    Recipes {
        #[command(subcommand)]
        command: RecipesCommand,
    },
    /// Build, save and load meal plans
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Manage dinner groups
    Group {
        #[command(subcommand)]
        command: GroupCommand,
    },
    /// Shopping list for the current plan or a saved one
    Shopping {
        /// Saved meal plan id
        #[arg(long)]
        plan: Option<String>,

        #[arg(long, value_enum, default_value_t = FormatArg::List)]
        format: FormatArg,

        /// Mark an item as checked (repeatable)
        #[arg(long = "check")]
        checked: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    feast::observability::init_observability(
        "feast",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Recipes { command } => cli::recipes::run(config, command).await,
        Commands::Plan { command } => cli::plan::run(config, command).await,
        Commands::Group { command } => cli::group::run(config, command).await,
        Commands::Shopping {
            plan,
            format,
            checked,
        } => cli::shopping::run(config, plan, format, checked).await,
    };

    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }

    result
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = feast::connect(&config.database.url, 1).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: Config) -> Result<()> {
    tracing::info!("Resetting database...");

    feast::db::drop_database(&config.database.url).await?;
    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
