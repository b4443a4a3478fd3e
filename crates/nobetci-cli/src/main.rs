mod fetch;
mod output;
mod validate;
mod watch;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nobetci")]
#[command(about = "On-duty pharmacy (nöbetçi eczane) lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch once for the configured locality and print every slot
    Fetch {
        /// Print slots as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check settings and that the source answers, as first-run setup does
    Validate {
        #[arg(long)]
        city: String,
        #[arg(long, default_value = "")]
        district: String,
        /// Number of pharmacy slots (1-20)
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        sensor_count: i64,
        /// Poll interval in seconds: 3600 or 86400
        #[arg(long, default_value_t = 3600)]
        update_interval: u64,
    },
    /// Poll on the configured interval; press Enter to refresh immediately
    Watch {
        /// Print slots as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let source = nobetci_core::load_source_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(source.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Fetch { json } => {
            let config = nobetci_core::load_app_config()?;
            fetch::run_fetch(&config, json).await
        }
        Commands::Validate {
            city,
            district,
            sensor_count,
            update_interval,
        } => {
            validate::run_validate(source, city, district, sensor_count, update_interval).await
        }
        Commands::Watch { json } => {
            let config = nobetci_core::load_app_config()?;
            watch::run_watch(config, json).await
        }
    }
}
