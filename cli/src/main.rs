use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use railgun::{ApiError, ErrorCode, Organization, RailgunClient, RailgunError, RailgunListOptions};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ApiError),
    #[error("{0}")]
    Railgun(#[from] RailgunError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Railgun(e) => e.error_code(),
            Self::Json(_) => "E_OUTPUT",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Config(e) => e.retryable(),
            Self::Railgun(e) => e.retryable(),
            Self::Json(_) => false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "railgun", about = "Manage Railguns and their zone connections")]
struct Cli {
    /// Organization id for account-level commands (ignored by `zone`).
    #[arg(long, global = true, env = "CF_ORGANIZATION_ID", default_value = "")]
    org: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Create {
        name: String,
    },
    List {
        /// `asc` or `desc`; omitted leaves ordering to the API.
        #[arg(long, default_value = "")]
        direction: String,
    },
    Get {
        railgun_id: String,
    },
    /// Zones currently using a Railgun.
    Zones {
        railgun_id: String,
    },
    Enable {
        railgun_id: String,
    },
    Disable {
        railgun_id: String,
    },
    Delete {
        railgun_id: String,
    },
    Zone(ZoneCommand),
}

#[derive(Args, Debug)]
struct ZoneCommand {
    #[command(subcommand)]
    command: ZoneSubcommand,
}

#[derive(Subcommand, Debug)]
enum ZoneSubcommand {
    List {
        zone_id: String,
    },
    Get {
        zone_id: String,
        railgun_id: String,
    },
    /// Run a connection test.
    Test {
        zone_id: String,
        railgun_id: String,
    },
    Connect {
        zone_id: String,
        railgun_id: String,
    },
    Disconnect {
        zone_id: String,
        railgun_id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = RailgunClient::from_env()?;
    let org = Organization::new(cli.org);

    match cli.command {
        Command::Create { name } => print_json(&client.create_railgun(&name, &org).await?),
        Command::List { direction } => {
            let options = RailgunListOptions::direction(direction);
            print_json(&client.list_railguns(&options, &org).await?)
        }
        Command::Get { railgun_id } => print_json(&client.railgun_details(&railgun_id, &org).await?),
        Command::Zones { railgun_id } => print_json(&client.railgun_zones(&railgun_id, &org).await?),
        Command::Enable { railgun_id } => print_json(&client.enable_railgun(&railgun_id, &org).await?),
        Command::Disable { railgun_id } => print_json(&client.disable_railgun(&railgun_id, &org).await?),
        Command::Delete { railgun_id } => {
            client.delete_railgun(&railgun_id, &org).await?;
            print_json(&json!({ "id": railgun_id, "deleted": true }))
        }
        Command::Zone(zone) => run_zone(&client, zone).await,
    }
}

async fn run_zone(client: &RailgunClient, zone: ZoneCommand) -> Result<(), CliError> {
    match zone.command {
        ZoneSubcommand::List { zone_id } => print_json(&client.zone_railguns(&zone_id).await?),
        ZoneSubcommand::Get { zone_id, railgun_id } => {
            print_json(&client.zone_railgun_details(&zone_id, &railgun_id).await?)
        }
        ZoneSubcommand::Test { zone_id, railgun_id } => {
            print_json(&client.test_railgun_connection(&zone_id, &railgun_id).await?)
        }
        ZoneSubcommand::Connect { zone_id, railgun_id } => {
            print_json(&client.connect_zone_railgun(&zone_id, &railgun_id).await?)
        }
        ZoneSubcommand::Disconnect { zone_id, railgun_id } => {
            print_json(&client.disconnect_zone_railgun(&zone_id, &railgun_id).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
