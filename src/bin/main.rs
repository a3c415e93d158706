use clap::Parser;
use snowstorm_sdk::client::{IdentityClient, IdentityClientError};
use snowstorm_sdk::commands::resolve::{ResolveCommand, ResolveError};
use snowstorm_sdk::parameters::{Commands, ConnectionArgs};
use std::error::Error;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "snowstorm-cli")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.connection.log_level());

    let config = cli.connection.client_config()?;
    let client =
        IdentityClient::new(config).map_err(|e| format!("error creating http client: {}", e))?;

    match ResolveCommand::new(client).execute(cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(ResolveError::Client(IdentityClientError::Api(api_error))) => {
            eprintln!(
                "Snowstorm API error: message: {}, status: {}, code: {}",
                api_error.message,
                api_error.status.map(|s| s.to_string()).unwrap_or_default(),
                api_error.code.unwrap_or_default()
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
