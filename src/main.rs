use std::process::ExitCode;

use clap::Parser;
use quotepost::cli::{CliOptions, parse_error_status};
use quotepost::config::{Config, setup_logging};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match CliOptions::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_error_status(&err));
        }
    };

    if setup_logging(cli.debug).is_err() {
        return ExitCode::FAILURE;
    }

    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = quotepost::pipeline::run(&config).await {
        error!("Error in main process: {}", err);
        return ExitCode::FAILURE;
    }

    info!("Successfully completed quote post!");
    ExitCode::SUCCESS
}
