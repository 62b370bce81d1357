pub mod analytics;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;

#[cfg(test)]
mod test_utils;

use clap::Parser;

use cli::Cli;
use config::AppConfig;
use db::AppState;

/// Entry point for the `lift-log` binary
pub async fn run() -> Result<(), cli::CliError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let args = Cli::parse();
  let mut config = AppConfig::from_env()?;
  if let Some(url) = &args.database_url {
    config.database_url = url.clone();
  }

  logging::init_logging(&config.log_filter);

  let db = db::initialize_db(&config.database_url).await?;
  let state = AppState { db, config };

  let output = cli::execute(args, &state).await;
  state.db.close().await;

  println!("{}", output?);
  Ok(())
}
