use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
  match lift_log_lib::run().await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}
