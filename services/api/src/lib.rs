mod cli;
mod console;
mod infra;
mod routes;
mod server;

use palindrome::error::AppError;
use std::process::ExitCode;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
