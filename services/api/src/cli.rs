use crate::console::{run_check, run_interactive, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use palindrome::config::AppConfig;
use palindrome::error::AppError;
use palindrome::telemetry;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "Palindrome Checker",
    about = "Check whether text reads the same both ways, from the terminal or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Check a single piece of text and print the verdict
    Check(CheckArgs),
    /// Read lines from standard input and check each one until EOF
    Interactive,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await.map(|()| ExitCode::SUCCESS),
        Command::Check(args) => Ok(run_check(args).await),
        Command::Interactive => run_interactive().await.map(|()| ExitCode::SUCCESS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["palindrome-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_text_and_serve_overrides() {
        let cli = Cli::try_parse_from(["palindrome-api", "check", "Рівень"]).expect("parses");
        match cli.command {
            Some(Command::Check(args)) => assert_eq!(args.text, "Рівень"),
            other => panic!("expected check command, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["palindrome-api", "serve", "--port", "8081"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8081));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }

    #[test]
    fn check_accepts_empty_text_for_validation() {
        let cli = Cli::try_parse_from(["palindrome-api", "check", ""]).expect("parses");
        assert!(matches!(cli.command, Some(Command::Check(ref args)) if args.text.is_empty()));
    }
}
