use clap::Args;
use palindrome::error::AppError;
use palindrome::{run_check_action, CheckView, PalindromeChecker};
use std::io::{self, Stderr, Stdout, Write};
use std::process::ExitCode;
use std::sync::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const BUSY_NOTICE: &str = "Перевіряємо...";

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Text to check; quote it to keep spaces and punctuation
    pub(crate) text: String,
}

/// Terminal stand-in for the checker window: the busy notice and error notifications go
/// to one stream, result messages to the other.
pub(crate) struct ConsoleView<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
}

impl ConsoleView<Stdout, Stderr> {
    pub(crate) fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> ConsoleView<O, E> {
    pub(crate) fn new(out: O, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (O, E) {
        (
            self.out.into_inner().expect("console mutex poisoned"),
            self.err.into_inner().expect("console mutex poisoned"),
        )
    }
}

fn emit<W: Write>(stream: &Mutex<W>, text: &str) {
    let mut guard = stream.lock().expect("console mutex poisoned");
    if let Err(err) = guard.write_all(text.as_bytes()).and_then(|()| guard.flush()) {
        debug!(error = %err, "console write failed");
    }
}

impl<O, E> CheckView for ConsoleView<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    fn show_busy(&self) {
        emit(&self.err, BUSY_NOTICE);
    }

    fn hide_busy(&self) {
        let blank = " ".repeat(BUSY_NOTICE.chars().count());
        emit(&self.err, &format!("\r{blank}\r"));
    }

    fn show_result(&self, message: &str) {
        emit(&self.out, &format!("{message}\n"));
    }

    fn show_error(&self, title: &str, message: &str) {
        emit(&self.err, &format!("{title}: {message}\n"));
    }
}

/// One-shot check. Invalid input has already been reported through the view, so it only
/// shows up here as a failing exit code.
pub(crate) async fn run_check(args: CheckArgs) -> ExitCode {
    let view = ConsoleView::stdio();
    match run_check_action(&PalindromeChecker::new(), &view, &args.text).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

pub(crate) async fn run_interactive() -> Result<(), AppError> {
    let view = ConsoleView::stdio();
    let stdin = BufReader::new(tokio::io::stdin());
    let checked = check_lines(stdin, &view, true).await?;
    info!(checked, "interactive session finished");
    Ok(())
}

/// Runs one check action per input line until EOF and returns how many lines were
/// checked. Rejected lines are reported and the session continues.
pub(crate) async fn check_lines<R, V>(reader: R, view: &V, prompt: bool) -> Result<usize, AppError>
where
    R: AsyncBufRead + Unpin,
    V: CheckView + ?Sized,
{
    let checker = PalindromeChecker::new();
    let mut lines = reader.lines();
    let mut checked = 0;

    loop {
        if prompt {
            eprint!("> ");
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim_end_matches('\r');
        if run_check_action(&checker, view, line).await.is_ok() {
            checked += 1;
        }
    }

    Ok(checked)
}
