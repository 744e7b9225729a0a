// Interactive session: one number per line over a shared cache
use crate::domain::error::CallerIdError;
use crate::presentation::card::format_record;
use crate::presentation::status::format_status;
use crate::presentation::theme::Theme;
use crate::state::AppState;
use colored::Colorize;
use std::future::Future;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `:quit` was entered
    Quit,
    /// Input closed
    EndOfInput,
    /// Shutdown signal fired
    Interrupted,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Quit,
    Clear,
    Status,
    Resolve(&'a str),
}

pub fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "" => Command::Empty,
        ":quit" | ":q" => Command::Quit,
        ":clear" => Command::Clear,
        ":status" => Command::Status,
        number => Command::Resolve(number),
    }
}

/// Read stdin lines on a detached OS thread. A pending read never holds up
/// runtime shutdown.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read stdin");
                    break;
                }
            }
        }
    });
    rx
}

/// Run `fut` unless `shutdown` completes first.
pub async fn or_shutdown<F, S>(fut: F, shutdown: S) -> Option<F::Output>
where
    F: Future,
    S: Future<Output = ()>,
{
    tokio::select! {
        output = fut => Some(output),
        _ = shutdown => None,
    }
}

pub async fn run_session<W, S>(
    state: &AppState,
    theme: &Theme,
    json: bool,
    mut lines: mpsc::Receiver<String>,
    shutdown: S,
    out: &mut W,
) -> Result<SessionEnd, CallerIdError>
where
    W: Write,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            _ = &mut shutdown => return Ok(SessionEnd::Interrupted),
            line = lines.recv() => match line {
                Some(line) => line,
                None => return Ok(SessionEnd::EndOfInput),
            },
        };

        match parse_command(&line) {
            Command::Empty => continue,
            Command::Quit => return Ok(SessionEnd::Quit),
            Command::Clear => {
                state.resolver.clear_cache();
                writeln!(out, "{}", "Cache cleared".green())?;
            }
            Command::Status => write!(out, "{}", format_status(state))?,
            Command::Resolve(number) => {
                let record = tokio::select! {
                    _ = &mut shutdown => return Ok(SessionEnd::Interrupted),
                    record = state.resolver.resolve(number) => record,
                };
                if json {
                    writeln!(out, "{}", serde_json::to_string(&record)?)?;
                } else {
                    write!(
                        out,
                        "{}",
                        format_record(&record, theme, state.config.enable_emoji)
                    )?;
                }
            }
        }
        out.flush()?;
    }
}
