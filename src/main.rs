// Main entry point
use callerid::domain::model::CallerRecord;
use callerid::infrastructure::config::{self, Logging};
use callerid::interfaces::cli::Cli;
use callerid::interfaces::session::{self, SessionEnd};
use callerid::presentation::card::format_record;
use callerid::presentation::status::format_status;
use callerid::presentation::theme::Theme;
use callerid::state::AppState;
use clap::Parser;
use colored::Colorize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    // Resolves only on Ctrl-C; a failed listener never fires
    let shutdown = async move {
        if shutdown_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let cli = Cli::parse();
    let mut config = config::load_config()?;

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    // Command line overrides
    if let Some(timeout_ms) = cli.timeout {
        config.timeout_ms = timeout_ms;
    }
    if cli.lookup_contacts {
        config.lookup_known_contacts = true;
    }
    let config = config.normalize();

    let state = AppState::new(config);

    if cli.status {
        print!("{}", format_status(&state));
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or(state.config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if cli.interactive {
        let lines = session::spawn_stdin_reader();
        let mut stdout = std::io::stdout();
        let end = session::run_session(&state, &theme, cli.json, lines, shutdown, &mut stdout)
            .await?;
        if end == SessionEnd::Interrupted {
            eprintln!("\nInterrupted, exiting.");
        }
        return Ok(());
    }

    if cli.numbers.is_empty() {
        eprintln!("{}", "Please provide a phone number".red());
        std::process::exit(1);
    }

    let Some(records) =
        session::or_shutdown(state.resolver.resolve_many(&cli.numbers), shutdown).await
    else {
        eprintln!("\nInterrupted, exiting.");
        return Ok(());
    };

    if cli.json {
        if let [record] = records.as_slice() {
            println!("{}", serde_json::to_string_pretty(record)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    } else {
        for record in &records {
            print_record(record, &theme, state.config.enable_emoji);
        }
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_record(record: &CallerRecord, theme: &Theme, enable_emoji: bool) {
    print!("{}", format_record(record, theme, enable_emoji));
}
