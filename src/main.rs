use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hostel_desk::api;
use hostel_desk::config::Config;
use hostel_desk::portal::Portal;

/// Hostel request desk: reads one JSON request per line and answers on stdout.
#[derive(Debug, Parser)]
#[command(name = "hostel-desk", version, about)]
struct Cli {
    /// Read requests from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Simulated round-trip delay for submit, login and register
    #[arg(long, env = "HOSTEL_SUBMIT_DELAY_MS")]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("HOSTEL_LOG").unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut cfg = Config::load();
    if let Some(ms) = cli.delay_ms {
        cfg.submit_delay = Duration::from_millis(ms);
    }
    tracing::info!(
        delay_ms = cfg.submit_delay.as_millis(),
        admin = %cfg.admin.email,
        student = %cfg.student.email,
        "desk starting"
    );

    let portal = Portal::new(cfg);

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match cli.script {
        Some(ref path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let mut lines = input.lines();
    let mut stdout = tokio::io::stdout();

    // Signal watcher: abort pending forms, then stop reading
    let (shutdown_tx, mut shutdown_rx) = watch::channel(());
    let signal_portal = portal.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_portal.shutdown();
        let _ = shutdown_tx.send(());
    });

    let mut seq: u64 = 0;
    loop {
        let line = tokio::select! {
            _ = shutdown_rx.changed() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        seq += 1;
        let response = api::handle_line(&portal, seq, line).await;
        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    portal.shutdown();
    tracing::info!(requests = seq, "desk stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
