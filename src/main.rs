//! Club Attendance console
//!
//! Main application entry point

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

use club_attendance::{
    config::Settings,
    handlers::handle_line,
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate().context("Invalid configuration")?;

    // Initialize logging; the guard flushes the file writer on drop
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", club_attendance::info());
    info!(base_url = %settings.api.base_url, "Using attendance API");

    let mut ctx = AppContext::new(settings)?;
    ctx.start().await?;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{}\nType 'help' for commands.\n", club_attendance::info()).as_bytes())
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match handle_line(&mut ctx, &line).await {
            Ok(reply) => {
                stdout.write_all(reply.text.as_bytes()).await?;
                if !reply.text.ends_with('\n') {
                    stdout.write_all(b"\n").await?;
                }
                if reply.quit {
                    break;
                }
            }
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "Command failed");
                stdout.write_all(format!("Error: {}\n", e).as_bytes()).await?;
            }
            Err(e) => {
                error!(error = %e, severity = %e.severity(), "Command failed");
                stdout.write_all(format!("Error: {}\n", e).as_bytes()).await?;
            }
        }
    }

    info!("Club attendance console has been shut down.");
    Ok(())
}
