// Draft assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config, resolve the Sleeper user
// 3. Load the rankings pool
// 4. Build the tracker and app state
// 5. Spawn the app loop, run the TUI until quit
// 6. Wait briefly for the app loop to wind down

use std::time::Duration;

use anyhow::{bail, Context};
use tokio::sync::mpsc;
use tracing::{error, info};

use draftline_core::config::{self, Config};
use draftline_core::rankings;
use draftline_core::recommend::metrics::RosterRequirements;
use draftline_sleeper::{DraftTracker, SleeperClient};
use draftline_tui::{app, tui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("draftline starting up");

    let mut config = config::load_config().context("failed to load configuration")?;
    let client = SleeperClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("failed to build Sleeper client")?;

    resolve_user_id(&mut config, &client).await?;
    if config.sleeper.league_id.is_empty() {
        bail!(missing_league_message(&config, &client).await);
    }
    config.validate().context("invalid configuration")?;
    info!(
        "Config loaded: league={}, refresh every {}s (auto {}), top {}",
        config.sleeper.league_id,
        config.refresh.interval_secs,
        config.refresh.auto_refresh,
        config.recommendations.top_n
    );

    let rankings_path = config.rankings_path();
    let pool = rankings::load_rankings(&rankings_path)
        .with_context(|| format!("failed to load rankings from {}", rankings_path.display()))?;

    let user_id = config.sleeper.user_id.clone().unwrap_or_default();
    let tracker = DraftTracker::new(client, config.sleeper.league_id.clone(), user_id);
    let app_state = app::AppState::new(
        tracker,
        pool,
        RosterRequirements::standard(),
        config.recommendations.top_n,
        &config.refresh,
    );

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(64);

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // Blocks until the user quits.
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    let _ = tokio::time::timeout(Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("draftline shut down cleanly");
    Ok(())
}

/// Fill in `user_id` from the configured username when only the name is set.
async fn resolve_user_id(config: &mut Config, client: &SleeperClient) -> anyhow::Result<()> {
    if config.sleeper.user_id.is_some() {
        return Ok(());
    }
    let Some(username) = config.sleeper.username.clone() else {
        // Let validation report the missing identity.
        return Ok(());
    };
    let user = match client.user(&username).await {
        Ok(user) => user,
        Err(e) if e.is_not_found() => bail!("Sleeper user '{}' does not exist", username),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to look up Sleeper user '{}'", username))
        }
    };
    info!("Resolved Sleeper user '{}' to {}", username, user.user_id);
    config.sleeper.user_id = Some(user.user_id);
    Ok(())
}

/// Error text for a missing league id, listing the user's leagues when they
/// can be fetched.
async fn missing_league_message(config: &Config, client: &SleeperClient) -> String {
    let mut message = format!(
        "no league id configured; set [sleeper] league_id in {} or {}",
        config.base_dir.join("config").join("league.toml").display(),
        config::ENV_LEAGUE_ID
    );

    let Some(user_id) = config.sleeper.user_id.as_deref() else {
        return message;
    };
    let season = config.sleeper.season();
    match client.user_leagues(user_id, &season).await {
        Ok(leagues) if !leagues.is_empty() => {
            message.push_str(&format!("\nYour {} leagues:", season));
            for league in &leagues {
                message.push_str(&format!(
                    "\n  {}  {}",
                    league.league_id,
                    league.display_name()
                ));
            }
        }
        Ok(_) => message.push_str(&format!("\nNo leagues found for {}.", season)),
        Err(e) => error!("Failed to list leagues: {}", e),
    }
    message
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draftline.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(
                "draftline=info,draftline_core=info,draftline_sleeper=info,draftline_tui=info,warn",
            )
        }))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
