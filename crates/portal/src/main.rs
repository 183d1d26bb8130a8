use anyhow::{Context, Result};
use dotenv::dotenv;
use portal::state::AppState;
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    init_logger("portal", config.is_dev, config.enable_file_log);

    let state = AppState::new(config)
        .await
        .context("Failed to create AppState")?;

    let session = state
        .session
        .load_user()
        .await
        .context("Failed to restore session")?;

    let route = match state.session.landing_route().await? {
        Some(route) => route.to_string(),
        None => {
            state.guard.enforce("/");
            state.navigator.current()
        }
    };

    info!(
        "Session restored: authenticated={}, school={}",
        session.is_authenticated,
        state.session.selected_school().await?
    );

    println!("{route}");

    Ok(())
}
