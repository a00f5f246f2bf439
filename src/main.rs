mod app;
mod bot;
mod config;
mod convert;
mod telemetry;

use anyhow::Result;
use teloxide::prelude::Bot;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
  telemetry::init()?;
  let config = config::Config::from_env()?;
  info!(username_configured = config.bot_username.is_some(), "starting bot");

  let bot = Bot::new(config.bot_token);
  let app = app::App::new(bot, config.bot_username);
  app.run().await
}
