use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;
use tracing::warn;

use crate::bot;
use crate::bot::Command;
use crate::bot::ConversationStore;
use crate::bot::ConversionBot;

pub struct App {
  bot: Bot,
  bot_username: Option<String>,
  handler: UpdateHandler<anyhow::Error>,
}

impl App {
  pub fn new(bot: Bot, bot_username: Option<String>) -> Self {
    let handler = bot::build_schema();
    Self {
      bot,
      bot_username,
      handler,
    }
  }

  pub async fn run(self) -> anyhow::Result<()> {
    let me = self.bot.get_me().await?;
    if let Some(name) = self.bot_username.as_deref()
      && !name.eq_ignore_ascii_case(me.username())
    {
      warn!(configured = name, reported = me.username(), "BOT_USERNAME differs from getMe");
    }
    info!(bot_name = me.username(), "bot identity resolved");

    if let Err(err) = self.bot.set_my_commands(Command::bot_commands()).await {
      warn!(error = %err, "failed to register bot commands");
    }

    let engine = Arc::new(ConversionBot::new(ConversationStore::new()));

    Dispatcher::builder(self.bot.clone(), self.handler)
      .dependencies(dptree::deps![engine])
      .error_handler(LoggingErrorHandler::with_custom_text("failed to handle update"))
      .enable_ctrlc_handler()
      .build()
      .dispatch()
      .await;

    Ok(())
  }
}
