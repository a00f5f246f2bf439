use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use teloxide::types::Message;
use teloxide::types::MessageEntityKind;
use tracing::info;
use tracing::instrument;
use tracing::warn;

use crate::bot::HandlerResult;
use crate::bot::engine::ConversionBot;
use crate::bot::engine::InboundEvent;
use crate::bot::gateway::deliver;

type SharedEngine = Arc<ConversionBot>;

const FALLBACK_SENDER_NAME: &str = "there";

pub fn build_schema() -> UpdateHandler<anyhow::Error> {
  let message_handler = Update::filter_message().endpoint(handle_message);
  let callback_handler = Update::filter_callback_query().endpoint(handle_callback_query);

  dptree::entry().branch(message_handler).branch(callback_handler)
}

#[instrument(skip(bot, engine, msg), fields(chat_id = %msg.chat.id))]
async fn handle_message(bot: Bot, engine: SharedEngine, msg: Message) -> HandlerResult {
  let Some(text) = msg.text() else {
    return Ok(());
  };
  let sender_name = msg
    .from
    .as_ref()
    .map(|user| user.first_name.clone())
    .unwrap_or_else(|| FALLBACK_SENDER_NAME.to_string());

  let event = InboundEvent::Text {
    chat_id: msg.chat.id,
    sender_name,
    text: text.to_owned(),
    is_command: starts_with_command(&msg),
  };
  let actions = engine.handle(event).await?;
  deliver(&bot, actions).await
}

fn starts_with_command(msg: &Message) -> bool {
  msg
    .entities()
    .is_some_and(|entities| {
      entities
        .iter()
        .any(|entity| entity.offset == 0 && entity.kind == MessageEntityKind::BotCommand)
    })
}

#[instrument(skip(bot, engine, query))]
async fn handle_callback_query(bot: Bot, engine: SharedEngine, query: CallbackQuery) -> HandlerResult {
  let user_id = query.from.id.0 as i64;
  let callback_data = query.data.as_deref().unwrap_or("<empty>");
  let Some((chat_id, message_id)) = query.message.as_ref().map(|message| (message.chat().id, message.id())) else {
    warn!(user_id, callback = callback_data, "callback query without message context");
    bot.answer_callback_query(query.id).await?;
    return Ok(());
  };
  info!(user_id, chat_id = %chat_id, callback = callback_data, "handling callback query");

  let event = InboundEvent::Callback {
    chat_id,
    message_id,
    data: query.data.clone().unwrap_or_default(),
  };
  let actions = engine.handle(event).await?;
  let delivered = deliver(&bot, actions).await;
  bot.answer_callback_query(query.id).await?;
  delivered
}
