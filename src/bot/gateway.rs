use teloxide::prelude::*;
use tracing::debug;

use crate::bot::HandlerResult;
use crate::bot::engine::OutboundAction;

/// Performs the actions in order, stopping at the first failed API call.
pub async fn deliver(bot: &Bot, actions: Vec<OutboundAction>) -> HandlerResult {
  for action in actions {
    match action {
      OutboundAction::SendText {
        chat_id,
        text,
        keyboard,
      } => {
        let mut request = bot.send_message(chat_id, text);
        if let Some(keyboard) = keyboard {
          request = request.reply_markup(keyboard);
        }
        let sent = request.await?;
        debug!(chat_id = %chat_id, message_id = sent.id.0, "message sent");
      },
      OutboundAction::EditKeyboard {
        chat_id,
        message_id,
        keyboard,
      } => {
        bot
          .edit_message_reply_markup(chat_id, message_id)
          .reply_markup(keyboard)
          .await?;
        debug!(chat_id = %chat_id, message_id = message_id.0, "message keyboard replaced");
      },
    }
  }
  Ok(())
}
