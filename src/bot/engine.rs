use teloxide::types::ChatId;
use teloxide::types::InlineKeyboardMarkup;
use teloxide::types::MessageId;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::bot::Command;
use crate::bot::keyboards::Action;
use crate::bot::keyboards::main_menu_keyboard;
use crate::bot::keyboards::result_keyboard;
use crate::bot::state::ConversationState;
use crate::bot::state::ConversationStore;
use crate::convert;

pub const PROMPT_TEXT: &str = "Write a number";
pub const MENU_TEXT: &str = "Menu";
pub const ERROR_TEXT: &str = "Error happened, check your input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
  Text {
    chat_id: ChatId,
    sender_name: String,
    text: String,
    /// Set when the message opens with a bot command entity.
    is_command: bool,
  },
  Callback {
    chat_id: ChatId,
    message_id: MessageId,
    data: String,
  },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutboundAction {
  SendText {
    chat_id: ChatId,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
  },
  EditKeyboard {
    chat_id: ChatId,
    message_id: MessageId,
    keyboard: InlineKeyboardMarkup,
  },
}

impl OutboundAction {
  fn text(chat_id: ChatId, text: impl Into<String>) -> Self {
    OutboundAction::SendText {
      chat_id,
      text: text.into(),
      keyboard: None,
    }
  }

  fn text_with_keyboard(chat_id: ChatId, text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
    OutboundAction::SendText {
      chat_id,
      text: text.into(),
      keyboard: Some(keyboard),
    }
  }
}

/// Turns inbound chat events into the actions the gateway should perform.
pub struct ConversionBot {
  store: ConversationStore,
}

impl ConversionBot {
  pub fn new(store: ConversationStore) -> Self {
    Self { store }
  }

  pub async fn handle(&self, event: InboundEvent) -> anyhow::Result<Vec<OutboundAction>> {
    match event {
      InboundEvent::Text {
        chat_id,
        sender_name,
        text,
        is_command,
      } => {
        if is_command {
          self.handle_command(chat_id, &sender_name, &text).await
        } else {
          self.handle_text(chat_id, &text).await
        }
      },
      InboundEvent::Callback {
        chat_id,
        message_id,
        data,
      } => self.handle_callback(chat_id, message_id, &data).await,
    }
  }

  async fn handle_command(
    &self,
    chat_id: ChatId,
    sender_name: &str,
    text: &str,
  ) -> anyhow::Result<Vec<OutboundAction>> {
    let Some(command) = Command::from_text(text) else {
      debug!(chat_id = %chat_id, text, "ignoring unrecognized command");
      return Ok(Vec::new());
    };
    match command {
      Command::Start => {
        info!(chat_id = %chat_id, "received /start command");
        Ok(vec![welcome_message(chat_id, sender_name)])
      },
      Command::BinaryToDecimal => self.select_mode(chat_id, ConversationState::AwaitingBinaryInput).await,
      Command::DecimalToBinary => self.select_mode(chat_id, ConversationState::AwaitingDecimalInput).await,
    }
  }

  async fn handle_text(&self, chat_id: ChatId, text: &str) -> anyhow::Result<Vec<OutboundAction>> {
    let Some(state) = self.store.get(chat_id).await? else {
      debug!(chat_id = %chat_id, "idle chat sent free text, ignoring");
      return Ok(Vec::new());
    };
    Ok(vec![conversion_reply(chat_id, state, text)])
  }

  async fn handle_callback(
    &self,
    chat_id: ChatId,
    message_id: MessageId,
    data: &str,
  ) -> anyhow::Result<Vec<OutboundAction>> {
    let Some(action) = Action::from_token(data) else {
      debug!(chat_id = %chat_id, data, "ignoring unrecognized callback");
      return Ok(Vec::new());
    };

    match action {
      Action::BinaryToDecimal => self.select_mode(chat_id, ConversationState::AwaitingBinaryInput).await,
      Action::DecimalToBinary => self.select_mode(chat_id, ConversationState::AwaitingDecimalInput).await,
      Action::Menu => Ok(vec![OutboundAction::text_with_keyboard(
        chat_id,
        MENU_TEXT,
        main_menu_keyboard(),
      )]),
      // Swaps the markup of the message that carried the button, text untouched.
      Action::Back => Ok(vec![OutboundAction::EditKeyboard {
        chat_id,
        message_id,
        keyboard: main_menu_keyboard(),
      }]),
    }
  }

  async fn select_mode(&self, chat_id: ChatId, mode: ConversationState) -> anyhow::Result<Vec<OutboundAction>> {
    self.store.set(chat_id, mode).await?;
    info!(chat_id = %chat_id, ?mode, "conversion mode selected");
    Ok(vec![OutboundAction::text(chat_id, PROMPT_TEXT)])
  }
}

fn welcome_message(chat_id: ChatId, sender_name: &str) -> OutboundAction {
  OutboundAction::text_with_keyboard(
    chat_id,
    format!("Hello, {sender_name}! Let's get started converting numbers. HEHE"),
    main_menu_keyboard(),
  )
}

// The stored mode stays in place after a successful conversion.
fn conversion_reply(chat_id: ChatId, state: ConversationState, input: &str) -> OutboundAction {
  let converted = match state {
    ConversationState::AwaitingBinaryInput => convert::binary_to_decimal(input),
    ConversationState::AwaitingDecimalInput => convert::decimal_to_binary(input),
  };
  match converted {
    Ok(value) => {
      info!(chat_id = %chat_id, ?state, "number converted");
      OutboundAction::text_with_keyboard(chat_id, format!("Converted number: {value}"), result_keyboard())
    },
    Err(err) => {
      warn!(chat_id = %chat_id, ?state, error = %err, "failed to convert input");
      OutboundAction::text(chat_id, ERROR_TEXT)
    },
  }
}
