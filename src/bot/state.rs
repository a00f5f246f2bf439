use std::sync::Arc;

use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dispatching::dialogue::InMemStorageError;
use teloxide::dispatching::dialogue::Storage;
use teloxide::types::ChatId;

use crate::bot::DialogueStorage;

/// Pending conversion for a chat. A chat with no entry is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
  AwaitingBinaryInput,
  AwaitingDecimalInput,
}

/// Per-chat conversion mode, shared by every concurrent handler.
#[derive(Clone)]
pub struct ConversationStore {
  storage: Arc<DialogueStorage>,
}

impl ConversationStore {
  pub fn new() -> Self {
    Self {
      storage: InMemStorage::new(),
    }
  }

  pub async fn get(&self, chat_id: ChatId) -> Result<Option<ConversationState>, InMemStorageError> {
    Arc::clone(&self.storage).get_dialogue(chat_id).await
  }

  /// Inserts or overwrites the mode for `chat_id`.
  pub async fn set(&self, chat_id: ChatId, state: ConversationState) -> Result<(), InMemStorageError> {
    Arc::clone(&self.storage).update_dialogue(chat_id, state).await
  }
}

impl Default for ConversationStore {
  fn default() -> Self {
    Self::new()
  }
}
