use teloxide::dispatching::dialogue::InMemStorage;

pub mod commands;
pub mod engine;
pub mod gateway;
pub mod handlers;
pub mod keyboards;
pub mod state;

pub type HandlerResult = anyhow::Result<()>;
pub type DialogueStorage = InMemStorage<state::ConversationState>;

pub use commands::Command;
pub use engine::ConversionBot;
pub use handlers::build_schema;
pub use state::ConversationStore;
