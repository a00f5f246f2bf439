use teloxide::utils::command::BotCommands;

/// Typed commands. The derive only feeds the command list registered with
/// Telegram; incoming text is matched against [`Command::token`] exactly.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Available commands:")]
pub enum Command {
  /// Open the main menu
  Start,
  /// Convert a binary number to decimal
  BinaryToDecimal,
  /// Convert a decimal number to binary
  DecimalToBinary,
}

impl Command {
  pub const fn token(self) -> &'static str {
    match self {
      Command::Start => "/start",
      Command::BinaryToDecimal => "/binary_to_decimal",
      Command::DecimalToBinary => "/decimal_to_binary",
    }
  }

  pub fn from_text(text: &str) -> Option<Self> {
    [Command::Start, Command::BinaryToDecimal, Command::DecimalToBinary]
      .into_iter()
      .find(|command| command.token() == text)
  }
}
