use teloxide::types::InlineKeyboardButton;
use teloxide::types::InlineKeyboardMarkup;

/// Callback tokens carried by inline buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  BinaryToDecimal,
  DecimalToBinary,
  Menu,
  Back,
}

impl Action {
  pub const fn token(self) -> &'static str {
    match self {
      Action::BinaryToDecimal => "/binary_to_decimal",
      Action::DecimalToBinary => "/decimal_to_binary",
      Action::Menu => "/menu",
      Action::Back => "/back",
    }
  }

  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "/binary_to_decimal" => Some(Action::BinaryToDecimal),
      "/decimal_to_binary" => Some(Action::DecimalToBinary),
      "/menu" => Some(Action::Menu),
      "/back" => Some(Action::Back),
      _ => None,
    }
  }
}

fn button(label: &str, action: Action) -> InlineKeyboardButton {
  InlineKeyboardButton::callback(label.to_string(), action.token().to_string())
}

pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
  InlineKeyboardMarkup::new(vec![vec![
    button("Binary to Decimal", Action::BinaryToDecimal),
    button("Decimal to Binary", Action::DecimalToBinary),
  ]])
}

pub fn result_keyboard() -> InlineKeyboardMarkup {
  InlineKeyboardMarkup::new(vec![vec![button("Back", Action::Back)]])
}
