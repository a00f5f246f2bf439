use std::env;

use anyhow::Context;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
  pub bot_token: String,
  pub bot_username: Option<String>,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let bot_token = env::var("BOT_TOKEN")
      .or_else(|_| env::var("TELOXIDE_TOKEN"))
      .context("BOT_TOKEN or TELOXIDE_TOKEN must be set")?;
    let bot_username = env::var("BOT_USERNAME").ok().and_then(|raw| parse_username(&raw));
    Ok(Self {
      bot_token,
      bot_username,
    })
  }
}

fn parse_username(raw: &str) -> Option<String> {
  let trimmed = raw.trim().trim_start_matches('@');
  if trimmed.is_empty() {
    return None;
  }
  Some(trimmed.to_string())
}
