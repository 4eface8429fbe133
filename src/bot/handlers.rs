//! Telegram update handlers.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ChatAction;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info};

use super::HandlerResult;
use super::render::{self, ReplyPlan};
use crate::search::SubtitleSearch;

/// Commands understood by the bot.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,

    #[command(description = "show this help message.")]
    Help,
}

/// Welcome text sent in response to `/start`.
pub const WELCOME_TEXT: &str = "Welcome to the Subtitle Bot!\n\
    Send me the name of a movie or TV show and I will try to find the subtitles for it.";

/// Handles `/start` and `/help`.
pub async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }

    Ok(())
}

/// Handles a free-text message as a subtitle search query.
///
/// Send failures are logged and swallowed: the user simply receives
/// nothing, and the next query starts from a clean slate.
pub async fn search_handler(bot: Bot, msg: Message, search: Arc<SubtitleSearch>) -> HandlerResult {
    let Some(query) = msg.text() else {
        return Ok(());
    };

    info!("Searching subtitles for {:?}", query);

    // Typing indicator while the search runs. Not delivering it is
    // harmless.
    if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
        debug!("Failed to send typing action: {}", e);
    }

    let result = search.search(query).await;

    match render::render(&result) {
        ReplyPlan::NotFound { text } => {
            if let Err(e) = bot.send_message(msg.chat.id, text).await {
                error!("Failed to deliver reply to chat {}: {}", msg.chat.id, e);
            }
        }
        ReplyPlan::Found {
            heading,
            prompt,
            keyboard,
        } => {
            if let Err(e) = bot.send_message(msg.chat.id, heading).await {
                error!("Failed to deliver heading to chat {}: {}", msg.chat.id, e);
            }
            if let Err(e) = bot
                .send_message(msg.chat.id, prompt)
                .reply_markup(keyboard)
                .await
            {
                error!("Failed to deliver results to chat {}: {}", msg.chat.id, e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_command() {
        let cmd = Command::parse("/start", "subtitle_bot").unwrap();
        assert_eq!(cmd, Command::Start);
    }

    #[test]
    fn test_parse_help_command() {
        let cmd = Command::parse("/help", "subtitle_bot").unwrap();
        assert_eq!(cmd, Command::Help);
    }

    #[test]
    fn test_free_text_is_not_a_command() {
        assert!(Command::parse("the matrix", "subtitle_bot").is_err());
    }
}
