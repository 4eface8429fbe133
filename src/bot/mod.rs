//! Telegram dispatcher wiring.
//!
//! Owns the long-polling loop and routes updates: `/start` and `/help`
//! to the command handler, any other text message to the subtitle
//! search handler.

mod handlers;
mod render;

use std::sync::Arc;

use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use tracing::warn;

pub use handlers::{Command, WELCOME_TEXT, command_handler, search_handler};
pub use render::{ReplyPlan, render};

use crate::search::SubtitleSearch;

/// Result type shared by all update handlers.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Runs the bot until the process is stopped.
///
/// The search service is shared immutably across handler invocations;
/// each inbound message runs one fetch-parse-respond sequence.
pub async fn run(bot: Bot, search: Arc<SubtitleSearch>) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(search_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![search])
        .default_handler(|update| async move {
            warn!("Unhandled update: {:?}", update);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error while handling update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
