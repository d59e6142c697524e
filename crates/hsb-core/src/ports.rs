use async_trait::async_trait;
use serde_json::Value;

use crate::{domain::ChatId, Result};

/// Hexagonal port for the homework-status API.
///
/// The Practicum HTTP adapter is the real implementation; tests supply
/// scripted fakes.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetch all status changes since `from_date` (Unix seconds) as the raw
    /// decoded JSON payload. Shape checking happens in the core, not here.
    async fn get_api_answer(&self, from_date: i64) -> Result<Value>;
}

/// Hexagonal port for outbound notifications.
///
/// Telegram is the first implementation; the shape is a single plain-text
/// send so other messengers can fit behind it.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
