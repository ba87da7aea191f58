use async_trait::async_trait;
use frankenstein::{AsyncApi, AsyncTelegramApi, ChatId, ParseMode, SendMessageParams};

use crate::client::Notifier;
use crate::error::Result;

pub struct Client {
    api: AsyncApi,
    chat_id: ChatId,
}

impl Client {
    pub fn new(token: &str, channel: &str) -> Self {
        Self {
            api: AsyncApi::new(token),
            chat_id: chat_id(channel),
        }
    }
}

#[async_trait]
impl Notifier for Client {
    async fn notify(&self, text: &str) -> Result<()> {
        let params = SendMessageParams::builder()
            .chat_id(self.chat_id.clone())
            .text(text)
            .parse_mode(ParseMode::Html)
            .build();

        self.api.send_message(&params).await?;

        Ok(())
    }
}

/// Numeric ids go out as integers, anything else as `@username`.
fn chat_id(channel: &str) -> ChatId {
    let channel = channel.trim();
    match channel.parse::<i64>() {
        Ok(id) => ChatId::Integer(id),
        Err(_) => ChatId::String(channel.to_string()),
    }
}
