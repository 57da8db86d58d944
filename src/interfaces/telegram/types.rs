//! The subset of Bot API objects the bot reads.

use crate::application::service::{Inbound, Sender};
use serde::Deserialize;

/// Envelope around every Bot API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

impl Message {
    /// Text messages only; stickers, photos and the like yield `None`.
    pub fn to_inbound(&self) -> Option<Inbound> {
        let text = self.text.as_ref()?;
        let sender = match &self.from {
            Some(user) => Sender {
                id: user.id,
                username: user.username.clone(),
            },
            None => Sender {
                id: self.chat.id,
                username: None,
            },
        };
        Some(Inbound {
            sender,
            text: text.clone(),
        })
    }
}
