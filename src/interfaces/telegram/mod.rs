//! Telegram Bot API transport using long polling.

pub mod client;
pub mod poller;
pub mod types;

pub use client::TelegramClient;
pub use poller::Poller;
