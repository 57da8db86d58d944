use super::client::TelegramClient;
use super::types::Update;
use crate::application::service::{Reply, TallyService};
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Long-polling loop feeding Telegram updates into a `TallyService`.
///
/// Updates are handled one at a time in `update_id` order, so entries land
/// in the ledger in the order users sent them.
pub struct Poller {
    client: TelegramClient,
    service: Arc<TallyService>,
    timeout: Duration,
    offset: Option<i64>,
}

impl Poller {
    pub fn new(client: TelegramClient, service: Arc<TallyService>, timeout: Duration) -> Self {
        Self {
            client,
            service,
            timeout,
            offset: None,
        }
    }

    /// Polls until Ctrl-C. Transport failures are logged and retried.
    pub async fn run(&mut self) -> Result<()> {
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        info!("Bot is running");
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping poller");
                    return Ok(());
                }
                result = self.client.get_updates(self.offset, self.timeout) => match result {
                    Ok(updates) => {
                        for update in updates {
                            self.dispatch(update).await;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "getUpdates failed, retrying in {:?}", RETRY_DELAY);
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
            }
        }
    }

    async fn dispatch(&mut self, update: Update) {
        self.offset = Some(update.update_id + 1);

        let Some(message) = update.message else {
            return;
        };
        let Some(inbound) = message.to_inbound() else {
            return;
        };

        let reply = match self.service.handle(&inbound).await {
            Ok(Some(reply)) => reply,
            Ok(None) => return,
            Err(err) => {
                warn!(error = %err, update_id = update.update_id, "failed to handle message");
                return;
            }
        };

        if let Err(err) = self.send(message.chat.id, reply).await {
            warn!(error = %err, chat_id = message.chat.id, "failed to send reply");
        }
    }

    async fn send(&self, chat_id: i64, reply: Reply) -> Result<()> {
        match reply {
            Reply::Text(text) => self.client.send_message(chat_id, &text).await,
            Reply::Document {
                file_name,
                bytes,
                caption,
            } => {
                self.client
                    .send_document(chat_id, &file_name, bytes, caption.as_deref())
                    .await
            }
        }
    }
}
