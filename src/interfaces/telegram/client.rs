use super::types::{ApiResponse, Update};
use crate::error::{Result, TallyError};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Extra slack on top of the long-poll timeout before the HTTP request
/// itself gives up.
const REQUEST_SLACK: Duration = Duration::from_secs(10);

/// Longest `sendMessage` text the Bot API accepts, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Splits `text` into pieces of at most `limit` UTF-16 code units.
///
/// Breaks fall after a newline where possible; only a single line longer
/// than `limit` is cut mid-line. Concatenating the pieces gives back `text`.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len: usize = line.chars().map(char::len_utf16).sum();
        if current_len + line_len > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > limit {
            for c in line.chars() {
                if current_len + c.len_utf16() > limit {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(c);
                current_len += c.len_utf16();
            }
        } else {
            current.push_str(line);
            current_len += line_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Minimal Bot API client: long polling, text replies and file uploads.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(api_url: &str, token: &str, poll_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(poll_timeout + REQUEST_SLACK)
            .build()
            .map_err(|e| TallyError::HttpError(e.without_url()))?;
        Ok(Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// Sends a request and unwraps the `ApiResponse` envelope.
    ///
    /// URLs are stripped from transport errors since they embed the token.
    async fn call<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response: ApiResponse<T> = request
            .send()
            .await
            .map_err(|e| TallyError::HttpError(e.without_url()))?
            .json()
            .await
            .map_err(|e| TallyError::HttpError(e.without_url()))?;

        if !response.ok {
            return Err(TallyError::TelegramError(
                response
                    .description
                    .unwrap_or_else(|| "request failed without description".to_string()),
            ));
        }
        response
            .result
            .ok_or_else(|| TallyError::TelegramError("response carried no result".to_string()))
    }

    /// Long-polls for new updates starting at `offset`.
    pub async fn get_updates(&self, offset: Option<i64>, timeout: Duration) -> Result<Vec<Update>> {
        let body = json!({
            "offset": offset,
            "timeout": timeout.as_secs(),
            "allowed_updates": ["message"],
        });
        self.call(self.http.post(self.method_url("getUpdates")).json(&body))
            .await
    }

    /// Sends `text`, split over several messages when it exceeds
    /// `MAX_MESSAGE_LEN`. Whitespace-only pieces are skipped since the API
    /// rejects empty text.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            if chunk.trim().is_empty() {
                continue;
            }
            let body = json!({ "chat_id": chat_id, "text": chunk });
            self.call::<serde_json::Value>(
                self.http.post(self.method_url("sendMessage")).json(&body),
            )
            .await?;
        }
        Ok(())
    }

    pub async fn send_document(
        &self,
        chat_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<()> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| TallyError::HttpError(e.without_url()))?;
        let mut form = Form::new()
            .text("chat_id", chat_id.to_string())
            .part("document", part);
        if let Some(caption) = caption {
            form = form.text("caption", caption.to_string());
        }

        self.call::<serde_json::Value>(self.http.post(self.method_url("sendDocument")).multipart(form))
            .await?;
        Ok(())
    }
}
