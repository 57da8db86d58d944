use super::command::Command;
use crate::config::Settings;
use crate::domain::entry::{EntryParser, ParseError};
use crate::domain::ports::{LedgerStoreBox, ReportSerializerBox};
use crate::domain::report::{self, CurrencyFormat};
use crate::error::Result;
use tracing::{debug, info};

pub const HELP_MESSAGE: &str = "Hi! I am the tally bot.\n\
Send entries in the format: Item name - Price\n\
Example: Nasi Goreng - 15000\n\n\
/report shows everything recorded so far.\n\
/export sends the same data as a spreadsheet.";

pub const EXPORT_EMPTY_MESSAGE: &str = "📭 No data to export yet.";

/// Who sent an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.username {
            Some(username) => write!(f, "@{}", username),
            None => write!(f, "{}", self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Document {
        file_name: String,
        bytes: Vec<u8>,
        caption: Option<String>,
    },
}

/// Connects inbound messages to the ledger and the report builder.
///
/// One service owns one ledger; every sender records into it. Exported
/// documents are produced by the injected serializer.
pub struct TallyService {
    ledger: LedgerStoreBox,
    serializer: ReportSerializerBox,
    parser: EntryParser,
    currency: CurrencyFormat,
    export_file_name: String,
}

impl TallyService {
    pub fn new(
        ledger: LedgerStoreBox,
        serializer: ReportSerializerBox,
        settings: &Settings,
    ) -> Self {
        Self {
            ledger,
            serializer,
            parser: settings.parser(),
            currency: settings.currency_format(),
            export_file_name: settings.export_file_name.clone(),
        }
    }

    /// Handles one inbound message. `None` means nothing should be sent back.
    pub async fn handle(&self, inbound: &Inbound) -> Result<Option<Reply>> {
        let reply = match Command::route(&inbound.text) {
            Command::Help => Reply::Text(HELP_MESSAGE.to_string()),
            Command::Report => Reply::Text(self.report().await),
            Command::Export => self.export().await?,
            Command::Record(text) => Reply::Text(self.record(&inbound.sender, text).await),
            Command::Unknown(name) => {
                debug!(sender = %inbound.sender, command = name, "ignoring unknown command");
                return Ok(None);
            }
        };
        Ok(Some(reply))
    }

    /// Parses and appends one entry, returning the acknowledgement or a
    /// corrective message.
    pub async fn record(&self, sender: &Sender, text: &str) -> String {
        match self.parser.parse(text) {
            Ok(entry) => {
                info!(
                    "Input from {}: {} - {}",
                    sender,
                    entry.label(),
                    entry.amount()
                );
                let ack = format!(
                    "✅ Saved: {} - {}",
                    entry.label(),
                    self.currency.format(entry.amount().value())
                );
                self.ledger.append(entry).await;
                ack
            }
            Err(err) => {
                debug!(%sender, error = %err, "rejected entry");
                self.correction(&err)
            }
        }
    }

    pub async fn report(&self) -> String {
        let snapshot = self.ledger.snapshot().await;
        report::build_text(&snapshot, &self.currency)
    }

    pub async fn export(&self) -> Result<Reply> {
        if self.ledger.is_empty().await {
            return Ok(Reply::Text(EXPORT_EMPTY_MESSAGE.to_string()));
        }

        let snapshot = self.ledger.snapshot().await;
        let table = report::build_table(&snapshot);
        let bytes = self.serializer.serialize(&table)?;
        Ok(Reply::Document {
            file_name: self.export_file_name.clone(),
            bytes,
            caption: Some(format!(
                "{} entries, total {}",
                table.rows.len(),
                self.currency.format(table.total)
            )),
        })
    }

    fn correction(&self, err: &ParseError) -> String {
        let delimiter = self.parser.delimiter();
        match err {
            ParseError::MalformedInput | ParseError::EmptyLabel => format!(
                "⚠️ Unrecognized format. Use: Item name {} Price",
                delimiter
            ),
            ParseError::InvalidAmount(_) => format!(
                "⚠️ Invalid price. Use a number.\nExample: Nasi Goreng {} 15000",
                delimiter
            ),
            ParseError::RejectedAmount { policy, .. } => {
                format!("⚠️ Price not accepted: it must be {}.", policy)
            }
        }
    }
}
