use crate::domain::entry::{AmountPolicy, DEFAULT_DELIMITER, EntryParser};
use crate::domain::report::CurrencyFormat;
use crate::error::{Result, TallyError};
use clap::{Args, ValueEnum};
use std::time::Duration;

/// Command-line names for the accepted-amount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Any integer, including negatives
    Any,
    /// Zero or greater
    NonNegative,
    /// Strictly greater than zero
    Positive,
}

impl From<PolicyArg> for AmountPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Any => AmountPolicy::Any,
            PolicyArg::NonNegative => AmountPolicy::NonNegative,
            PolicyArg::Positive => AmountPolicy::Positive,
        }
    }
}

/// How entries are parsed and reported. Shared by every transport.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Character separating the item label from its price
    #[arg(long, env = "TALLYBOT_DELIMITER", default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Which prices are accepted
    #[arg(long, env = "TALLYBOT_AMOUNT_POLICY", value_enum, default_value_t = PolicyArg::Any)]
    pub amount_policy: PolicyArg,

    /// Currency marker printed before amounts
    #[arg(long, env = "TALLYBOT_CURRENCY", default_value = "Rp")]
    pub currency: String,

    /// File name of the exported spreadsheet
    #[arg(long, env = "TALLYBOT_EXPORT_FILE", default_value = "income_report.csv")]
    pub export_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            amount_policy: PolicyArg::Any,
            currency: "Rp".to_string(),
            export_file_name: "income_report.csv".to_string(),
        }
    }
}

impl Settings {
    pub fn parser(&self) -> EntryParser {
        EntryParser::new(self.delimiter, self.amount_policy.into())
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency.clone(), ',')
    }
}

/// Connection settings for the Telegram Bot API.
#[derive(Args, Debug, Clone)]
pub struct TelegramSettings {
    /// Bot token issued by @BotFather
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the Bot API
    #[arg(long, env = "TELEGRAM_API_URL", default_value = "https://api.telegram.org")]
    pub api_url: String,

    /// Long-poll timeout in seconds
    #[arg(long, env = "TALLYBOT_POLL_TIMEOUT", default_value_t = 30)]
    pub poll_timeout: u64,
}

impl TelegramSettings {
    /// Returns the token, failing when none was configured.
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| TallyError::ConfigError("BOT_TOKEN is not set".to_string()))
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout)
    }
}
