use super::entry::Entry;

pub const NO_DATA_MESSAGE: &str = "📭 No data recorded yet.";

/// How amounts are rendered in text reports.
///
/// Integers only, grouped in threes, prefixed with a currency marker:
/// `Rp20,000`. Negative values keep the sign after the marker (`Rp-5,000`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rp".to_string(),
            separator: ',',
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            separator,
        }
    }

    pub fn format(&self, value: impl Into<i128>) -> String {
        let value = value.into();
        let digits = value.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.separator);
            }
            grouped.push(digit);
        }

        let sign = if value < 0 { "-" } else { "" };
        format!("{}{}{}", self.symbol, sign, grouped)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// 1-based position in insertion order.
    pub position: usize,
    pub label: String,
    pub amount: i64,
}

/// Tabular view over a ledger snapshot.
///
/// Never stored; rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub total: i128,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Folds entries into rows plus their total.
pub fn build_table(entries: &[Entry]) -> Report {
    let rows: Vec<ReportRow> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| ReportRow {
            position: idx + 1,
            label: entry.label().to_string(),
            amount: entry.amount().value(),
        })
        .collect();
    let total = rows.iter().map(|row| i128::from(row.amount)).sum();

    Report { rows, total }
}

/// Renders entries as a numbered, human-readable summary.
pub fn build_text(entries: &[Entry], currency: &CurrencyFormat) -> String {
    let report = build_table(entries);
    if report.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut text = String::from("📋 Income report:\n");
    for row in &report.rows {
        text.push_str(&format!(
            "{}. {} - {}\n",
            row.position,
            row.label,
            currency.format(row.amount)
        ));
    }
    text.push_str(&format!("\n💰 Total: {}", currency.format(report.total)));
    text
}
