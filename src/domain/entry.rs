use std::fmt;
use thiserror::Error;

/// The delimiter separating a label from its amount in a recorded line.
pub const DEFAULT_DELIMITER: char = '-';

/// A recorded price in whole currency units.
///
/// Amounts are integers; there is no fractional part in what users report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which parsed amounts are accepted into the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountPolicy {
    /// Any integer, including negatives.
    #[default]
    Any,
    /// Zero or greater.
    NonNegative,
    /// Strictly greater than zero.
    Positive,
}

impl AmountPolicy {
    pub fn accepts(&self, amount: Amount) -> bool {
        match self {
            AmountPolicy::Any => true,
            AmountPolicy::NonNegative => amount.value() >= 0,
            AmountPolicy::Positive => amount.value() > 0,
        }
    }
}

impl fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AmountPolicy::Any => "any",
            AmountPolicy::NonNegative => "non-negative",
            AmountPolicy::Positive => "positive",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing delimiter between label and amount")]
    MalformedInput,
    #[error("label is empty")]
    EmptyLabel,
    #[error("amount {0:?} is not an integer")]
    InvalidAmount(String),
    #[error("amount {amount} is not allowed by the {policy} policy")]
    RejectedAmount { amount: Amount, policy: AmountPolicy },
}

/// One recorded (label, amount) pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    label: String,
    amount: Amount,
}

impl Entry {
    /// Builds an entry, trimming the label.
    pub fn new(label: impl AsRef<str>, amount: i64) -> Result<Self, ParseError> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(ParseError::EmptyLabel);
        }
        Ok(Self {
            label: label.to_string(),
            amount: Amount::new(amount),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Turns raw message text into validated entries.
///
/// Only the first delimiter splits the line. Anything after it, further
/// delimiters included, must parse as a base-10 integer.
#[derive(Debug, Clone, Copy)]
pub struct EntryParser {
    delimiter: char,
    policy: AmountPolicy,
}

impl Default for EntryParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, AmountPolicy::default())
    }
}

impl EntryParser {
    pub fn new(delimiter: char, policy: AmountPolicy) -> Self {
        Self { delimiter, policy }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    pub fn parse(&self, raw: &str) -> Result<Entry, ParseError> {
        let (label, amount_text) = raw
            .trim()
            .split_once(self.delimiter)
            .ok_or(ParseError::MalformedInput)?;

        let label = label.trim();
        if label.is_empty() {
            return Err(ParseError::EmptyLabel);
        }

        let amount_text = amount_text.trim();
        let amount = amount_text
            .parse::<i64>()
            .map(Amount::new)
            .map_err(|_| ParseError::InvalidAmount(amount_text.to_string()))?;

        if !self.policy.accepts(amount) {
            return Err(ParseError::RejectedAmount {
                amount,
                policy: self.policy,
            });
        }

        Entry::new(label, amount.value())
    }
}

/// Parses with the default delimiter and an accept-all amount policy.
pub fn parse(raw: &str) -> Result<Entry, ParseError> {
    EntryParser::default().parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::seq::SliceRandom;

    const LABEL_CHARS: &[char] = &[
        'a', 'k', 'o', 'p', 's', 't', 'N', 'E', 'é', '_', '.', '(', ')', ',', ' ', ' ',
    ];
    const PADDING: &[&str] = &["", " ", "  ", "\t", " \t "];

    fn random_label(rng: &mut impl Rng) -> String {
        let len = rng.gen_range(0..20);
        // First char is never whitespace, so the trimmed label is never empty.
        let mut label = String::from(*LABEL_CHARS[..LABEL_CHARS.len() - 2].choose(rng).unwrap());
        for _ in 0..len {
            label.push(*LABEL_CHARS.choose(rng).unwrap());
        }
        label
    }

    fn pad(rng: &mut impl Rng) -> &'static str {
        PADDING.choose(rng).unwrap()
    }

    #[test]
    fn test_random_lines_keep_trimmed_label_and_exact_amount() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let label = random_label(&mut rng);
            let amount: i64 = rng.r#gen();
            let line = format!(
                "{}{}{}-{}{}{}",
                pad(&mut rng),
                label,
                pad(&mut rng),
                pad(&mut rng),
                amount,
                pad(&mut rng)
            );

            let entry = parse(&line).unwrap_or_else(|e| panic!("{:?} failed: {}", line, e));
            assert_eq!(entry.label(), label.trim(), "line {:?}", line);
            assert_eq!(entry.amount().value(), amount, "line {:?}", line);
        }
    }

    #[test]
    fn test_random_lines_without_delimiter_are_malformed() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let line = format!(
                "{}{}{}",
                random_label(&mut rng),
                pad(&mut rng),
                rng.gen_range(0..i64::MAX)
            );
            assert_eq!(parse(&line), Err(ParseError::MalformedInput), "line {:?}", line);
        }
    }

    #[test]
    fn test_parse_spaced_line() {
        let entry = parse("Nasi Goreng - 15000").unwrap();
        assert_eq!(entry.label(), "Nasi Goreng");
        assert_eq!(entry.amount(), Amount::new(15000));
    }

    #[test]
    fn test_parse_without_spaces() {
        let entry = parse("Kopi-10000").unwrap();
        assert_eq!(entry.label(), "Kopi");
        assert_eq!(entry.amount().value(), 10000);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let entry = parse("   Es Teh   -   5000  \n").unwrap();
        assert_eq!(entry.label(), "Es Teh");
        assert_eq!(entry.amount().value(), 5000);
    }

    #[test]
    fn test_missing_delimiter_is_malformed() {
        assert_eq!(parse("Teh"), Err(ParseError::MalformedInput));
        assert_eq!(parse("Teh 5000"), Err(ParseError::MalformedInput));
        assert_eq!(parse(""), Err(ParseError::MalformedInput));
    }

    #[test]
    fn test_non_integer_amount_is_invalid() {
        assert_eq!(
            parse("Nasi Goreng - abc"),
            Err(ParseError::InvalidAmount("abc".to_string()))
        );
        assert!(matches!(
            parse("Nasi Goreng - 15.000"),
            Err(ParseError::InvalidAmount(_))
        ));
        assert!(matches!(parse("Nasi Goreng -"), Err(ParseError::InvalidAmount(_))));
    }

    #[test]
    fn test_only_first_delimiter_splits() {
        // The remainder keeps the second delimiter and fails integer parsing.
        assert_eq!(
            parse("Ayam-Bakar - 20000"),
            Err(ParseError::InvalidAmount("Bakar - 20000".to_string()))
        );
    }

    #[test]
    fn test_negative_amount_depends_on_policy() {
        let entry = parse("Refund - -5000").unwrap();
        assert_eq!(entry.amount().value(), -5000);

        let strict = EntryParser::new('-', AmountPolicy::NonNegative);
        assert_eq!(
            strict.parse("Refund - -5000"),
            Err(ParseError::RejectedAmount {
                amount: Amount::new(-5000),
                policy: AmountPolicy::NonNegative,
            })
        );
        assert!(strict.parse("Gratis - 0").is_ok());

        let positive = EntryParser::new('-', AmountPolicy::Positive);
        assert!(matches!(
            positive.parse("Gratis - 0"),
            Err(ParseError::RejectedAmount { .. })
        ));
    }

    #[test]
    fn test_empty_label_is_rejected() {
        assert_eq!(parse(" - 500"), Err(ParseError::EmptyLabel));
        assert_eq!(Entry::new("   ", 1), Err(ParseError::EmptyLabel));
    }

    #[test]
    fn test_overflowing_amount_is_invalid() {
        assert!(matches!(
            parse("Rumah - 99999999999999999999"),
            Err(ParseError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = EntryParser::new('=', AmountPolicy::Any);
        let entry = parser.parse("Nasi-Uduk = 12000").unwrap();
        assert_eq!(entry.label(), "Nasi-Uduk");
        assert_eq!(entry.amount().value(), 12000);
    }
}
