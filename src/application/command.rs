/// What an inbound message asks the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Report,
    Export,
    /// A slash command nobody handles. It gets no reply.
    Unknown(&'a str),
    /// Plain text, treated as an entry to record.
    Record(&'a str),
}

impl<'a> Command<'a> {
    /// Routes raw message text.
    ///
    /// Commands are matched case-insensitively and may carry an `@botname`
    /// suffix (`/report@tally_bot`). Arguments after the command word are
    /// ignored.
    pub fn route(text: &'a str) -> Self {
        let trimmed = text.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Record(text);
        };

        let word = rest.split_whitespace().next().unwrap_or_default();
        let name = word.split('@').next().unwrap_or_default();

        match name.to_ascii_lowercase().as_str() {
            "start" | "help" => Command::Help,
            "report" | "laporan" => Command::Report,
            "export" | "savelaporan" => Command::Export,
            _ => Command::Unknown(word),
        }
    }
}
