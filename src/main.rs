use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use tallybot::application::service::TallyService;
use tallybot::config::{Settings, TelegramSettings};
use tallybot::domain::ports::{LedgerStoreBox, ReportSerializerBox};
use tallybot::infrastructure::in_memory::InMemoryLedger;
use tallybot::interfaces::console::Console;
use tallybot::interfaces::csv::report_writer::CsvReportSerializer;
use tallybot::interfaces::telegram::{Poller, TelegramClient};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the Telegram bot using long polling
    Poll {
        #[command(flatten)]
        telegram: TelegramSettings,
        #[command(flatten)]
        settings: Settings,
    },
    /// Feed messages from a file (or stdin) and print the replies
    Console {
        /// File with one message per line; reads stdin when omitted
        input: Option<PathBuf>,

        /// Directory where exported documents are written
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,

        #[command(flatten)]
        settings: Settings,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tallybot::telemetry::init();
    let cli = Cli::parse();

    let ledger: LedgerStoreBox = Box::new(InMemoryLedger::new());

    match cli.command {
        Mode::Poll { telegram, settings } => {
            let token = telegram.require_token().into_diagnostic()?;
            let client = TelegramClient::new(&telegram.api_url, token, telegram.poll_timeout())
                .into_diagnostic()?;
            let serializer: ReportSerializerBox =
                Box::new(CsvReportSerializer::new(&settings.currency));
            let service = Arc::new(TallyService::new(ledger, serializer, &settings));

            let mut poller = Poller::new(client, service, telegram.poll_timeout());
            poller.run().await.into_diagnostic()?;
        }
        Mode::Console {
            input,
            export_dir,
            settings,
        } => {
            let serializer: ReportSerializerBox =
                Box::new(CsvReportSerializer::new(&settings.currency));
            let service = TallyService::new(ledger, serializer, &settings);
            let stdout = io::stdout();
            let mut console = Console::new(service, stdout.lock(), export_dir);

            match input {
                Some(path) => {
                    let file = File::open(path).into_diagnostic()?;
                    console.run(BufReader::new(file)).await.into_diagnostic()?;
                }
                None => console.run(io::stdin().lock()).await.into_diagnostic()?,
            }
        }
    }

    Ok(())
}
