use crate::application::service::{Inbound, Reply, Sender, TallyService};
use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Line-based transport for local use.
///
/// Every non-blank input line is one message from the same local sender.
/// Text replies go to `out`; documents are written into `export_dir` and
/// announced with a `📎` line.
pub struct Console<W: Write> {
    service: TallyService,
    out: W,
    export_dir: PathBuf,
    sender: Sender,
}

impl<W: Write> Console<W> {
    pub fn new(service: TallyService, out: W, export_dir: impl AsRef<Path>) -> Self {
        Self {
            service,
            out,
            export_dir: export_dir.as_ref().to_path_buf(),
            sender: Sender {
                id: 0,
                username: Some("console".to_string()),
            },
        }
    }

    pub async fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let inbound = Inbound {
                sender: self.sender.clone(),
                text: line,
            };
            match self.service.handle(&inbound).await {
                Ok(Some(reply)) => self.emit(reply)?,
                Ok(None) => {}
                Err(err) => warn!(error = %err, "Error handling message"),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn emit(&mut self, reply: Reply) -> Result<()> {
        match reply {
            Reply::Text(text) => writeln!(self.out, "{}", text)?,
            Reply::Document {
                file_name,
                bytes,
                caption,
            } => {
                std::fs::write(self.export_dir.join(&file_name), bytes)?;
                writeln!(self.out, "📎 {}", file_name)?;
                if let Some(caption) = caption {
                    writeln!(self.out, "{}", caption)?;
                }
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
