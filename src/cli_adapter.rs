use error_stack::{report, ResultExt};
use form_sheets_forwarder::domain::form_schema::FormSchema;
use form_sheets_forwarder::domain::outcome::ForwardOutcome;
use form_sheets_forwarder::ports::command_handler::{
    Command, CommandError, CommandHandler, EventSource,
};
use form_sheets_forwarder::ports::event_handler::{EventError, SubmissionEvent, SubmissionHandler};
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{error, info, instrument, warn, Instrument};

const USAGE: &str = "usage: form-sheets-forwarder [forward [--file <path>] [--sequential] | schema | health]";

pub struct CliAdapter {
    handler: Arc<dyn SubmissionHandler>,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("handler", &"<SubmissionHandler>")
            .finish()
    }
}

/// Tally of one `forward` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForwardSummary {
    pub forwarded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ForwardSummary {
    fn record(&mut self, line: usize, result: &error_stack::Result<ForwardOutcome, EventError>) {
        match result {
            Ok(outcome @ ForwardOutcome::Forwarded { .. }) => {
                self.forwarded += 1;
                info!("✅ line {}: {}", line, outcome);
            }
            Ok(outcome @ ForwardOutcome::Skipped(_)) => {
                self.skipped += 1;
                info!("line {}: {}", line, outcome);
            }
            Err(report) => {
                self.failed += 1;
                error!("❌ line {}: {:?}", line, report);
            }
        }
    }
}

impl std::fmt::Display for ForwardSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Summary: {} forwarded, {} skipped, {} failed",
            self.forwarded, self.skipped, self.failed
        )
    }
}

impl CliAdapter {
    pub fn new(handler: Arc<dyn SubmissionHandler>) -> Self {
        Self { handler }
    }

    #[instrument(skip(args))]
    pub async fn run(&self, args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
        let command = parse_args(&args)?;

        match self.handle(command).await {
            Ok(result) => {
                println!("{}", result);
                Ok(())
            }
            Err(report) => {
                error!("Command failed: {:?}", report);
                Err(format!("Command failed: {}", report.current_context()).into())
            }
        }
    }

    async fn forward(
        &self,
        source: &EventSource,
        parallel: bool,
    ) -> error_stack::Result<ForwardSummary, CommandError> {
        let reader: Box<dyn AsyncRead + Unpin + Send> = match source {
            EventSource::Stdin => Box::new(tokio::io::stdin()),
            EventSource::File(path) => Box::new(
                tokio::fs::File::open(path)
                    .await
                    .change_context(CommandError::ExecutionFailed {
                        details: format!("Failed to open {}", path.display()),
                    })?,
            ),
        };

        self.forward_events(reader, parallel).await
    }

    /// Dispatches each non-blank line as soon as it is read; the source may stay open.
    /// Lines are numbered from 1.
    async fn forward_events<R: AsyncRead + Unpin>(
        &self,
        reader: R,
        parallel: bool,
    ) -> error_stack::Result<ForwardSummary, CommandError> {
        let mut lines = BufReader::new(reader).lines();
        let mut in_flight = FuturesUnordered::new();
        let mut summary = ForwardSummary::default();
        let mut line = 0;
        let mut reading = true;

        while reading || !in_flight.is_empty() {
            tokio::select! {
                next = lines.next_line(), if reading => {
                    let next = next.change_context(CommandError::ExecutionFailed {
                        details: "Failed to read submission events".to_string(),
                    })?;

                    match next {
                        None => reading = false,
                        Some(payload) if payload.trim().is_empty() => line += 1,
                        Some(payload) => {
                            line += 1;
                            if parallel {
                                in_flight.push(self.dispatch_line(line, payload));
                            } else {
                                let (line, result) = self.dispatch_line(line, payload).await;
                                summary.record(line, &result);
                            }
                        }
                    }
                }
                Some((line, result)) = in_flight.next(), if !in_flight.is_empty() => {
                    summary.record(line, &result);
                }
            }
        }

        info!("Read {} lines of submission events", line);
        Ok(summary)
    }

    async fn dispatch_line(
        &self,
        line: usize,
        payload: String,
    ) -> (usize, error_stack::Result<ForwardOutcome, EventError>) {
        let result = self
            .dispatch(&payload)
            .instrument(tracing::span!(tracing::Level::INFO, "event", line = line))
            .await;
        (line, result)
    }

    /// Malformed payloads fail on their own and never reach the forwarder.
    async fn dispatch(&self, payload: &str) -> error_stack::Result<ForwardOutcome, EventError> {
        let event: SubmissionEvent = serde_json::from_str(payload).map_err(|e| {
            report!(EventError::InvalidEvent {
                details: format!("Failed to deserialize event: {}", e),
            })
        })?;

        self.handler.handle(event).await
    }
}

pub fn parse_args(args: &[String]) -> Result<Command, CommandError> {
    match args.get(1).map(|s| s.as_str()) {
        Some("forward") => parse_forward(&args[2..]),
        Some("schema") => Ok(Command::Schema),
        Some("health") => Ok(Command::HealthCheck),
        None => Ok(Command::Forward {
            source: EventSource::Stdin,
            parallel: true,
        }), // Default behavior
        Some(other) => Err(CommandError::InvalidCommand {
            details: format!("unknown command '{}', {}", other, USAGE),
        }),
    }
}

fn parse_forward(flags: &[String]) -> Result<Command, CommandError> {
    let mut source = EventSource::Stdin;
    let mut parallel = true;
    let mut flags = flags.iter();

    while let Some(flag) = flags.next() {
        match flag.as_str() {
            "--sequential" => parallel = false,
            "--file" => {
                let path = flags.next().ok_or_else(|| CommandError::InvalidCommand {
                    details: "--file requires a path".to_string(),
                })?;
                source = EventSource::File(PathBuf::from(path));
            }
            other => {
                return Err(CommandError::InvalidCommand {
                    details: format!("unknown flag '{}', {}", other, USAGE),
                })
            }
        }
    }

    Ok(Command::Forward { source, parallel })
}

#[async_trait::async_trait]
impl CommandHandler for CliAdapter {
    #[instrument]
    async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError> {
        match command {
            Command::Forward { source, parallel } => {
                if !self.handler.is_available() {
                    warn!("Forwarding is disabled, every submission will be skipped");
                }

                let summary = self.forward(&source, parallel).await?;

                if summary.failed > 0 {
                    return Err(report!(CommandError::ExecutionFailed {
                        details: summary.to_string(),
                    }));
                }

                Ok(summary.to_string())
            }
            Command::Schema => serde_json::to_string_pretty(&FormSchema::default())
                .change_context(CommandError::ExecutionFailed {
                    details: "Failed to serialize form schema".to_string(),
                }),
            Command::HealthCheck => Ok(if self.handler.is_available() {
                "🟢 Form sheets forwarder - forwarding enabled".to_string()
            } else {
                "🔴 Form sheets forwarder - forwarding disabled (authentication failed at startup)"
                    .to_string()
            }),
        }
    }
}
