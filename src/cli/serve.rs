//! Drive a session from newline-delimited JSON.
//!
//! Each stdin line is one host message (`{"type": "get-variables"}`). Events
//! the session queues while handling it are written to stdout, one JSON
//! object per line, and the document is saved after every message. The loop
//! ends at end of input or after a `close` message.
//!
//! ```bash
//! echo '{"type":"create-design-system"}' | dsforge serve
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::CliConfig;
use super::common::CommandContext;
use crate::core::DsforgeError;
use crate::handlers::messages::message_type;
use crate::handlers::{Router, default_router};
use crate::session::Session;
use crate::store::{DocumentStore, MemoryDocument};

/// Handle host messages from stdin until closed
#[derive(Args, Debug)]
pub struct ServeCommand {}

impl ServeCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let mut context = CommandContext::open(config).await?;
        let router: Router<MemoryDocument> = default_router();
        tracing::info!("Design system builder ready, reading messages from stdin");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
            if line.trim().is_empty() {
                continue;
            }

            handle_line(&router, &mut context.session, &line).await;
            context.save().await?;

            for event in context.session.drain_events() {
                let mut out = serde_json::to_string(&event).context("Failed to serialize event")?;
                out.push('\n');
                stdout.write_all(out.as_bytes()).await?;
            }
            stdout.flush().await?;

            if context.session.is_closed() {
                break;
            }
        }

        tracing::debug!("Message loop finished");
        Ok(())
    }
}

/// Dispatch one line; every failure is logged and reported to the host.
async fn handle_line<S: DocumentStore>(router: &Router<S>, session: &mut Session<S>, line: &str) {
    let message: Value = match serde_json::from_str(line) {
        Ok(message) => message,
        Err(e) => {
            report(
                session,
                &DsforgeError::InvalidMessage {
                    message_type: "<unparsed>".to_string(),
                    reason: e.to_string(),
                },
            );
            return;
        }
    };

    // Routing needs a type before any middleware is reached
    if let Err(error) = message_type(&message) {
        report(session, &error);
        return;
    }

    // Handler failures were already reported by the error-reporting middleware
    if let Err(e) = router.dispatch(session, &message).await {
        tracing::debug!("Message failed: {e:#}");
    }
}

fn report<S: DocumentStore>(session: &mut Session<S>, error: &DsforgeError) {
    tracing::error!("{error}");
    session.notify_error(format!("Error: {error}"));
}
