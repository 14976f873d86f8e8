//! Kanbot console adapter.
//!
//! Reads chat lines from stdin, hands each one to the command dispatcher as
//! if `KANBOT_AUTHOR` had sent it, and writes replies to stdout. Logs go to
//! stderr and are filtered through `RUST_LOG`.

use std::sync::Arc;

use kanbot::board::{adapters::memory::InMemoryBoardStore, services::KanbanService};
use kanbot::command::services::CommandDispatcher;
use kanbot::config::{KanbotConfig, OutputFormat};
use mockable::DefaultClock;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type MainResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> MainResult {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kanbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = KanbotConfig::from_env()?;
    info!(
        signal = %config.signal,
        bot = %config.bot_name,
        author = %config.author,
        "kanbot console ready"
    );

    let output = config.output;
    let author = config.author.clone();
    let service = KanbanService::new(Arc::new(InMemoryBoardStore::new()), Arc::new(DefaultClock));
    let dispatcher = CommandDispatcher::new(service, config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        let Some(reply) = dispatcher.handle(&author, &line) else {
            continue;
        };
        let rendered = match output {
            OutputFormat::Text => format!("{reply}\n\n"),
            OutputFormat::Json => format!("{}\n", serde_json::to_string(&reply)?),
        };
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
