// HealthChat line shell
// Reads one message per stdin line and prints each reply as JSON.

use anyhow::Context;
use healthchat_core::actors::SupervisorHandle;
use healthchat_core::config::AssistantConfig;
use healthchat_core::{telemetry, ResponseComposer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AssistantConfig::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log_format);

    let composer = ResponseComposer::new().context("Failed to load knowledge tables")?;
    let supervisor = SupervisorHandle::new(&config, composer).context("Failed to start supervisor")?;
    info!(history_turns = config.history_turns, "HealthChat ready");

    println!("{}", serde_json::json!({ "daily_tip": supervisor.daily_tip().await }));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = supervisor.process_message(line).await;
        println!("{}", serde_json::to_string(&reply)?);
    }

    supervisor.shutdown().await;
    Ok(())
}
