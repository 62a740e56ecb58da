// ABOUTME: Chatbot CLI - command-line client for the conversation API
// ABOUTME: Lists, creates, renames, and deletes conversations and types out messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List conversations, newest first
//! chatbot-cli list
//!
//! # Start a conversation and add a message
//! chatbot-cli create "Trip planning"
//! chatbot-cli say 6f1c... "Where should we go?" --role user
//!
//! # Replay a conversation with the typing effect
//! chatbot-cli show 6f1c... --char-delay-ms 20
//!
//! # Rename or delete
//! chatbot-cli rename 6f1c... "Summer trip"
//! chatbot-cli delete 6f1c...
//! ```

mod display;

use anyhow::{anyhow, Result};
use chatbot_api::{
    client::ConversationClient,
    config::TypingConfig,
    constants::{ports, service_names},
    logging::{LogFormat, LoggingConfig},
    models::MessageRole,
    services::Lookup,
    typing::TypingRenderer,
};
use clap::{Parser, Subcommand};
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "chatbot-cli",
    about = "Chatbot API command-line client",
    long_about = "Manage conversations on a running chatbot-server and replay messages with a typing effect."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Server base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Delay between revealed characters in milliseconds [env: TYPING_CHAR_DELAY_MS]
    #[arg(long, global = true)]
    char_delay_ms: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all conversations
    List,

    /// Show one conversation and type out its messages
    Show {
        /// Conversation ID
        id: Uuid,
    },

    /// Create a new conversation
    Create {
        /// Conversation name
        name: String,
    },

    /// Add a message to a conversation
    Say {
        /// Conversation ID
        id: Uuid,

        /// Message text
        content: String,

        /// Message author (system, user, assistant)
        #[arg(long, default_value = "user")]
        role: MessageRole,
    },

    /// Rename a conversation
    Rename {
        /// Conversation ID
        id: Uuid,

        /// New name
        name: String,
    },

    /// Delete a conversation and its messages
    Delete {
        /// Conversation ID
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.into(),
        format: LogFormat::Compact,
        service_name: service_names::CHATBOT_CLI.into(),
        ..LoggingConfig::default()
    }
    .init()?;

    let base_url = cli
        .base_url
        .unwrap_or_else(|| format!("http://127.0.0.1:{}", ports::DEFAULT_HTTP_PORT));
    debug!("Using chatbot server at {base_url}");

    let client = ConversationClient::new(base_url);
    let typing = match cli.char_delay_ms {
        Some(char_delay_ms) => TypingConfig { char_delay_ms },
        None => TypingConfig::from_env()?,
    };
    let mut renderer = TypingRenderer::new(typing.char_delay());

    match cli.command {
        Command::List => {
            let conversations = client.list_conversations().await?;
            display::conversation_table(&conversations);
        }
        Command::Show { id } => {
            let conversation = found(client.get_conversation(id).await?, id)?;
            display::conversation_header(&conversation);
            for message in &conversation.messages {
                display::type_message(&mut renderer, message).await?;
            }
        }
        Command::Create { name } => {
            let conversation = client.create_conversation(&name).await?;
            println!("Created conversation {}", conversation.id);
        }
        Command::Say { id, content, role } => {
            let message = found(client.add_message(id, role, &content).await?, id)?;
            display::type_message(&mut renderer, &message).await?;
        }
        Command::Rename { id, name } => {
            let conversation = found(client.update_conversation(id, &name).await?, id)?;
            println!("Renamed conversation {} to {}", conversation.id, conversation.name);
        }
        Command::Delete { id } => {
            found(client.delete_conversation(id).await?, id)?;
            println!("Deleted conversation {id}");
        }
    }

    Ok(())
}

fn found<T>(lookup: Lookup<T>, id: Uuid) -> Result<T> {
    lookup
        .into_option()
        .ok_or_else(|| anyhow!("Conversation {id} not found"))
}
