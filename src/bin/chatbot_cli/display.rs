// ABOUTME: Output formatting helpers for chatbot-cli
// ABOUTME: Prints conversation tables and types messages through the renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chatbot_api::models::{Conversation, Message};
use chatbot_api::typing::TypingRenderer;
use tokio::io::{self, AsyncWriteExt};

/// Print one line per conversation
pub fn conversation_table(conversations: &[Conversation]) {
    if conversations.is_empty() {
        println!("No conversations yet.");
        return;
    }

    println!("{:<36}  {:<20}  {:>8}  NAME", "ID", "CREATED", "MESSAGES");
    println!("{}", "=".repeat(80));
    for conversation in conversations {
        println!(
            "{:<36}  {:<20}  {:>8}  {}",
            conversation.id,
            conversation.created_at.format("%Y-%m-%d %H:%M UTC"),
            conversation.messages.len(),
            conversation.name
        );
    }
}

/// Print the title block of a conversation
pub fn conversation_header(conversation: &Conversation) {
    println!("{}", conversation.name);
    println!(
        "{} | started {}",
        conversation.id,
        conversation.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("{}", "=".repeat(80));
}

/// Type a message to stdout as the renderer reveals it, then end the line
pub async fn type_message(renderer: &mut TypingRenderer, message: &Message) -> Result<()> {
    let mut receiver = renderer.subscribe();
    renderer.set_content(&message.content);

    let mut stdout = io::stdout();
    let prefix = format!("[{}] {}: ", message.created_at.format("%H:%M:%S"), message.role);
    stdout.write_all(prefix.as_bytes()).await?;

    let mut printed = 0;
    loop {
        let (displayed, active) = {
            let reveal = receiver.borrow_and_update();
            (reveal.displayed().to_owned(), reveal.is_active())
        };

        if let Some(fresh) = displayed.get(printed..) {
            stdout.write_all(fresh.as_bytes()).await?;
            stdout.flush().await?;
        }
        printed = displayed.len();

        if !active || receiver.changed().await.is_err() {
            break;
        }
    }

    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
