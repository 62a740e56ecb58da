// ABOUTME: Server binary for the chatbot conversation API
// ABOUTME: Loads configuration, opens the database, and serves the REST routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chatbot API Server Binary
//!
//! Starts the conversation REST API backed by `SQLite`.

use anyhow::Result;
use chatbot_api::{
    config::{DatabaseUrl, ServerConfig},
    constants::endpoints,
    database::Database,
    logging::{self, TracingRequestLogger},
    resources::ServerResources,
    server::ChatbotServer,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "chatbot-server")]
#[command(about = "Chatbot API - conversation and message storage over REST")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override database URL (e.g. `sqlite:./data/chatbot.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }

    logging::init_from_env()?;

    info!("Starting Chatbot API");
    info!("{}", config.summary());

    let database = Database::new(&config.database).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let config = Arc::new(config);
    let resources = ServerResources::new(
        database,
        Arc::new(TracingRequestLogger),
        Arc::clone(&config),
    );

    display_available_endpoints(&config);

    if let Err(e) = ChatbotServer::new(resources).run().await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.host, config.http_port);
    let conversations = endpoints::CONVERSATIONS;

    info!("=== Available API Endpoints ===");
    info!("Conversations:");
    info!("   List:              GET    {base}{conversations}");
    info!("   Create:            POST   {base}{conversations}");
    info!("   Get:               GET    {base}{conversations}/{{id}}");
    info!("   Rename:            PUT    {base}{conversations}/{{id}}");
    info!("   Delete:            DELETE {base}{conversations}/{{id}}");
    info!("   List Messages:     GET    {base}{conversations}/{{id}}/messages");
    info!("   Add Message:       POST   {base}{conversations}/{{id}}/messages");
    info!("Monitoring:");
    info!("   Health:            GET    {base}{}", endpoints::HEALTH_CHECK);
    info!("   Ready:             GET    {base}{}", endpoints::READY_CHECK);
    info!("=== End of Endpoint List ===");
}
