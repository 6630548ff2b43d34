//! Per-verb command handlers
//!
//! Handlers translate parsed flags into client calls and hand results
//! to the output layer; business rules stay server-side.

pub mod parsing;
pub mod security_group;
pub mod volume_type;

use crate::api::ApiClient;
use crate::cli::Commands;
use anyhow::Result;

pub async fn run(client: &ApiClient, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::VolumeType { command } => volume_type::run(client, command, json).await,
        Commands::SecurityGroup { command } => security_group::run(client, command, json).await,
    }
}
