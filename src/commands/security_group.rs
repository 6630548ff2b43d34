//! Security group command handlers

use crate::api::client::record_id;
use crate::api::{self, ApiClient, ApiError};
use crate::cli::{
    CreateSecurityGroup, DeleteSecurityGroup, ListSecurityGroups, SecurityGroupCommands,
    SetSecurityGroup, ShowSecurityGroup,
};
use crate::output;
use crate::resource::registry;
use anyhow::Result;
use serde_json::{json, Value};

pub async fn run(client: &ApiClient, command: SecurityGroupCommands, json: bool) -> Result<()> {
    match command {
        SecurityGroupCommands::Create(args) => create(client, args, json).await,
        SecurityGroupCommands::Delete(args) => delete(client, args).await,
        SecurityGroupCommands::List(args) => list(client, args, json).await,
        SecurityGroupCommands::Set(args) => set(client, args).await,
        SecurityGroupCommands::Show(args) => show(client, args, json).await,
    }
}

async fn create(client: &ApiClient, args: CreateSecurityGroup, json: bool) -> Result<()> {
    let record =
        api::security_groups::create(client, &args.name, args.description.as_deref()).await?;
    output::print_record(&record, json)
}

async fn delete(client: &ApiClient, args: DeleteSecurityGroup) -> Result<()> {
    let def = registry::security_groups();
    let record = client.find(def, &args.group).await?;
    let id = record_id(&record)
        .ok_or_else(|| ApiError::MissingId(def.display_name.clone()))?;
    client.delete(def, &id).await?;
    Ok(())
}

async fn list(client: &ApiClient, args: ListSecurityGroups, json: bool) -> Result<()> {
    let def = registry::security_groups();
    let columns = if args.long {
        &def.long_columns
    } else {
        &def.columns
    };

    let items = api::security_groups::list(
        client,
        args.limit,
        args.marker.as_deref(),
        args.all_projects,
    )
    .await?;

    output::print_list(columns, &items, json)
}

async fn set(client: &ApiClient, args: SetSecurityGroup) -> Result<()> {
    let mut updates: Vec<(String, Value)> = Vec::new();
    if let Some(name) = &args.name {
        updates.push(("name".to_string(), json!(name)));
    }
    if let Some(description) = &args.description {
        updates.push(("description".to_string(), json!(description)));
    }

    if updates.is_empty() {
        eprintln!("No changes requested");
        return Ok(());
    }

    api::security_groups::set(client, &args.group, &updates).await?;
    Ok(())
}

async fn show(client: &ApiClient, args: ShowSecurityGroup, json: bool) -> Result<()> {
    let def = registry::security_groups();
    let record = client.find(def, &args.group).await?;
    output::print_record(&record, json)
}
