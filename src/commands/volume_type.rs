//! Volume type command handlers

use crate::api::client::record_id;
use crate::api::{self, ApiClient, ApiError};
use crate::cli::{
    CreateVolumeType, DeleteVolumeType, ListVolumeTypes, SetVolumeType, ShowVolumeType,
    UnsetVolumeType, VolumeTypeCommands,
};
use crate::output;
use crate::resource::registry;
use anyhow::Result;
use serde_json::{Map, Value};

pub async fn run(client: &ApiClient, command: VolumeTypeCommands, json: bool) -> Result<()> {
    match command {
        VolumeTypeCommands::Create(args) => create(client, args, json).await,
        VolumeTypeCommands::Delete(args) => delete(client, args).await,
        VolumeTypeCommands::List(args) => list(client, args, json).await,
        VolumeTypeCommands::Set(args) => set(client, args).await,
        VolumeTypeCommands::Show(args) => show(client, args, json).await,
        VolumeTypeCommands::Unset(args) => unset(client, args).await,
    }
}

async fn create(client: &ApiClient, args: CreateVolumeType, json: bool) -> Result<()> {
    let is_public = if args.public {
        Some(true)
    } else if args.private {
        Some(false)
    } else {
        None
    };

    let mut record = api::volume_types::create(
        client,
        &args.name,
        args.description.as_deref(),
        is_public,
    )
    .await?;

    if let Some(map) = record.as_object_mut() {
        map.remove("extra_specs");
    }

    if !args.properties.is_empty() {
        let id = require_id(&record)?;
        let specs = api::volume_types::set_properties(client, &id, &args.properties).await?;
        if let Some(map) = record.as_object_mut() {
            map.insert("properties".to_string(), specs);
        }
    }

    output::print_record(&record, json)
}

async fn delete(client: &ApiClient, args: DeleteVolumeType) -> Result<()> {
    let def = registry::volume_types();
    let record = client.find(def, &args.volume_type).await?;
    let id = require_id(&record)?;
    client.delete(def, &id).await?;
    Ok(())
}

async fn list(client: &ApiClient, args: ListVolumeTypes, json: bool) -> Result<()> {
    let def = registry::volume_types();
    let columns = if args.long {
        &def.long_columns
    } else {
        &def.columns
    };

    let items = client.list(def, &[]).await?;
    output::print_list(columns, &items, json)
}

async fn set(client: &ApiClient, args: SetVolumeType) -> Result<()> {
    if args.name.is_none() && args.description.is_none() && args.properties.is_empty() {
        eprintln!("No changes requested");
        return Ok(());
    }

    let def = registry::volume_types();
    let record = client.find(def, &args.volume_type).await?;
    let id = require_id(&record)?;

    if args.name.is_some() || args.description.is_some() {
        api::volume_types::update(client, &id, args.name.as_deref(), args.description.as_deref())
            .await?;
    }

    if !args.properties.is_empty() {
        api::volume_types::set_properties(client, &id, &args.properties).await?;
    }

    Ok(())
}

async fn show(client: &ApiClient, args: ShowVolumeType, json: bool) -> Result<()> {
    let def = registry::volume_types();
    let record = client.find(def, &args.volume_type).await?;
    output::print_record(&displayable(record), json)
}

async fn unset(client: &ApiClient, args: UnsetVolumeType) -> Result<()> {
    let def = registry::volume_types();
    let record = client.find(def, &args.volume_type).await?;
    let id = require_id(&record)?;

    for key in &args.properties {
        api::volume_types::unset_property(client, &id, key).await?;
    }

    Ok(())
}

/// Replace the wire-level `extra_specs` map with the `properties`
/// display field.
pub fn displayable(mut record: Value) -> Value {
    if let Some(map) = record.as_object_mut() {
        let specs = map
            .remove("extra_specs")
            .unwrap_or_else(|| Value::Object(Map::new()));
        map.insert("properties".to_string(), specs);
    }
    record
}

fn require_id(record: &Value) -> Result<String, ApiError> {
    record_id(record)
        .ok_or_else(|| ApiError::MissingId(registry::volume_types().display_name.clone()))
}
