//! Command-line surface
//!
//! One subcommand group per resource family, one arg struct per verb.
//! Flag-level constraints (conflicting or required flags) live here so
//! invalid invocations never reach the client layer.

use crate::commands::parsing::parse_key_value;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

/// Command-line client for OpenStack-compatible cloud control planes
#[derive(Parser, Debug)]
#[command(name = "ostack", version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level for debugging
    #[arg(long, value_enum, global = true, default_value = "off")]
    pub log_level: LogLevel,

    /// Control plane endpoint URL
    #[arg(long, global = true)]
    pub cloud_url: Option<String>,

    /// Bearer token for API authentication
    #[arg(long, global = true)]
    pub os_token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage volume types
    VolumeType {
        #[command(subcommand)]
        command: VolumeTypeCommands,
    },
    /// Manage security groups
    SecurityGroup {
        #[command(subcommand)]
        command: SecurityGroupCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum VolumeTypeCommands {
    /// Create new volume type
    Create(CreateVolumeType),
    /// Delete volume type
    Delete(DeleteVolumeType),
    /// List volume types
    List(ListVolumeTypes),
    /// Set volume type properties
    Set(SetVolumeType),
    /// Display volume type details
    Show(ShowVolumeType),
    /// Unset volume type properties
    Unset(UnsetVolumeType),
}

#[derive(Args, Debug)]
pub struct CreateVolumeType {
    /// New volume type name
    pub name: String,

    /// New volume type description
    #[arg(long)]
    pub description: Option<String>,

    /// Volume type is accessible to the public
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Volume type is not accessible to the public
    #[arg(long)]
    pub private: bool,

    /// Property to add for this volume type (repeat option to set
    /// multiple properties)
    #[arg(long = "property", value_name = "key=value", value_parser = parse_key_value)]
    pub properties: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct DeleteVolumeType {
    /// Volume type to delete (name or ID)
    pub volume_type: String,
}

#[derive(Args, Debug)]
pub struct ListVolumeTypes {
    /// List additional fields in output
    #[arg(long)]
    pub long: bool,
}

#[derive(Args, Debug)]
pub struct SetVolumeType {
    /// Volume type to modify (name or ID)
    pub volume_type: String,

    /// Set volume type name
    #[arg(long)]
    pub name: Option<String>,

    /// Set volume type description
    #[arg(long)]
    pub description: Option<String>,

    /// Property to add or modify for this volume type (repeat option
    /// to set multiple properties)
    #[arg(long = "property", value_name = "key=value", value_parser = parse_key_value)]
    pub properties: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct ShowVolumeType {
    /// Volume type to display (name or ID)
    pub volume_type: String,
}

#[derive(Args, Debug)]
pub struct UnsetVolumeType {
    /// Volume type to modify (name or ID)
    pub volume_type: String,

    /// Property to remove from volume type (repeat option to remove
    /// multiple properties)
    #[arg(long = "property", value_name = "key", required = true)]
    pub properties: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum SecurityGroupCommands {
    /// Create a new security group
    Create(CreateSecurityGroup),
    /// Delete a security group
    Delete(DeleteSecurityGroup),
    /// List security groups
    List(ListSecurityGroups),
    /// Set security group properties
    Set(SetSecurityGroup),
    /// Display security group details
    Show(ShowSecurityGroup),
}

#[derive(Args, Debug)]
pub struct CreateSecurityGroup {
    /// New security group name
    pub name: String,

    /// New security group description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteSecurityGroup {
    /// Security group to delete (name or ID)
    pub group: String,
}

#[derive(Args, Debug)]
pub struct ListSecurityGroups {
    /// Maximum number of groups to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Return results after this marker
    #[arg(long)]
    pub marker: Option<String>,

    /// Include groups from all projects
    #[arg(long)]
    pub all_projects: bool,

    /// List additional fields in output
    #[arg(long)]
    pub long: bool,
}

#[derive(Args, Debug)]
pub struct SetSecurityGroup {
    /// Security group to modify (name or ID)
    pub group: String,

    /// Set security group name
    #[arg(long)]
    pub name: Option<String>,

    /// Set security group description
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowSecurityGroup {
    /// Security group to display (name or ID)
    pub group: String,
}
