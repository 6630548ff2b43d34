//! ostack - command-line client for OpenStack-compatible cloud control
//! planes.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod resource;

/// Version injected at compile time via OSTACK_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("OSTACK_VERSION") {
    Some(v) => v,
    None => "dev",
};
