//! Command-line argument structures.
//!
//! Isolates clap derivations so lint expectations remain scoped, keeping
//! `main.rs` focused on runtime logic.

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(
    name = "reqprobe",
    version,
    about = "Send a GET request with a JSON body and print the JSON reply"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one GET request and print the decoded reply and status code
    Get(GetArgs),
}

/// Parameters accepted by the `get` sub-command.
///
/// Every field is optional so configuration files and the environment can
/// supply values the command line leaves out.
#[derive(Parser, Deserialize, Serialize, Default, Debug, OrthoConfig, Clone)]
#[command(name = "get")]
#[ortho_config(prefix = "REQPROBE")]
pub struct GetArgs {
    /// Target URL [default: http://localhost:8000/api/]
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
    /// Query parameter to attach; repeat for several [default: key-param=value-param]
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    /// JSON object sent as the request body [default: {"data": "some data in JSON format"}]
    #[arg(short = 'b', long, value_name = "JSON")]
    pub body: Option<String>,
}

impl GetArgs {
    /// Merge another instance into `self`, overwriting only fields that
    /// `other` sets.
    ///
    /// CLI flags have higher priority than configuration sources.
    pub fn merge(&mut self, other: Self) {
        self.endpoint = other.endpoint.or_else(|| self.endpoint.take());
        if !other.params.is_empty() {
            self.params = other.params;
        }
        self.body = other.body.or_else(|| self.body.take());
    }
}
