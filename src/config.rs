//! Configuration loading and resolution of the invocation plan.
//!
//! Arguments for the `get` sub-command are layered with `ortho_config`:
//! built-in defaults, then the `[cmds.get]` table of the configuration file,
//! then `REQPROBECMDS_GET_*` environment variables, then the command line.
//!
//! The file is discovered as `.reqprobe.toml` in the working directory, the
//! home directory or the XDG config directory, unless `REQPROBE_CONFIG_PATH`
//! names one explicitly.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use log::debug;
use ortho_config::load_and_merge_subcommand_for;

use crate::ProbeError;
use crate::cli_args::GetArgs;
use crate::environment;
use crate::request::{Endpoint, QueryParameters, RequestBody};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "REQPROBE_CONFIG_PATH";
/// Prefix of environment variables overriding `get` arguments.
pub const GET_ENV_PREFIX: &str = "REQPROBECMDS_GET_";
/// Table of the configuration file holding `get` arguments.
const GET_SECTION: &str = "cmds.get";

/// Fully resolved inputs for one invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvocationPlan {
    pub endpoint: Endpoint,
    pub query: QueryParameters,
    pub body: RequestBody,
}

/// Merge `cli_args` with configuration files and the environment.
///
/// # Errors
///
/// Returns [`ProbeError::Config`] if configuration gathering fails, or
/// [`ProbeError::ConfigFile`] if the file named by `REQPROBE_CONFIG_PATH`
/// is missing or malformed.
pub fn load_get_args(cli_args: GetArgs) -> Result<GetArgs, ProbeError> {
    let mut merged = match explicit_config_path() {
        Some(path) => load_from_file(&path)?,
        None => load_and_merge_subcommand_for::<GetArgs>(&cli_args)?,
    };
    // Command-line values always win, including repeated `--param` flags.
    merged.merge(cli_args);
    Ok(merged)
}

/// Read the `[cmds.get]` table of `path`, then layer the environment over it.
fn load_from_file(path: &Path) -> Result<GetArgs, ProbeError> {
    let file_error = |source: figment::Error| ProbeError::ConfigFile {
        path: path.to_path_buf(),
        source: Box::new(source),
    };
    if !path.is_file() {
        return Err(file_error(figment::Error::from(String::from(
            "file does not exist",
        ))));
    }
    debug!("loading configuration from {}", path.display());
    Figment::from(Toml::file(path))
        .focus(GET_SECTION)
        .merge(Env::prefixed(GET_ENV_PREFIX))
        .extract::<GetArgs>()
        .map_err(file_error)
}

fn explicit_config_path() -> Option<PathBuf> {
    environment::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Turn merged arguments into validated request inputs.
///
/// Unset fields fall back to the built-in defaults. A non-empty parameter
/// list replaces the default query parameters rather than extending them.
///
/// # Errors
///
/// Returns [`ProbeError::InvalidEndpoint`], [`ProbeError::InvalidParam`] or
/// [`ProbeError::InvalidBody`] when a supplied value is malformed.
pub fn resolve_plan(args: &GetArgs) -> Result<InvocationPlan, ProbeError> {
    let endpoint = args
        .endpoint
        .as_deref()
        .map(Endpoint::parse)
        .transpose()?
        .unwrap_or_default();
    let query = if args.params.is_empty() {
        QueryParameters::default()
    } else {
        QueryParameters::from_pairs(&args.params)?
    };
    let body = args
        .body
        .as_deref()
        .map(RequestBody::from_json)
        .transpose()?
        .unwrap_or_default();
    Ok(InvocationPlan {
        endpoint,
        query,
        body,
    })
}
