//! Command-line entry point for `reqprobe`.

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use reqprobe::cli_args::{Cli, Commands, GetArgs};
use reqprobe::printer::{is_broken_pipe, write_response};
use reqprobe::{RequestInvoker, load_get_args, resolve_plan};

/// Resolve the invocation plan, send the request and print the reply.
async fn run_get(args: GetArgs) -> anyhow::Result<()> {
    let args = load_get_args(args).context("loading configuration")?;
    let plan = resolve_plan(&args)?;
    debug!("resolved invocation plan: {plan:?}");

    let invoker = RequestInvoker::new(plan.endpoint)?;
    let resp = invoker.invoke(&plan.query, &plan.body).await?;
    info!("received status {}", resp.status());

    match write_response(std::io::stdout().lock(), &resp) {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other.context("writing response"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match Cli::parse().command {
        Commands::Get(args) => run_get(args).await,
    }
}
