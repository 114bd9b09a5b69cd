// Copyright 2025 Selfgate Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI for deploying identity-verification-gated contracts.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use selfgate_cli::{
    commands::{
        address::AddressCommands, countries::CountriesCommands, deploy::DeployCommands,
        scope::ScopeArgs,
    },
    config::GlobalConfig,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Subcommand, Clone, Debug)]
enum Command {
    /// Deploy a gated contract
    #[command(subcommand)]
    Deploy(Box<DeployCommands>),

    /// Contract address utilities
    #[command(subcommand)]
    Address(Box<AddressCommands>),

    /// Forbidden-country bitmap utilities
    #[command(subcommand)]
    Countries(Box<CountriesCommands>),

    /// Compute the verification scope for an endpoint and label
    Scope(ScopeArgs),
}

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "CLI for deploying identity-verification-gated contracts",
    arg_required_else_help = true
)]
struct MainArgs {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,

    #[command(flatten, next_help_heading = "Global Options")]
    config: GlobalConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    match dotenvy::dotenv() {
        Ok(path) => println!("Loaded environment variables from {:?}", path),
        Err(e) if e.not_found() => (),
        Err(e) => {
            eprintln!("Warning: failed to load .env file: {}", e);
        }
    }

    let args = MainArgs::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(args.config.log_level.into())
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = run(&args).await {
        tracing::error!("Command failed: {}", e);
        if let Some(ctx) = e.source() {
            tracing::error!("Context: {}", ctx);
        }
        bail!("{}", e)
    }
    Ok(())
}

async fn run(args: &MainArgs) -> Result<()> {
    match &args.command {
        Command::Deploy(cmd) => cmd.run(&args.config).await,
        Command::Address(cmd) => cmd.run(&args.config).await,
        Command::Countries(cmd) => cmd.run(&args.config).await,
        Command::Scope(cmd) => cmd.run(&args.config).await,
    }
}
