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

//! Contract address utilities.

use alloy::{primitives::Address, providers::Provider};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use selfgate::create_address;

use crate::{config::GlobalConfig, display::DisplayManager};

/// Contract address utilities.
#[derive(Subcommand, Clone, Debug)]
pub enum AddressCommands {
    /// Predict the address of the next contract created by an account
    Predict(AddressPredict),
}

impl AddressCommands {
    /// Run the address command.
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        match self {
            Self::Predict(cmd) => cmd.run(global_config).await,
        }
    }
}

/// Predict the address of the next contract created by an account.
#[derive(Args, Clone, Debug)]
pub struct AddressPredict {
    /// Account to predict for; defaults to the configured signer
    #[clap(long)]
    pub deployer: Option<Address>,

    /// Nonce to derive from; fetched from the chain when omitted
    #[clap(long)]
    pub nonce: Option<u64>,
}

impl AddressPredict {
    /// Run the address predict command.
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        let deployer = match self.deployer {
            Some(address) => address,
            None => global_config.require_private_key()?.address(),
        };

        let nonce = match self.nonce {
            Some(nonce) => nonce,
            None => global_config
                .read_only_provider()?
                .get_transaction_count(deployer)
                .await
                .context("Failed to fetch account nonce")?,
        };

        let display = DisplayManager::new();
        display.address("Deployer", deployer);
        display.item("Nonce", nonce);
        display.address("Predicted address", create_address(deployer, nonce));
        display.warning(
            "The prediction holds only while no other transaction from this account lands first",
        );

        Ok(())
    }
}
