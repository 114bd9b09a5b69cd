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

//! Common configuration options for all commands.

use std::{num::ParseIntError, str::FromStr, time::Duration};

use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use anyhow::{Context, Result};
use clap::Args;
use selfgate::Deployment;
use tracing::level_filters::LevelFilter;
use url::Url;

/// Parse a private key string, adding the "0x" prefix if not present.
fn parse_private_key(key: &str) -> Result<PrivateKeySigner, <PrivateKeySigner as FromStr>::Err> {
    let key = key.strip_prefix("0x").unwrap_or(key);
    format!("0x{key}").parse()
}

/// Common configuration options for all commands.
#[derive(Args, Debug, Clone)]
pub struct GlobalConfig {
    /// RPC endpoint URL of the target network.
    #[clap(long, env = "RPC_URL", global = true)]
    pub rpc_url: Option<Url>,

    /// Private key used to sign deployment transactions.
    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true, global = true, value_parser = parse_private_key)]
    pub private_key: Option<PrivateKeySigner>,

    /// Block-explorer API key used for contract verification.
    #[clap(long, env = "ETHERSCAN_API_KEY", hide_env_values = true, global = true)]
    pub etherscan_api_key: Option<String>,

    /// Chain ID of the target network.
    #[clap(long, env = "CHAIN_ID", global = true, default_value_t = 44787)]
    pub chain_id: u64,

    /// Transaction timeout in seconds.
    #[clap(long, env = "TX_TIMEOUT", global = true, value_parser = |arg: &str| -> Result<Duration, ParseIntError> {Ok(Duration::from_secs(arg.parse()?))})]
    pub tx_timeout: Option<Duration>,

    /// Log level (error, warn, info, debug, trace).
    #[clap(long, env = "LOG_LEVEL", global = true, default_value = "info")]
    pub log_level: LevelFilter,
}

impl GlobalConfig {
    /// Access [Self::rpc_url] or return an error that can be shown to the user.
    pub fn require_rpc_url(&self) -> Result<Url> {
        self.rpc_url.clone().context("RPC URL not provided; set --rpc-url or the RPC_URL env var")
    }

    /// Access [Self::private_key] or return an error that can be shown to the user.
    pub fn require_private_key(&self) -> Result<PrivateKeySigner> {
        self.private_key
            .clone()
            .context("Private key not provided; set --private-key or the PRIVATE_KEY env var")
    }

    /// The [Deployment] constants for the configured chain.
    pub fn deployment(&self) -> Result<Deployment> {
        Deployment::from_chain_id(self.chain_id)
            .with_context(|| format!("No known deployment for chain ID {}", self.chain_id))
    }

    /// Builds a provider with the configured signer attached.
    pub fn provider(&self) -> Result<impl Provider<Ethereum> + Clone> {
        let wallet = EthereumWallet::from(self.require_private_key()?);
        Ok(ProviderBuilder::new().wallet(wallet).connect_http(self.require_rpc_url()?))
    }

    /// Builds a provider without a signer, for read-only queries.
    pub fn read_only_provider(&self) -> Result<impl Provider<Ethereum> + Clone> {
        Ok(ProviderBuilder::new().connect_http(self.require_rpc_url()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn parses_private_key_with_and_without_prefix() {
        let bare = parse_private_key(KEY).unwrap();
        let prefixed = parse_private_key(&format!("0x{KEY}")).unwrap();
        assert_eq!(bare.address(), prefixed.address());
    }

    #[test]
    fn rejects_garbage_private_key() {
        assert!(parse_private_key("not-a-key").is_err());
    }

    #[test]
    fn builds_providers_from_config() {
        // Construction only; no request is made until a call goes out.
        let config = GlobalConfig {
            rpc_url: Some("http://localhost:8545".parse().unwrap()),
            private_key: Some(parse_private_key(KEY).unwrap()),
            etherscan_api_key: None,
            chain_id: 44787,
            tx_timeout: None,
            log_level: LevelFilter::INFO,
        };
        assert!(config.read_only_provider().is_ok());
        assert!(config.provider().is_ok());

        let unconfigured = GlobalConfig { rpc_url: None, private_key: None, ..config };
        assert!(unconfigured.read_only_provider().is_err());
        assert!(unconfigured.provider().is_err());
    }
}
