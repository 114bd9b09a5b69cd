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

use std::path::PathBuf;

use alloy::{
    primitives::{
        utils::{format_ether, format_units},
        Address, U256,
    },
    providers::Provider,
};
use anyhow::{Context, Result};
use clap::Args;
use selfgate::{
    contracts::{ContractArtifact, HotelBookingParams, IHotelBooking},
    countries, create_address, hash_endpoint_with_scope, Country,
};

use super::DEFAULT_ENDPOINT;
use crate::{config::GlobalConfig, contracts::deploy_contract, display::DisplayManager};

/// Deploy the HotelBooking contract.
///
/// Defaults reproduce the original Alfajores deployment: bed prices in token
/// base units, beds 1/3/5/7 for boys and 2/4/6/8 for girls, North Korea and
/// Pakistan blocked, OFAC checks on.
#[derive(Args, Clone, Debug)]
pub struct DeployHotelBooking {
    /// Path to the compiled HotelBooking artifact (Hardhat/Foundry JSON or raw hex bytecode)
    #[clap(long)]
    pub artifact: PathBuf,

    /// Service endpoint URL the verification scope is bound to
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Human-readable label mixed into the scope
    #[clap(long, default_value = "Self-Hotel-Booking")]
    pub scope_label: String,

    /// Identity-document attestation scheme the proofs must satisfy
    #[clap(long, default_value_t = 1)]
    pub attestation_id: u64,

    /// Override the IdentityVerificationHub address for this chain
    #[clap(long)]
    pub hub_address: Option<Address>,

    /// Override the payment token address for this chain
    #[clap(long)]
    pub token_address: Option<Address>,

    /// Price of a bed in the boys' dorm, in token base units
    #[clap(long, default_value = "1000000")]
    pub boys_bed_price: U256,

    /// Price of a bed in the girls' dorm, in token base units
    #[clap(long, default_value = "1200000")]
    pub girls_bed_price: U256,

    /// Bed numbers assigned to the boys' dorm
    #[clap(long, value_delimiter = ',', default_value = "1,3,5,7")]
    pub boys_beds: Vec<U256>,

    /// Bed numbers assigned to the girls' dorm
    #[clap(long, value_delimiter = ',', default_value = "2,4,6,8")]
    pub girls_beds: Vec<U256>,

    /// Countries blocked from booking, as ISO 3166-1 alpha-3 codes
    #[clap(long = "forbid", value_delimiter = ',', default_value = "PRK,PAK")]
    pub forbidden_countries: Vec<Country>,

    /// Disable the OFAC sanctions-list checks
    #[clap(long)]
    pub no_ofac: bool,
}

impl DeployHotelBooking {
    /// Run the deploy hotel-booking command.
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        let deployment = global_config.deployment()?;
        let signer = global_config.require_private_key()?;
        let provider = global_config.provider()?;
        let display = DisplayManager::with_network(deployment.verify_network.to_string());

        display.header("Deploying HotelBooking");

        let deployer = signer.address();
        display.address("Deployer", deployer);

        let nonce = provider
            .get_transaction_count(deployer)
            .await
            .context("Failed to fetch account nonce")?;
        display.item("Nonce", nonce);

        // Informational only; stale as soon as any other transaction lands
        // from this account first.
        display.address("Predicted address", create_address(deployer, nonce));

        let balance =
            provider.get_balance(deployer).await.context("Failed to fetch account balance")?;
        display.balance("Balance", &format_ether(balance), "CELO");

        let scope = hash_endpoint_with_scope(&self.endpoint, &self.scope_label);
        display.item("Scope", scope);

        let forbidden = self.forbidden_countries.clone();
        display.item(
            "Blocking",
            if forbidden.is_empty() {
                "none".to_string()
            } else {
                forbidden.iter().map(|c| c.code()).collect::<Vec<_>>().join(", ")
            },
        );

        let gas_price =
            provider.get_gas_price().await.context("Failed to fetch gas price")?;
        let gas_price_gwei = format_units(U256::from(gas_price), "gwei")
            .context("Failed to format gas price")?;
        display.item("Gas price", format!("{gas_price_gwei} gwei"));

        let params = HotelBookingParams {
            hub_address: self.hub_address.unwrap_or(deployment.hub_address),
            scope,
            attestation_id: U256::from(self.attestation_id),
            token_address: self.token_address.unwrap_or(deployment.token_address),
            boys_bed_price: self.boys_bed_price,
            girls_bed_price: self.girls_bed_price,
            boys_beds: self.boys_beds.clone(),
            girls_beds: self.girls_beds.clone(),
            forbidden_countries_enabled: !forbidden.is_empty(),
            forbidden_countries_packed: countries::pack(forbidden),
            ofac_enabled: [!self.no_ofac; 3],
        };

        let artifact = ContractArtifact::from_path(&self.artifact)?;
        let deploy_code = artifact.deploy_code(&params.abi_encode());

        let (receipt, address) =
            deploy_contract(provider.clone(), deploy_code, global_config.tx_timeout)
                .await
                .context("HotelBooking deployment failed")?;
        display.tx_hash(receipt.transaction_hash);
        display.success(&format!("HotelBooking deployed to {address}"));

        // Read the restriction list back from chain as a sanity check.
        let hotel = IHotelBooking::new(address, &provider);
        let blocked = hotel
            .getBlockedCountries()
            .call()
            .await
            .context("Failed to query blocked countries")?;
        let raw: Vec<String> = blocked
            .iter()
            .map(|code| String::from_utf8_lossy(code.as_slice()).into_owned())
            .collect();
        display.item("Blocked countries", countries::format_blocked_countries(raw).join(", "));

        display.info(&format!("To verify on {}:", deployment.explorer_url));
        display.command(&format!(
            "npx hardhat verify --network {} {} {}",
            deployment.verify_network,
            address,
            params.verify_args()
        ));

        Ok(())
    }
}
