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

//! Per-chain deployment constants.

use std::borrow::Cow;

use alloy::primitives::{address, Address};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub use alloy_chains::NamedChain;

/// Per-chain constants for a deployment of the identity-verification stack.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct Deployment {
    /// Chain ID of the target network.
    pub chain_id: u64,

    /// Address of the IdentityVerificationHub contract.
    ///
    /// The hub is deployed and operated by the identity-verification
    /// provider; gated contracts delegate proof verification to it.
    pub hub_address: Address,

    /// Address of the ERC-20 token payments are settled in.
    pub token_address: Address,

    /// Network name the explorer verification plugin expects.
    #[builder(setter(into))]
    pub verify_network: Cow<'static, str>,

    /// Block-explorer API endpoint used for contract verification.
    #[builder(setter(into))]
    pub explorer_api_url: Cow<'static, str>,

    /// Block-explorer browser URL.
    #[builder(setter(into))]
    pub explorer_url: Cow<'static, str>,
}

impl Deployment {
    /// Create a new [DeploymentBuilder].
    pub fn builder() -> DeploymentBuilder {
        Default::default()
    }

    /// Lookup the [Deployment] for a named chain.
    pub const fn from_chain(chain: NamedChain) -> Option<Deployment> {
        match chain {
            NamedChain::CeloAlfajores => Some(ALFAJORES),
            _ => None,
        }
    }

    /// Lookup the [Deployment] by chain ID.
    pub fn from_chain_id(chain_id: impl Into<u64>) -> Option<Deployment> {
        let chain = NamedChain::try_from(chain_id.into()).ok()?;
        Self::from_chain(chain)
    }
}

/// [Deployment] for the Celo Alfajores testnet.
pub const ALFAJORES: Deployment = Deployment {
    chain_id: 44787,
    hub_address: address!("0x3e2487a250e2A7b56c7ef5307Fb591Cc8C83623D"),
    token_address: address!("0x96CFA0E76Bd15d99A1230CA3955be5E677B746a6"),
    verify_network: Cow::Borrowed("celo"),
    explorer_api_url: Cow::Borrowed("https://api-alfajores.celoscan.io/api"),
    explorer_url: Cow::Borrowed("https://alfajores.celoscan.io"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alfajores_resolves_by_chain_id() {
        let deployment = Deployment::from_chain_id(44787u64).unwrap();
        assert_eq!(deployment, ALFAJORES);
        assert!(Deployment::from_chain_id(1u64).is_none());
    }

    #[test]
    fn builder_fills_custom_deployments() {
        let deployment = Deployment::builder()
            .chain_id(42220u64)
            .hub_address(ALFAJORES.hub_address)
            .token_address(ALFAJORES.token_address)
            .verify_network("celo")
            .explorer_api_url("https://api.celoscan.io/api")
            .explorer_url("https://celoscan.io")
            .build()
            .unwrap();
        assert_eq!(deployment.chain_id, 42220);
    }
}
