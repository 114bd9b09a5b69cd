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

//! Typed bindings and constructor parameter bundles for the gated contracts.

use std::{fmt::Display, fs, path::Path};

use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolValue,
};
use anyhow::{bail, Context, Result};

use crate::countries::PACKED_WORDS;

alloy::sol! {
    /// The hotel-booking contract, gated on identity verification.
    #[sol(rpc)]
    interface IHotelBooking {
        /// Returns the blocked-country list as fixed-width codes, padded
        /// with NUL-byte entries up to the list capacity.
        function getBlockedCountries() external view returns (bytes3[] memory);
    }
}

/// Constructor parameters for the HotelBooking contract.
///
/// Built once per deployment and never mutated; encodes to the exact
/// constructor argument sequence the contract expects.
#[derive(Clone, Debug)]
pub struct HotelBookingParams {
    /// IdentityVerificationHub the contract delegates proof checks to.
    pub hub_address: Address,
    /// Scope binding proofs to this application.
    pub scope: U256,
    /// Identity-document scheme proofs must satisfy.
    pub attestation_id: U256,
    /// ERC-20 token bookings are paid in.
    pub token_address: Address,
    /// Price of a bed in the boys' dorm, in token base units.
    pub boys_bed_price: U256,
    /// Price of a bed in the girls' dorm, in token base units.
    pub girls_bed_price: U256,
    /// Bed numbers assigned to the boys' dorm.
    pub boys_beds: Vec<U256>,
    /// Bed numbers assigned to the girls' dorm.
    pub girls_beds: Vec<U256>,
    /// Whether the forbidden-country check is enforced.
    pub forbidden_countries_enabled: bool,
    /// Packed forbidden-country bitmap.
    pub forbidden_countries_packed: [U256; PACKED_WORDS],
    /// OFAC sanctions-list check switches.
    pub ofac_enabled: [bool; 3],
}

impl HotelBookingParams {
    /// ABI-encodes the constructor arguments, ready to append to the
    /// contract creation bytecode.
    pub fn abi_encode(&self) -> Vec<u8> {
        (
            self.hub_address,
            self.scope,
            self.attestation_id,
            self.token_address,
            self.boys_bed_price,
            self.girls_bed_price,
            self.boys_beds.clone(),
            self.girls_beds.clone(),
            self.forbidden_countries_enabled,
            self.forbidden_countries_packed,
            self.ofac_enabled,
        )
            .abi_encode_params()
    }

    /// Renders the constructor arguments as the explorer verification
    /// command expects them, array arguments quoted.
    pub fn verify_args(&self) -> String {
        format!(
            "{} {} {} {} {} {} \"[{}]\" \"[{}]\" {} \"[{}]\" \"[{}]\"",
            self.hub_address,
            self.scope,
            self.attestation_id,
            self.token_address,
            self.boys_bed_price,
            self.girls_bed_price,
            join(&self.boys_beds),
            join(&self.girls_beds),
            self.forbidden_countries_enabled,
            join(&self.forbidden_countries_packed),
            join(&self.ofac_enabled),
        )
    }
}

/// Constructor parameters for the SelfHappyBirthday contract.
#[derive(Clone, Debug)]
pub struct HappyBirthdayParams {
    /// IdentityVerificationHub the contract delegates proof checks to.
    pub hub_address: Address,
    /// Scope binding proofs to this application.
    pub scope: U256,
    /// Identity-document scheme proofs must satisfy.
    pub attestation_id: U256,
    /// ERC-20 token the birthday payout is made in.
    pub token_address: Address,
    /// Whether the minimum-age check is enforced.
    pub older_than_enabled: bool,
    /// Minimum age in years, if enforced.
    pub older_than: U256,
    /// Whether the forbidden-country check is enforced.
    pub forbidden_countries_enabled: bool,
    /// Packed forbidden-country bitmap.
    pub forbidden_countries_packed: [U256; PACKED_WORDS],
    /// OFAC sanctions-list check switches.
    pub ofac_enabled: [bool; 3],
}

impl HappyBirthdayParams {
    /// ABI-encodes the constructor arguments.
    pub fn abi_encode(&self) -> Vec<u8> {
        (
            self.hub_address,
            self.scope,
            self.attestation_id,
            self.token_address,
            self.older_than_enabled,
            self.older_than,
            self.forbidden_countries_enabled,
            self.forbidden_countries_packed,
            self.ofac_enabled,
        )
            .abi_encode_params()
    }

    /// Renders the constructor arguments for the verification command.
    pub fn verify_args(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} \"[{}]\" \"[{}]\"",
            self.hub_address,
            self.scope,
            self.attestation_id,
            self.token_address,
            self.older_than_enabled,
            self.older_than,
            self.forbidden_countries_enabled,
            join(&self.forbidden_countries_packed),
            join(&self.ofac_enabled),
        )
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values.iter().map(T::to_string).collect::<Vec<_>>().join(",")
}

/// Creation bytecode of a compiled contract, read from a build artifact.
///
/// This repository does not ship Solidity build output; callers point at a
/// Hardhat or Foundry artifact JSON, or at a plain hex file holding the
/// creation bytecode.
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The contract creation bytecode, without constructor arguments.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Reads and parses an artifact from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read artifact {}", path.display()))?;
        let bytecode = Self::parse(&contents)
            .with_context(|| format!("Failed to parse artifact {}", path.display()))?;
        tracing::debug!("Loaded {} bytes of creation bytecode from {}", bytecode.len(), path.display());
        Ok(Self { bytecode })
    }

    fn parse(contents: &str) -> Result<Bytes> {
        let contents = contents.trim();
        let hex_str = if contents.starts_with('{') {
            let artifact: serde_json::Value =
                serde_json::from_str(contents).context("artifact is not valid JSON")?;
            // Hardhat stores the bytecode as a string, Foundry as an object.
            match &artifact["bytecode"] {
                serde_json::Value::String(s) => s.clone(),
                obj @ serde_json::Value::Object(_) => match &obj["object"] {
                    serde_json::Value::String(s) => s.clone(),
                    _ => bail!("artifact bytecode object has no \"object\" field"),
                },
                _ => bail!("artifact has no \"bytecode\" field"),
            }
        } else {
            contents.to_string()
        };

        let bytes = hex::decode(hex_str.trim().trim_start_matches("0x"))
            .context("bytecode is not valid hex")?;
        if bytes.is_empty() {
            bail!("bytecode is empty; was the contract compiled?");
        }
        Ok(bytes.into())
    }

    /// Appends ABI-encoded constructor arguments, producing the deployment
    /// transaction input.
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(constructor_args);
        code.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{countries, deployments::ALFAJORES, Country};
    use std::io::Write;

    fn hotel_params() -> HotelBookingParams {
        HotelBookingParams {
            hub_address: ALFAJORES.hub_address,
            scope: U256::from(7u64),
            attestation_id: U256::from(1u64),
            token_address: ALFAJORES.token_address,
            boys_bed_price: U256::from(1_000_000u64),
            girls_bed_price: U256::from(1_200_000u64),
            boys_beds: [1u64, 3, 5, 7].map(U256::from).to_vec(),
            girls_beds: [2u64, 4, 6, 8].map(U256::from).to_vec(),
            forbidden_countries_enabled: true,
            forbidden_countries_packed: countries::pack([Country::NorthKorea, Country::Pakistan]),
            ofac_enabled: [true, true, true],
        }
    }

    #[test]
    fn hotel_encoding_starts_with_hub_word() {
        let encoded = hotel_params().abi_encode();
        // Static head words; the hub address is left-padded into the first.
        assert_eq!(&encoded[12..32], ALFAJORES.hub_address.as_slice());
        assert_eq!(encoded.len() % 32, 0);
    }

    #[test]
    fn hotel_verify_args_shape() {
        let params = hotel_params();
        let args = params.verify_args();
        assert!(args.contains("\"[1,3,5,7]\""));
        assert!(args.contains("\"[2,4,6,8]\""));
        assert!(args.ends_with("\"[true,true,true]\""));
        assert!(args.starts_with(&params.hub_address.to_string()));
    }

    #[test]
    fn birthday_encoding_is_headless_static() {
        let params = HappyBirthdayParams {
            hub_address: ALFAJORES.hub_address,
            scope: U256::from(7u64),
            attestation_id: U256::from(1u64),
            token_address: ALFAJORES.token_address,
            older_than_enabled: false,
            older_than: U256::from(18u64),
            forbidden_countries_enabled: false,
            forbidden_countries_packed: countries::pack([]),
            ofac_enabled: [false, false, false],
        };
        // All-static argument list: 7 scalar words + 4 packed + 3 ofac.
        assert_eq!(params.abi_encode().len(), 14 * 32);
    }

    #[test]
    fn parses_raw_hex_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0x6080604052").unwrap();
        let artifact = ContractArtifact::from_path(file.path()).unwrap();
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn parses_hardhat_and_foundry_artifacts() {
        let mut hardhat = tempfile::NamedTempFile::new().unwrap();
        write!(hardhat, r#"{{"abi": [], "bytecode": "0x60016002"}}"#).unwrap();
        let artifact = ContractArtifact::from_path(hardhat.path()).unwrap();
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x01, 0x60, 0x02]);

        let mut foundry = tempfile::NamedTempFile::new().unwrap();
        write!(foundry, r#"{{"bytecode": {{"object": "0x600a"}}}}"#).unwrap();
        let artifact = ContractArtifact::from_path(foundry.path()).unwrap();
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x0a]);
    }

    #[test]
    fn deploy_code_appends_constructor_args() {
        let artifact = ContractArtifact { bytecode: vec![0xfe].into() };
        let args = hotel_params().abi_encode();
        let code = artifact.deploy_code(&args);
        assert_eq!(code[0], 0xfe);
        assert_eq!(&code[1..], args.as_slice());
    }
}
