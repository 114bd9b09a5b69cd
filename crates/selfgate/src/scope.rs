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

//! Scope derivation.

use alloy::primitives::{keccak256, U256};

/// Derives the numeric scope binding a verification proof to an application.
///
/// The scope is the keccak256 digest of `endpoint:label`, right-shifted by
/// one byte so the result fits in 248 bits and can be carried as a field
/// element by the verification circuits. Both inputs are hashed verbatim;
/// `https://a.example` and `https://a.example/` are distinct scopes.
pub fn hash_endpoint_with_scope(endpoint: &str, label: &str) -> U256 {
    let digest = keccak256([endpoint.as_bytes(), b":", label.as_bytes()].concat());
    U256::from_be_bytes(digest.0) >> 8
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://f2a6-2a09-bac5-5907-323-00-50-7f.ngrok-free.app";

    #[test]
    fn deterministic() {
        assert_eq!(
            hash_endpoint_with_scope(ENDPOINT, "Self-Hotel-Booking"),
            hash_endpoint_with_scope(ENDPOINT, "Self-Hotel-Booking"),
        );
    }

    #[test]
    fn label_and_endpoint_both_bind() {
        let hotel = hash_endpoint_with_scope(ENDPOINT, "Self-Hotel-Booking");
        let birthday = hash_endpoint_with_scope(ENDPOINT, "Self-Denver-Birthday");
        let other_endpoint = hash_endpoint_with_scope("https://example.com", "Self-Hotel-Booking");
        assert_ne!(hotel, birthday);
        assert_ne!(hotel, other_endpoint);
    }

    #[test]
    fn fits_in_a_field_element() {
        let scope = hash_endpoint_with_scope(ENDPOINT, "Self-Hotel-Booking");
        assert!(scope < U256::from(1u64) << 248);
        assert_ne!(scope, U256::ZERO);
    }
}
