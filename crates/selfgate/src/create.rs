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

//! Deterministic CREATE address prediction.

use alloy::primitives::{keccak256, Address};

/// Computes the address of the next contract created by `sender` at `nonce`.
///
/// This is the standard account-based CREATE derivation: the low 20 bytes of
/// `keccak256(rlp([sender, nonce]))`. The nonce must be the sender's pending
/// transaction count at the moment the deployment transaction lands; any
/// other transaction submitted from the same account first makes the
/// prediction stale. Callers use this for logging ahead of a deployment, not
/// as a guarantee.
pub fn create_address(sender: Address, nonce: u64) -> Address {
    // RLP of [sender, nonce]. The address item is 21 bytes and the nonce item
    // at most 9, so the list payload is always below the 56-byte short-form
    // threshold.
    let mut payload = Vec::with_capacity(30);
    payload.push(0x80 + 20);
    payload.extend_from_slice(sender.as_slice());
    rlp_append_u64(&mut payload, nonce);

    let mut encoded = Vec::with_capacity(payload.len() + 1);
    encoded.push(0xc0 + payload.len() as u8);
    encoded.extend_from_slice(&payload);

    Address::from_slice(&keccak256(&encoded)[12..])
}

/// Appends the RLP encoding of an unsigned integer: zero is the empty string,
/// a single byte below 0x80 is itself, anything else is length-prefixed
/// big-endian with leading zeros stripped.
fn rlp_append_u64(out: &mut Vec<u8>, value: u64) {
    if value == 0 {
        out.push(0x80);
    } else if value < 0x80 {
        out.push(value as u8);
    } else {
        let bytes = value.to_be_bytes();
        let skip = bytes.iter().take_while(|b| **b == 0).count();
        out.push(0x80 + (8 - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn known_vectors() {
        // Well-known derivation vectors for 0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0.
        let sender = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");
        assert_eq!(
            create_address(sender, 0),
            address!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d")
        );
        assert_eq!(
            create_address(sender, 1),
            address!("343c43a37d37dff08ae8c4a11544c718abb4fcf8")
        );
    }

    #[test]
    fn agrees_with_alloy_for_all_nonce_widths() {
        let sender = address!("3e2487a250e2A7b56c7ef5307Fb591Cc8C83623D");
        for nonce in [0u64, 1, 0x7f, 0x80, 0xff, 0x100, 0xffff, 1 << 32, u64::MAX] {
            assert_eq!(create_address(sender, nonce), sender.create(nonce), "nonce {nonce}");
        }
    }

    #[test]
    fn deterministic() {
        let sender = address!("96CFA0E76Bd15d99A1230CA3955be5E677B746a6");
        assert_eq!(create_address(sender, 42), create_address(sender, 42));
    }
}
