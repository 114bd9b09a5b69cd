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

//! Contract deployment helpers.

use std::time::Duration;

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use anyhow::{ensure, Context, Result};

/// Submits a contract deployment transaction and waits for its receipt.
///
/// `deploy_code` is the creation bytecode with constructor arguments already
/// appended. Returns the receipt together with the address the contract was
/// created at.
pub async fn deploy_contract<P>(
    provider: P,
    deploy_code: Bytes,
    timeout: Option<Duration>,
) -> Result<(TransactionReceipt, Address)>
where
    P: Provider<Ethereum> + Clone + 'static,
{
    let tx = TransactionRequest::default().with_deploy_code(deploy_code);
    let pending = provider
        .send_transaction(tx)
        .await
        .context("Failed to submit deployment transaction")?;
    tracing::debug!("Deployment transaction submitted: {:#x}", pending.tx_hash());

    let receipt = confirm_transaction(pending, timeout, 1).await?;
    let address = receipt
        .contract_address
        .context("Deployment receipt carries no contract address")?;
    Ok((receipt, address))
}

/// Waits for a submitted transaction to reach the given number of
/// confirmations, failing if it reverts.
pub async fn confirm_transaction(
    pending: PendingTransactionBuilder<Ethereum>,
    timeout: Option<Duration>,
    confirmations: u64,
) -> Result<TransactionReceipt> {
    let tx_hash = *pending.tx_hash();

    let receipt = pending
        .with_required_confirmations(confirmations)
        .with_timeout(timeout)
        .get_receipt()
        .await
        .with_context(|| format!("Failed to get receipt for transaction {:#x}", tx_hash))?;

    ensure!(receipt.status(), "Transaction reverted: {:#x}", receipt.transaction_hash);

    Ok(receipt)
}
