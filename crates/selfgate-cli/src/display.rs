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

//! Consistent formatting for CLI output.

use std::fmt::Display;

use alloy::primitives::{Address, B256};
use colored::Colorize;

/// Standard display formatter for CLI output.
pub struct DisplayManager {
    network: Option<String>,
}

impl DisplayManager {
    /// Create a display manager with no network context.
    pub fn new() -> Self {
        Self { network: None }
    }

    /// Create a display manager with a network badge shown in headers.
    pub fn with_network(network: impl Into<String>) -> Self {
        Self { network: Some(network.into()) }
    }

    /// Print a section header with the optional network badge.
    pub fn header(&self, title: &str) {
        match &self.network {
            Some(network) => println!("\n{} [{}]", title.bold(), network.blue().bold()),
            None => println!("\n{}", title.bold()),
        }
    }

    /// Print a labeled value with standard indentation.
    pub fn item(&self, label: &str, value: impl Display) {
        println!("  {:<20} {}", format!("{}:", label), value);
    }

    /// Print a labeled address.
    pub fn address(&self, label: &str, address: Address) {
        self.item(label, format!("{:#x}", address).dimmed());
    }

    /// Print a labeled balance with its token symbol.
    pub fn balance(&self, label: &str, amount: &str, symbol: &str) {
        println!("  {:<20} {} {}", format!("{}:", label), amount.green().bold(), symbol.green());
    }

    /// Print a transaction hash.
    pub fn tx_hash(&self, hash: B256) {
        self.item("Transaction", format!("{:#x}", hash).cyan());
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        println!("\n{} {}", "✓".green().bold(), message.green().bold());
    }

    /// Print a warning message.
    pub fn warning(&self, message: &str) {
        println!("\n{} {}", "⚠".yellow(), message.yellow());
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        println!("\n{} {}", "ℹ".blue(), message);
    }

    /// Print a shell command the user is expected to copy.
    pub fn command(&self, command: &str) {
        println!("\n  {}", command.cyan());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
