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

//! Scope computation.

use anyhow::Result;
use clap::Args;
use selfgate::hash_endpoint_with_scope;

use crate::{config::GlobalConfig, display::DisplayManager};

/// Compute the verification scope for an endpoint and label.
#[derive(Args, Clone, Debug)]
pub struct ScopeArgs {
    /// Service endpoint URL
    pub endpoint: String,

    /// Human-readable application label
    pub label: String,
}

impl ScopeArgs {
    /// Run the scope command.
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let display = DisplayManager::new();
        display.item("Scope", hash_endpoint_with_scope(&self.endpoint, &self.label));
        Ok(())
    }
}
