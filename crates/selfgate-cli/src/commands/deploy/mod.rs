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

//! Contract deployment commands.

mod happy_birthday;
mod hotel_booking;

use anyhow::Result;
use clap::Subcommand;

pub use happy_birthday::DeployHappyBirthday;
pub use hotel_booking::DeployHotelBooking;

use crate::config::GlobalConfig;

/// Default service endpoint the verification scope is bound to.
pub const DEFAULT_ENDPOINT: &str = "https://f2a6-2a09-bac5-5907-323-00-50-7f.ngrok-free.app";

/// Commands deploying a gated contract.
#[derive(Subcommand, Clone, Debug)]
pub enum DeployCommands {
    /// Deploy the HotelBooking contract
    HotelBooking(Box<DeployHotelBooking>),

    /// Deploy the SelfHappyBirthday contract
    HappyBirthday(Box<DeployHappyBirthday>),
}

impl DeployCommands {
    /// Run the deploy command.
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        match self {
            Self::HotelBooking(cmd) => cmd.run(global_config).await,
            Self::HappyBirthday(cmd) => cmd.run(global_config).await,
        }
    }
}
