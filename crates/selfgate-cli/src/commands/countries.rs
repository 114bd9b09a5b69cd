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

//! Forbidden-country bitmap utilities.

use anyhow::Result;
use clap::{Args, Subcommand};
use selfgate::{countries, Country};

use crate::{config::GlobalConfig, display::DisplayManager};

/// Forbidden-country bitmap utilities.
#[derive(Subcommand, Clone, Debug)]
pub enum CountriesCommands {
    /// Pack a forbidden-country list into the contract bitmap
    Pack(CountriesPack),

    /// List all known country codes
    List,
}

impl CountriesCommands {
    /// Run the countries command.
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        match self {
            Self::Pack(cmd) => cmd.run(),
            Self::List => {
                for chunk in Country::ALL.chunks(16) {
                    println!("{}", chunk.iter().map(|c| c.code()).collect::<Vec<_>>().join(" "));
                }
                Ok(())
            }
        }
    }
}

/// Pack a forbidden-country list into the contract bitmap.
#[derive(Args, Clone, Debug)]
pub struct CountriesPack {
    /// Countries to forbid, as ISO 3166-1 alpha-3 codes
    #[clap(value_delimiter = ',', required = true)]
    pub countries: Vec<Country>,
}

impl CountriesPack {
    fn run(&self) -> Result<()> {
        let packed = countries::pack(self.countries.iter().copied());
        let display = DisplayManager::new();

        display.item(
            "Forbidden",
            countries::unpack(&packed)
                .iter()
                .map(|c| c.code())
                .collect::<Vec<_>>()
                .join(", "),
        );
        for (i, word) in packed.iter().enumerate() {
            display.item(&format!("Word {i}"), word);
        }

        Ok(())
    }
}
