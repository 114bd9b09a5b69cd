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

//! SDK for deploying identity-verification-gated contracts.
//!
//! Provides the pure building blocks the deployment tooling is made of:
//! scope derivation ([`scope`]), forbidden-country bitmaps ([`countries`]),
//! deterministic CREATE-address prediction ([`create`]), per-chain deployment
//! constants ([`deployments`]), and typed constructor parameter bundles for
//! the gated contracts ([`contracts`]).

#![deny(missing_docs)]

pub mod contracts;
pub mod countries;
pub mod create;
pub mod deployments;
pub mod scope;

pub use countries::Country;
pub use create::create_address;
pub use deployments::Deployment;
pub use scope::hash_endpoint_with_scope;
