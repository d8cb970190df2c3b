// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod presets;

use std::str::FromStr;

use thiserror::Error;

pub const MAINNET_CHAIN_ID: &str = "greenfield_1017-1";
pub const TESTNET_CHAIN_ID: &str = "greenfield_5600-1";

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ChainConfigError {
    #[error("Unknown chain id: {0}")]
    UnknownChainId(String),
    #[error("Unknown chain: {0}; expected a chain name or a chain id")]
    UnknownChain(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChainType {
    Mainnet,
    Testnet,
}

impl ChainType {
    pub const ALL: [ChainType; 2] = [ChainType::Mainnet, ChainType::Testnet];

    pub const fn name(&self) -> &'static str {
        match self {
            ChainType::Mainnet => "mainnet",
            ChainType::Testnet => "testnet",
        }
    }

    pub const fn chain_id(&self) -> &'static str {
        match self {
            ChainType::Mainnet => MAINNET_CHAIN_ID,
            ChainType::Testnet => TESTNET_CHAIN_ID,
        }
    }

    pub fn from_chain_id(chain_id: &str) -> Result<Self, ChainConfigError> {
        Self::ALL
            .into_iter()
            .find(|chain_type| chain_type.chain_id() == chain_id)
            .ok_or_else(|| ChainConfigError::UnknownChainId(chain_id.to_owned()))
    }
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the chain name (case-insensitive) or the chain id.
impl FromStr for ChainType {
    type Err = ChainConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        match Self::ALL.into_iter().find(|chain_type| chain_type.name() == lowered) {
            Some(chain_type) => Ok(chain_type),
            None => Self::from_chain_id(s)
                .map_err(|_| ChainConfigError::UnknownChain(s.to_owned())),
        }
    }
}
