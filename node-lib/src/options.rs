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

//! The command line options that shape the upgrade schedule.

use std::{ffi::OsString, path::PathBuf, str::FromStr};

use clap::Parser;
use thiserror::Error;

use common::{
    chain::{config::ChainType, Plan},
    primitives::BlockHeight,
};

/// Options selecting the network upgrade schedule
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about)]
pub struct UpgradeOptions {
    /// The network whose default upgrade schedule is loaded: a chain name or a chain id.
    #[clap(long, default_value_t = ChainType::Mainnet)]
    pub chain: ChainType,

    /// Path to a TOML file that overrides the default schedule.
    #[clap(long, value_name = "PATH")]
    pub upgrades_config: Option<PathBuf>,

    /// Schedule an upgrade, applied after the config file. Can be repeated.
    #[clap(long = "plan", value_name = "NAME@HEIGHT")]
    pub plans: Vec<PlanArg>,
}

impl UpgradeOptions {
    /// Constructs an instance by parsing the given arguments.
    pub fn from_args<A: Into<OsString> + Clone>(args: impl IntoIterator<Item = A>) -> Self {
        Self::parse_from(args)
    }
}

/// A plan given on the command line as `NAME@HEIGHT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanArg {
    pub name: String,
    pub height: BlockHeight,
}

impl PlanArg {
    pub fn to_plan(&self) -> Plan {
        Plan::new(self.name.clone(), self.height, "set from the command line")
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanArgParseError {
    #[error("Expected NAME@HEIGHT, got '{0}'")]
    MissingSeparator(String),
    #[error("Empty plan name in '{0}'")]
    EmptyName(String),
    #[error("Invalid height in '{0}': {1}")]
    InvalidHeight(String, std::num::ParseIntError),
}

impl FromStr for PlanArg {
    type Err = PlanArgParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, height) = s
            .rsplit_once('@')
            .ok_or_else(|| PlanArgParseError::MissingSeparator(s.to_owned()))?;
        if name.is_empty() {
            return Err(PlanArgParseError::EmptyName(s.to_owned()));
        }
        let height = height
            .parse::<u64>()
            .map_err(|e| PlanArgParseError::InvalidHeight(s.to_owned(), e))?;

        Ok(Self {
            name: name.to_owned(),
            height: BlockHeight::new(height),
        })
    }
}
