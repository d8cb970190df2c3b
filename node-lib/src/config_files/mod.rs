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

//! The upgrades configuration file.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use common::{
    chain::{Plan, PlanRegistry},
    primitives::BlockHeight,
};
use logging::log;

pub const UPGRADES_CONFIG_NAME: &str = "upgrades.toml";

/// A plan entry in the config file.
#[must_use]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PlanConfigFile {
    pub name: String,
    pub height: BlockHeight,
    pub info: Option<String>,
}

impl From<PlanConfigFile> for Plan {
    fn from(config: PlanConfigFile) -> Self {
        let PlanConfigFile { name, height, info } = config;
        Plan::new(name, height, info.unwrap_or_default())
    }
}

/// Overrides applied on top of the network's default upgrade schedule.
#[must_use]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UpgradesConfigFile {
    /// Heights whose default plans are dropped.
    pub clear_heights: Option<Vec<BlockHeight>>,
    /// Plans scheduled in addition to, or instead of, the defaults with the same name.
    pub plans: Option<Vec<PlanConfigFile>>,
}

impl UpgradesConfigFile {
    fn read_to_string_with_policy<P: AsRef<Path>>(config_path: P) -> Result<String> {
        let config_as_str = if config_path.as_ref().exists() {
            fs::read_to_string(config_path.as_ref()).context(format!(
                "Unable to read config file in {}",
                config_path.as_ref().display()
            ))?
        } else {
            log::debug!(
                "No upgrades config at {}, using defaults",
                config_path.as_ref().display()
            );
            "".into()
        };
        Ok(config_as_str)
    }

    /// Reads the config from the specified path. A missing file is treated as an empty one.
    pub fn read(config_path: &Path) -> Result<Self> {
        let config_as_str = Self::read_to_string_with_policy(config_path)?;
        toml::from_str(&config_as_str).context(format!(
            "Failed to parse upgrades config {}",
            config_path.display()
        ))
    }

    /// Clears first, then sets the plans in file order.
    pub fn apply(self, mut registry: PlanRegistry) -> PlanRegistry {
        let UpgradesConfigFile {
            clear_heights,
            plans,
        } = self;

        for height in clear_heights.unwrap_or_default() {
            registry.clear(height);
        }
        for plan in plans.unwrap_or_default() {
            registry.set_plan(plan.into());
        }

        registry
    }
}
