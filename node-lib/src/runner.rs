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

use anyhow::Result;

use common::chain::PlanRegistry;
use logging::log;

use crate::{config_files::UpgradesConfigFile, options::UpgradeOptions};

/// Build the upgrade schedule: network defaults, then the config file, then command line plans.
pub fn load_upgrade_plans(options: &UpgradeOptions) -> Result<PlanRegistry> {
    let mut plans = options.chain.default_upgrade_plans();

    if let Some(config_path) = &options.upgrades_config {
        plans = UpgradesConfigFile::read(config_path)?.apply(plans);
    }

    for plan_arg in &options.plans {
        plans.set_plan(plan_arg.to_plan());
    }

    log::info!(
        "Loaded {} upgrade plan(s) for {} ({})",
        plans.len(),
        options.chain,
        options.chain.chain_id()
    );
    for plan in plans.iter() {
        log::info!("Upgrade {} activates at height {}", plan.name(), plan.height());
    }

    Ok(plans)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use common::{
        chain::upgrades::names::{NAGQU, PAMPAS},
        primitives::BlockHeight,
    };

    use super::*;
    use crate::config_files::UPGRADES_CONFIG_NAME;

    #[test]
    fn defaults_only() {
        logging::init_logging();

        let options = UpgradeOptions::from_args(["node", "--chain", "testnet"]);
        let plans = load_upgrade_plans(&options).unwrap();

        assert_eq!(plans.get_plan(BlockHeight::new(471351))[0].name(), PAMPAS);
        assert_eq!(plans.len(), 2);
    }

    #[test]
    fn command_line_wins_over_config_file() {
        logging::init_logging();

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(UPGRADES_CONFIG_NAME);
        fs::write(
            &path,
            "[[plans]]\nname = \"Nagqu\"\nheight = 5\n\n[[plans]]\nname = \"Other\"\nheight = 8\n",
        )
        .unwrap();

        let path_str = path.to_str().unwrap();
        let options = UpgradeOptions::from_args([
            "node",
            "--upgrades-config",
            path_str,
            "--plan",
            "Nagqu@7",
        ]);
        let plans = load_upgrade_plans(&options).unwrap();

        let names: Vec<_> = plans.iter().map(|p| (p.name(), p.height().into_int())).collect();
        assert_eq!(names, [(NAGQU, 7), ("Other", 8)]);
        assert!(plans.get_plan(BlockHeight::new(9)).is_empty());
    }

    #[test]
    fn broken_config_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(UPGRADES_CONFIG_NAME);
        fs::write(&path, "clear_heights = \"all\"").unwrap();

        let options =
            UpgradeOptions::from_args(["node", "--upgrades-config", path.to_str().unwrap()]);
        assert!(load_upgrade_plans(&options).is_err());
    }
}
