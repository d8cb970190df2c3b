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

//! Loading the network upgrade schedule a node runs with.

mod config_files;
mod options;
mod runner;

pub use config_files::{PlanConfigFile, UpgradesConfigFile, UPGRADES_CONFIG_NAME};
pub use options::{PlanArg, PlanArgParseError, UpgradeOptions};
pub use runner::load_upgrade_plans;
