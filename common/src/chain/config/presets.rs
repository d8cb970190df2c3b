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

use crate::{
    chain::{
        config::ChainType,
        upgrades::{
            names::{NAGQU, PAMPAS},
            Plan, PlanRegistry,
        },
    },
    primitives::BlockHeight,
};

impl ChainType {
    /// The upgrade schedule every node of this network ships with.
    pub fn default_upgrade_plans(&self) -> PlanRegistry {
        match self {
            ChainType::Mainnet => PlanRegistry::new().with_plan(Plan::new(
                NAGQU,
                BlockHeight::new(1),
                "Nagqu hardfork",
            )),
            ChainType::Testnet => PlanRegistry::new()
                .with_plan(Plan::new(
                    NAGQU,
                    BlockHeight::new(471350),
                    "Nagqu hardfork",
                ))
                .with_plan(Plan::new(
                    PAMPAS,
                    BlockHeight::new(2427233),
                    "Pampas hardfork",
                )),
        }
    }
}
