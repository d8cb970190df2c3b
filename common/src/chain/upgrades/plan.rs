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

use serde::{Deserialize, Serialize};

use crate::primitives::BlockHeight;

/// A named upgrade that activates at a given block height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    name: String,
    height: BlockHeight,
    #[serde(default)]
    info: String,
}

impl Plan {
    pub fn new(name: impl Into<String>, height: BlockHeight, info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height,
            info: info.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> BlockHeight {
        self.height
    }

    /// Free-form description; has no effect on lookups.
    pub fn info(&self) -> &str {
        &self.info
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.height)
    }
}
