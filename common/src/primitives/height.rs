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

use std::fmt;

use serde::{Deserialize, Serialize};

/// Height of a block in the chain, counted from genesis at zero.
#[derive(
    Debug, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(u64);

impl BlockHeight {
    const ZERO: BlockHeight = BlockHeight(0);
    const ONE: BlockHeight = BlockHeight(1);
    const MAX: BlockHeight = BlockHeight(u64::MAX);

    pub const fn new(height: u64) -> BlockHeight {
        BlockHeight(height)
    }

    pub const fn zero() -> BlockHeight {
        Self::ZERO
    }

    pub const fn one() -> BlockHeight {
        Self::ONE
    }

    pub const fn max() -> BlockHeight {
        Self::MAX
    }

    pub const fn into_int(self) -> u64 {
        self.0
    }

    pub fn checked_add(&self, rhs: u64) -> Option<Self> {
        self.0.checked_add(rhs).map(BlockHeight::new)
    }

    pub fn checked_sub(&self, rhs: u64) -> Option<Self> {
        self.0.checked_sub(rhs).map(BlockHeight::new)
    }

    /// The height right after this one; `None` at the maximum height.
    pub fn next_height(&self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        BlockHeight(height)
    }
}

impl From<BlockHeight> for u64 {
    fn from(height: BlockHeight) -> Self {
        height.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
