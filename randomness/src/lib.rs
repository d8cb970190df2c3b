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

//! All randomness used across the workspace goes through this crate.

pub use rand::{distributions, seq, Rng, RngCore, SeedableRng};

/// A generator seeded from the operating system, for when reproducibility does not matter.
#[must_use]
pub fn make_true_rng() -> impl Rng {
    rand::rngs::StdRng::from_entropy()
}
