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

//! Names of the network upgrades known to this node.

/// Allows anyone to delegate to public validators.
pub const ENABLE_PUBLIC_DELEGATION_UPGRADE: &str = "EnablePublicDelegationUpgrade";

pub const NAGQU: &str = "Nagqu";

pub const PAMPAS: &str = "Pampas";
