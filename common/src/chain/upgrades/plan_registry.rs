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

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use logging::log;

use crate::{chain::upgrades::Plan, primitives::BlockHeight};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PlanLocation {
    height: BlockHeight,
    index: usize,
}

/// Upgrade plans indexed both by name and by activation height.
///
/// Each name appears at most once. Plans sharing a height keep their insertion order.
/// The registry has no internal synchronization; it is meant to be filled once at startup
/// and then only read. Wrap it in a lock if it must be mutated concurrently.
#[derive(Debug, Clone, Default)]
pub struct PlanRegistry {
    locations: BTreeMap<String, PlanLocation>,
    // A bucket that loses all its plans stays in place, empty.
    buckets: BTreeMap<BlockHeight, Vec<Plan>>,
}

impl PlanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`PlanRegistry::set_plan`], but consumes and returns the registry.
    #[must_use]
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.set_plan(plan);
        self
    }

    /// Insert a plan, replacing any plan with the same name.
    ///
    /// A replacement at the same height keeps its position in the bucket; a replacement
    /// at a different height moves the plan to the end of the new height's bucket.
    pub fn set_plan(&mut self, plan: Plan) -> &mut Self {
        if let Some(location) = self.locations.get(plan.name()).copied() {
            if location.height == plan.height() {
                let slot = self
                    .buckets
                    .get_mut(&location.height)
                    .and_then(|bucket| bucket.get_mut(location.index));
                if let Some(slot) = slot {
                    log::debug!("Overwriting upgrade plan {plan}");
                    *slot = plan;
                    return self;
                }
            }

            if let Some(old) = self.take_at(location) {
                log::debug!("Moving upgrade plan {} to height {}", old, plan.height());
            }
        }

        let height = plan.height();
        let bucket = self.buckets.entry(height).or_default();
        let index = bucket.len();
        log::debug!("Scheduling upgrade plan {plan}");
        self.locations.insert(plan.name().to_owned(), PlanLocation { height, index });
        bucket.push(plan);

        self
    }

    /// Remove every plan scheduled exactly at `height`.
    pub fn clear(&mut self, height: BlockHeight) {
        if let Some(bucket) = self.buckets.get_mut(&height) {
            for plan in bucket.iter() {
                self.locations.remove(plan.name());
            }
            log::debug!(
                "Cleared {} upgrade plan(s) at height {height}",
                bucket.len()
            );
            bucket.clear();
        }
    }

    /// Plans scheduled at `height`, or else the bucket of the nearest height above it.
    ///
    /// The nearest bucket is returned as is, so a cleared height above `height` yields
    /// an empty slice even if later heights still hold plans.
    pub fn get_plan(&self, height: BlockHeight) -> &[Plan] {
        match self.buckets.get(&height) {
            Some(plans) if !plans.is_empty() => plans.as_slice(),
            _ => self
                .buckets
                .range((Excluded(height), Unbounded))
                .next()
                .map(|(_, plans)| plans.as_slice())
                .unwrap_or_default(),
        }
    }

    pub fn plan_by_name(&self, name: &str) -> Option<&Plan> {
        let location = self.locations.get(name)?;
        self.buckets.get(&location.height)?.get(location.index)
    }

    /// Whether some plan activates exactly at `height`.
    pub fn is_upgrade_height(&self, height: BlockHeight) -> bool {
        self.buckets.get(&height).is_some_and(|plans| !plans.is_empty())
    }

    /// Whether the named plan exists and has activated by `height`.
    pub fn is_activated(&self, name: &str, height: BlockHeight) -> bool {
        self.plan_by_name(name).is_some_and(|plan| height >= plan.height())
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All plans, ordered by height and then by insertion order within a height.
    pub fn iter(&self) -> impl Iterator<Item = &Plan> + '_ {
        self.buckets.values().flatten()
    }

    fn take_at(&mut self, location: PlanLocation) -> Option<Plan> {
        let bucket = self.buckets.get_mut(&location.height)?;
        if location.index >= bucket.len() {
            return None;
        }

        let removed = bucket.remove(location.index);
        for (index, shifted) in bucket.iter().enumerate().skip(location.index) {
            if let Some(shifted_location) = self.locations.get_mut(shifted.name()) {
                shifted_location.index = index;
            }
        }
        self.locations.remove(removed.name());

        Some(removed)
    }
}
