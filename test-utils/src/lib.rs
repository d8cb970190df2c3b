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

pub mod random;

use randomness::distributions::uniform::SampleRange;
use randomness::Rng;

pub fn random_ascii_alphanumeric_string<R: SampleRange<usize>>(
    rng: &mut impl Rng,
    range_len: R,
) -> String {
    use randomness::distributions::{Alphanumeric, DistString};
    if range_len.is_empty() {
        return String::new();
    }
    let len = rng.gen_range(range_len);
    Alphanumeric.sample_string(rng, len)
}

/// Pick one of the given names; tests use small name pools so that collisions happen often.
pub fn pick_one<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "cannot pick from an empty slice");
    &items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{make_seedable_rng, Seed};

    #[test]
    fn string_length_within_range() {
        let mut rng = make_seedable_rng(Seed::from_u64(42));
        for _ in 0..100 {
            let s = random_ascii_alphanumeric_string(&mut rng, 3..8);
            assert!((3..8).contains(&s.len()));
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
        assert!(random_ascii_alphanumeric_string(&mut rng, 0..0).is_empty());
    }

    #[test]
    fn pick_one_stays_in_bounds() {
        let mut rng = make_seedable_rng(Seed::from_u64(7));
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(items.contains(pick_one(&mut rng, &items)));
        }
    }
}
