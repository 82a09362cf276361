// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::VecDeque;

/// A minimal, zero-dependency, completely insecure PRNG to shuffle the
/// review order.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    // Generate random number in range [0, max).
    pub fn generate(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Fisher-Yates shuffle, in place. Every permutation of the deque is
/// equally likely.
pub fn shuffle<T>(v: &mut VecDeque<T>, rng: &mut TinyRng) {
    for i in (1..v.len()).rev() {
        let j = rng.generate(i as u32 + 1) as usize;
        v.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = TinyRng::from_seed(17);
        let mut b = TinyRng::from_seed(17);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_generate_stays_in_range() {
        let mut rng = TinyRng::from_seed(42);
        for _ in 0..1000 {
            assert!(rng.generate(7) < 7);
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = TinyRng::from_seed(99);
        let mut v: VecDeque<u32> = (0..50).collect();
        shuffle(&mut v, &mut rng);
        let mut sorted: Vec<u32> = v.iter().copied().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut a: VecDeque<u32> = (0..20).collect();
        let mut b: VecDeque<u32> = (0..20).collect();
        shuffle(&mut a, &mut TinyRng::from_seed(7));
        shuffle(&mut b, &mut TinyRng::from_seed(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_tiny_inputs() {
        let mut rng = TinyRng::from_seed(1);
        let mut empty: VecDeque<u32> = VecDeque::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());
        let mut single: VecDeque<u32> = VecDeque::from([9]);
        shuffle(&mut single, &mut rng);
        assert_eq!(single, VecDeque::from([9]));
    }
}
