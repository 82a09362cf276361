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

/// The interval, in days, that was in effect when a card was last
/// scheduled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReviewInterval {
    /// The card has never been reviewed. Distinct from `Days(0)`, which
    /// marks a card that was reviewed and re-queued for the same day.
    New,
    /// The card was last scheduled this many days out.
    Days(u32),
}

impl ReviewInterval {
    pub fn is_new(&self) -> bool {
        matches!(self, ReviewInterval::New)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_new() {
        assert!(ReviewInterval::New.is_new());
        assert!(!ReviewInterval::Days(0).is_new());
        assert!(!ReviewInterval::Days(5).is_new());
    }
}
