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

use revoir_core::catalog::Card;
use revoir_core::catalog::CardCatalog;

/// Build a catalog from (title, front, back) triples.
pub fn catalog_of(cards: &[(&str, &str, &str)]) -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for (title, front, back) in cards {
        assert!(catalog.register(Card::new(*title, *front, *back)));
    }
    catalog
}

/// The standard five-card test catalog.
pub fn sample_catalog() -> CardCatalog {
    catalog_of(&[
        ("Alpha", "front a", "back a"),
        ("Beta", "front b", "back b"),
        ("Gamma", "front c", "back c"),
        ("Delta", "front d", "back d"),
        ("Echo", "front e", "back e"),
    ])
}
