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

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use serde::Deserialize;
use serde::de;
use serde::de::MapAccess;
use serde::de::Visitor;

/// A flashcard: a unique title and two sides of text. Immutable once
/// registered with a [`CardCatalog`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Card {
    title: String,
    front: String,
    back: String,
}

impl Card {
    pub fn new(
        title: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

/// The set of all known cards, keyed by title.
#[derive(Default, Debug)]
pub struct CardCatalog {
    cards: HashMap<String, Card>,
}

impl CardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card. Returns false, leaving the catalog untouched, if
    /// a card with the same title is already present.
    pub fn register(&mut self, card: Card) -> bool {
        match self.cards.entry(card.title().to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(card);
                true
            }
        }
    }

    pub fn lookup(&self, title: &str) -> Option<&Card> {
        self.cards.get(title)
    }

    /// All cards, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The catalog's JSON form is a map from title to a `[front, back]`
/// pair. Deserialization streams the entries so that a duplicate title
/// is an error rather than a silently collapsed key.
impl<'de> Deserialize<'de> for CardCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = CardCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a map from card title to a [front, back] pair")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = CardCatalog::new();
                while let Some((title, (front, back))) =
                    map.next_entry::<String, (String, String)>()?
                {
                    if title.is_empty() {
                        return Err(de::Error::custom("empty card title"));
                    }
                    if front.is_empty() || back.is_empty() {
                        return Err(de::Error::custom(format!(
                            "card `{title}` has an empty side"
                        )));
                    }
                    if !catalog.register(Card::new(title.clone(), front, back)) {
                        return Err(de::Error::custom(format!(
                            "duplicate card title `{title}`"
                        )));
                    }
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.register(Card::new("Alpha", "front", "back")));
        assert_eq!(catalog.len(), 1);
        let card = catalog.lookup("Alpha").unwrap();
        assert_eq!(card.title(), "Alpha");
        assert_eq!(card.front(), "front");
        assert_eq!(card.back(), "back");
        assert!(catalog.lookup("Beta").is_none());
    }

    #[test]
    fn test_register_duplicate_keeps_original() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.register(Card::new("Alpha", "original", "back")));
        assert!(!catalog.register(Card::new("Alpha", "replacement", "back")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("Alpha").unwrap().front(), "original");
    }

    #[test]
    fn test_iter_visits_every_card() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.register(Card::new("Alpha", "a", "a")));
        assert!(catalog.register(Card::new("Beta", "b", "b")));
        let mut titles: Vec<&str> = catalog.iter().map(Card::title).collect();
        titles.sort_unstable();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_deserialize() -> Fallible<()> {
        let catalog: CardCatalog = serde_json::from_str(
            r#"{"Alpha": ["front a", "back a"], "Beta": ["front b", "back b"]}"#,
        )?;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("Alpha").unwrap().front(), "front a");
        assert_eq!(catalog.lookup("Beta").unwrap().back(), "back b");
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_duplicate_title() {
        let err = serde_json::from_str::<CardCatalog>(
            r#"{"Alpha": ["a", "b"], "Alpha": ["c", "d"]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate card title `Alpha`"));
    }

    #[test]
    fn test_deserialize_rejects_wrong_arity() {
        assert!(serde_json::from_str::<CardCatalog>(r#"{"Alpha": ["front"]}"#).is_err());
        assert!(serde_json::from_str::<CardCatalog>(r#"{"Alpha": ["a", "b", "c"]}"#).is_err());
        assert!(serde_json::from_str::<CardCatalog>(r#"{"Alpha": "front"}"#).is_err());
        assert!(serde_json::from_str::<CardCatalog>(r#"{"Alpha": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_deserialize_rejects_empty_fields() {
        let err = serde_json::from_str::<CardCatalog>(r#"{"": ["a", "b"]}"#).unwrap_err();
        assert!(err.to_string().contains("empty card title"));
        let err = serde_json::from_str::<CardCatalog>(r#"{"Alpha": ["", "b"]}"#).unwrap_err();
        assert!(err.to_string().contains("empty side"));
    }

    #[test]
    fn test_deserialize_rejects_non_map() {
        assert!(serde_json::from_str::<CardCatalog>("[1, 2]").is_err());
        assert!(serde_json::from_str::<CardCatalog>("42").is_err());
    }

    #[test]
    fn test_deserialize_empty_map() -> Fallible<()> {
        let catalog: CardCatalog = serde_json::from_str("{}")?;
        assert!(catalog.is_empty());
        Ok(())
    }
}
