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

//! revoir-core: Core library for the revoir flashcard reviewer.
//!
//! This library provides:
//! - The card catalog, a title-keyed store of flashcards
//! - The due-date scheduler: due ordering, future set, dirty tracking
//! - Calendar date and review interval types
//! - A tiny RNG for shuffling the review order

pub mod catalog;
pub mod error;
pub mod rng;
pub mod scheduler;
pub mod types;

// Re-exports for convenience
pub use catalog::{Card, CardCatalog};
pub use error::{ErrorReport, Fallible, fail};
pub use rng::TinyRng;
pub use scheduler::{CardHandle, DueEntry, FutureEntry, Scheduler};
pub use types::date::Date;
pub use types::interval::ReviewInterval;
