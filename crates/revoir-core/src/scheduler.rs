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

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::collections::VecDeque;

use crate::catalog::Card;
use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::date::Date;
use crate::types::interval::ReviewInterval;

/// A card waiting to be reviewed this run, with the interval that was in
/// effect when it was last scheduled.
#[derive(Debug)]
pub struct DueEntry<'a> {
    pub card: &'a Card,
    pub last_interval: ReviewInterval,
}

/// A card scheduled strictly after the today anchor.
#[derive(Debug)]
pub struct FutureEntry<'a> {
    pub due: Date,
    pub card: &'a Card,
    pub last_interval: ReviewInterval,
}

impl PartialEq for FutureEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FutureEntry<'_> {}

impl PartialOrd for FutureEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FutureEntry<'_> {
    /// Date ascending, then title ascending. This is also the order the
    /// future half of the snapshot is written in.
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.card.title().cmp(other.card.title()))
    }
}

/// A handle to the due entry returned by [`Scheduler::pick_new_card`].
///
/// The handle keeps identifying the same entry across reorderings of the
/// due sequence, until it is consumed by [`Scheduler::putback_card`]. It
/// is deliberately neither `Copy` nor `Clone`.
#[derive(Debug)]
pub struct CardHandle<'a> {
    slot: usize,
    card: &'a Card,
}

impl<'a> CardHandle<'a> {
    pub fn card(&self) -> &'a Card {
        self.card
    }
}

/// The due-date scheduling engine.
///
/// Holds two collections of borrowed cards: the ordered due sequence for
/// this run, and a date-ordered set of entries scheduled after `today`.
/// Due entries live in a write-once slot arena with an explicit order
/// list layered on top, so requeueing and shuffling relink the order
/// list and never move an entry a live [`CardHandle`] points at.
pub struct Scheduler<'a> {
    today: Date,
    /// Slot arena. A slot is vacated only by the putback that consumes
    /// the handle pointing at it, and vacated slots are never reused.
    slots: Vec<Option<DueEntry<'a>>>,
    /// Review order: the index of every occupied slot, exactly once.
    order: VecDeque<usize>,
    future: BTreeSet<FutureEntry<'a>>,
    dirty: bool,
}

impl<'a> Scheduler<'a> {
    /// An empty scheduler anchored at `today`. The anchor stays fixed for
    /// the scheduler's whole lifetime, even as wall-clock time moves on.
    pub fn new(today: Date) -> Self {
        Self {
            today,
            slots: Vec::new(),
            order: VecDeque::new(),
            future: BTreeSet::new(),
            dirty: false,
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    /// Whether the schedule has diverged from the last persisted
    /// snapshot.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn due_count(&self) -> usize {
        self.order.len()
    }

    pub fn future_count(&self) -> usize {
        self.future.len()
    }

    /// Append a card to the tail of the due sequence and mark the
    /// schedule dirty. This is the entry point for cards that were never
    /// scheduled before.
    pub fn add_due_card(&mut self, card: &'a Card, last_interval: ReviewInterval) {
        self.slots.push(Some(DueEntry {
            card,
            last_interval,
        }));
        self.order.push_back(self.slots.len() - 1);
        self.dirty = true;
    }

    /// Classify a persisted entry. Due on or before `today` goes to the
    /// due tail and dirties the schedule, since the stored date is now
    /// stale. Anything later goes to the future set unchanged.
    pub fn add_card(&mut self, card: &'a Card, due: Date, last_interval: ReviewInterval) {
        if due <= self.today {
            self.add_due_card(card, last_interval);
        } else {
            self.future.insert(FutureEntry {
                due,
                card,
                last_interval,
            });
        }
    }

    /// The head of the due sequence, without removing it. `None` means
    /// there is nothing left to review. Picking again before a putback
    /// returns a handle to the same entry.
    pub fn pick_new_card(&self) -> Option<CardHandle<'a>> {
        let slot = *self.order.front()?;
        Some(CardHandle {
            slot,
            card: self.entry(slot).card,
        })
    }

    /// Feed back a reviewed card. `days <= 0` requeues it at the due
    /// tail with its interval reset to zero and leaves the dirty flag
    /// alone. `days > 0` moves it to the future set, due that many days
    /// after the today anchor, and marks the schedule dirty.
    ///
    /// Consumes the handle. Panics if the entry was already put back
    /// through a handle picked earlier; that is a caller bug the
    /// scheduler refuses to paper over.
    pub fn putback_card(&mut self, handle: CardHandle<'a>, days: i32) {
        let CardHandle { slot, .. } = handle;
        if days <= 0 {
            let entry = self.slots[slot]
                .as_mut()
                .expect("putback through a stale card handle");
            entry.last_interval = ReviewInterval::Days(0);
            self.order.retain(|&s| s != slot);
            self.order.push_back(slot);
        } else {
            let entry = self.slots[slot]
                .take()
                .expect("putback through a stale card handle");
            self.order.retain(|&s| s != slot);
            self.future.insert(FutureEntry {
                due: self.today.add_days(days as u32),
                card: entry.card,
                last_interval: ReviewInterval::Days(days as u32),
            });
            self.dirty = true;
        }
    }

    /// Uniformly shuffle the due review order. Only the order list is
    /// relinked: entries stay in their slots, so handles from earlier
    /// picks stay valid.
    pub fn shuffle_due_cards(&mut self, rng: &mut TinyRng) {
        shuffle(&mut self.order, rng);
    }

    /// Due entries, in review order.
    pub fn due_entries(&self) -> impl Iterator<Item = &DueEntry<'a>> {
        self.order.iter().map(|&slot| self.entry(slot))
    }

    /// Future entries, date ascending then title ascending.
    pub fn future_entries(&self) -> impl Iterator<Item = &FutureEntry<'a>> {
        self.future.iter()
    }

    fn entry(&self, slot: usize) -> &DueEntry<'a> {
        self.slots[slot]
            .as_ref()
            .expect("due order references a vacated slot")
    }
}
