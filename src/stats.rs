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

use std::collections::BTreeMap;

use revoir_core::scheduler::Scheduler;

/// Histogram of how many days out each scheduled card is due.
#[derive(Default)]
pub struct ScheduleStats {
    cards_by_days: BTreeMap<i64, usize>,
    total_days: i64,
    cards: usize,
}

impl ScheduleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, days: i64) {
        *self.cards_by_days.entry(days).or_insert(0) += 1;
        self.total_days += days;
        self.cards += 1;
    }

    /// The longest wait in the schedule, if any cards are scheduled.
    pub fn longest(&self) -> Option<i64> {
        self.cards_by_days.keys().next_back().copied()
    }

    /// The mean wait across all scheduled cards. Meaningless when no
    /// cards have been added.
    pub fn average(&self) -> f64 {
        self.total_days as f64 / self.cards as f64
    }

    pub fn print(&self) {
        if self.cards == 0 {
            println!("No cards scheduled.");
            return;
        }
        for (days, cards) in &self.cards_by_days {
            println!("Cards due in {days} days: {cards}");
        }
        println!();
        println!("Average days until next review: {:.1}", self.average());
        if let Some(longest) = self.longest() {
            println!("Longest days until next review: {longest}");
        }
    }
}

/// Collect statistics over everything the scheduler tracks. Cards due
/// now count as zero days out; future cards count their distance from
/// the today anchor.
pub fn schedule_stats(scheduler: &Scheduler<'_>) -> ScheduleStats {
    let mut stats = ScheduleStats::new();
    let today = scheduler.today();
    for _ in scheduler.due_entries() {
        stats.add_card(0);
    }
    for entry in scheduler.future_entries() {
        stats.add_card(today.days_until(entry.due));
    }
    stats
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use revoir_core::types::date::Date;
    use revoir_core::types::interval::ReviewInterval;

    use super::*;
    use crate::helper::sample_catalog;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_empty_stats() {
        let stats = ScheduleStats::new();
        assert_eq!(stats.longest(), None);
    }

    #[test]
    fn test_histogram_and_summary() {
        let mut stats = ScheduleStats::new();
        for days in [0, 2, 2, 7] {
            stats.add_card(days);
        }
        assert_eq!(stats.longest(), Some(7));
        assert!((stats.average() - 2.75).abs() < 1e-9);
    }

    #[test]
    fn test_schedule_stats_counts_due_cards_as_zero() {
        let catalog = sample_catalog();
        let mut scheduler = Scheduler::new(date(2024, 1, 15));
        scheduler.add_due_card(catalog.lookup("Alpha").unwrap(), ReviewInterval::New);
        scheduler.add_due_card(catalog.lookup("Beta").unwrap(), ReviewInterval::Days(1));
        scheduler.add_card(
            catalog.lookup("Gamma").unwrap(),
            date(2024, 1, 17),
            ReviewInterval::Days(2),
        );
        scheduler.add_card(
            catalog.lookup("Delta").unwrap(),
            date(2024, 1, 22),
            ReviewInterval::Days(7),
        );
        let stats = schedule_stats(&scheduler);
        assert_eq!(stats.longest(), Some(7));
        assert!((stats.average() - 2.25).abs() < 1e-9);
    }
}
