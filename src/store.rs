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

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use revoir_core::catalog::CardCatalog;
use revoir_core::error::ErrorReport;
use revoir_core::error::Fallible;
use revoir_core::scheduler::Scheduler;
use revoir_core::types::date::Date;
use revoir_core::types::interval::ReviewInterval;

/// Wire form of one schedule entry: a bare due date for a card that has
/// never been reviewed, or a `[dueDate, intervalDays]` pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotEntry {
    Due(Date),
    Reviewed(Date, u32),
}

impl SnapshotEntry {
    fn new(due: Date, interval: ReviewInterval) -> Self {
        match interval {
            ReviewInterval::New => SnapshotEntry::Due(due),
            ReviewInterval::Days(days) => SnapshotEntry::Reviewed(due, days),
        }
    }

    fn into_parts(self) -> (Date, ReviewInterval) {
        match self {
            SnapshotEntry::Due(due) => (due, ReviewInterval::New),
            SnapshotEntry::Reviewed(due, days) => (due, ReviewInterval::Days(days)),
        }
    }
}

/// The on-disk schedule: card title to entry, insertion ordered so the
/// file keeps the due-first write order across runs.
pub type Snapshot = IndexMap<String, SnapshotEntry>;

/// Read the card catalog. Any failure, including a missing file, is
/// fatal: without the catalog there is nothing to review.
pub fn read_catalog(path: &Path) -> Fallible<CardCatalog> {
    println!("Reading cards...");
    let text = fs::read_to_string(path)
        .map_err(|e| ErrorReport::new(format!("failed to read {}: {e}", path.display())))?;
    let catalog: CardCatalog = serde_json::from_str(&text)
        .map_err(|e| ErrorReport::new(format!("failed to parse {}: {e}", path.display())))?;
    log::debug!("catalog holds {} cards", catalog.len());
    Ok(catalog)
}

/// Read the schedule snapshot into `scheduler`. A missing file is not an
/// error, the schedule is simply empty. Entries whose title is unknown
/// to the catalog are reported and skipped.
pub fn read_schedule<'a>(
    path: &Path,
    catalog: &'a CardCatalog,
    scheduler: &mut Scheduler<'a>,
) -> Fallible<()> {
    println!("Reading card schedule...");
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("Schedule file not found!");
            return Ok(());
        }
        Err(e) => {
            return Err(ErrorReport::new(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };
    let snapshot: Snapshot = serde_json::from_str(&text)
        .map_err(|e| ErrorReport::new(format!("failed to parse {}: {e}", path.display())))?;
    let mut loaded = 0usize;
    for (title, entry) in snapshot {
        match catalog.lookup(&title) {
            None => println!("Card `{title}` is not present!"),
            Some(card) => {
                let (due, interval) = entry.into_parts();
                scheduler.add_card(card, due, interval);
                loaded += 1;
            }
        }
    }
    log::debug!("loaded {loaded} schedule entries");
    Ok(())
}

/// Write the schedule snapshot: due cards first, dated with the today
/// anchor, then future cards date ascending and title ascending. The
/// caller decides whether a write is needed at all.
pub fn write_schedule(path: &Path, scheduler: &Scheduler<'_>) -> Fallible<()> {
    let today = scheduler.today();
    let mut snapshot = Snapshot::new();
    for entry in scheduler.due_entries() {
        snapshot.insert(
            entry.card.title().to_string(),
            SnapshotEntry::new(today, entry.last_interval),
        );
    }
    for entry in scheduler.future_entries() {
        snapshot.insert(
            entry.card.title().to_string(),
            SnapshotEntry::new(entry.due, entry.last_interval),
        );
    }
    let text = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, text)
        .map_err(|e| ErrorReport::new(format!("failed to write {}: {e}", path.display())))?;
    log::debug!("wrote {} schedule entries", snapshot.len());
    Ok(())
}
