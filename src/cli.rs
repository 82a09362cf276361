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

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::Parser;
use clap::error::ErrorKind;
use tokio::io::BufReader;

use revoir_core::catalog::CardCatalog;
use revoir_core::error::Fallible;
use revoir_core::rng::TinyRng;
use revoir_core::scheduler::Scheduler;
use revoir_core::types::date::Date;
use revoir_core::types::interval::ReviewInterval;

use crate::cancel::ctrl_c_token;
use crate::session::ReviewSession;
use crate::stats::schedule_stats;
use crate::store::read_catalog;
use crate::store::read_schedule;
use crate::store::write_schedule;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the card catalog file.
    cards: String,
    /// Path to the schedule file. By default, the catalog path with its
    /// extension replaced by `_due_dates.json` is used.
    schedule: Option<String>,
    /// Show the back of each card first.
    #[arg(short, long)]
    reverse: bool,
    /// Maximum number of new cards to introduce in this run. By default,
    /// all new cards are introduced.
    #[arg(short, long)]
    new_card_limit: Option<usize>,
    /// Print schedule statistics instead of reviewing.
    #[arg(long)]
    stats: bool,
}

pub async fn entrypoint() -> Fallible<()> {
    // Usage errors go to stdout and the exit status stays zero, like
    // every other failure.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                }
                _ => println!("{e}"),
            }
            return Ok(());
        }
    };
    let catalog_path = PathBuf::from(&args.cards);
    let schedule_path = match &args.schedule {
        Some(path) => PathBuf::from(path),
        None => schedule_path_for(&catalog_path),
    };

    let catalog = read_catalog(&catalog_path)?;
    let mut scheduler = Scheduler::new(Date::today());
    read_schedule(&schedule_path, &catalog, &mut scheduler)?;
    add_new_cards(&catalog, &mut scheduler, args.new_card_limit);

    if args.stats {
        schedule_stats(&scheduler).print();
        return Ok(());
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64;
    scheduler.shuffle_due_cards(&mut TinyRng::from_seed(seed));

    let cancel = ctrl_c_token();
    let input = BufReader::new(tokio::io::stdin());
    let mut session = ReviewSession::new(&mut scheduler, input, cancel, args.reverse);
    session.run().await?;

    if scheduler.is_dirty() {
        println!("Updating card schedule...");
        write_schedule(&schedule_path, &scheduler)?;
    }
    Ok(())
}

/// Catalog cards that appear nowhere in the schedule are new. Queue them
/// at the due tail, up to `limit`.
fn add_new_cards<'a>(
    catalog: &'a CardCatalog,
    scheduler: &mut Scheduler<'a>,
    limit: Option<usize>,
) {
    let scheduled: HashSet<&str> = scheduler
        .due_entries()
        .map(|e| e.card.title())
        .chain(scheduler.future_entries().map(|e| e.card.title()))
        .collect();
    let mut added = 0;
    for card in catalog.iter() {
        if scheduled.contains(card.title()) {
            continue;
        }
        if limit.is_some_and(|limit| added >= limit) {
            break;
        }
        scheduler.add_due_card(card, ReviewInterval::New);
        added += 1;
    }
    if added > 0 {
        log::debug!("introduced {added} new cards");
    }
}

/// Derive the schedule path from the catalog path: strip the extension
/// and append `_due_dates.json`.
fn schedule_path_for(catalog_path: &Path) -> PathBuf {
    let stem = catalog_path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("");
    catalog_path.with_file_name(format!("{stem}_due_dates.json"))
}
