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

use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::Lines;
use tokio::select;

use revoir_core::catalog::Card;
use revoir_core::error::Fallible;
use revoir_core::scheduler::Scheduler;

use crate::cancel::CancelToken;

/// ANSI: clear the screen and move the cursor to the top left corner.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// The interactive review loop: pick the head card, show one side, wait
/// for Enter, show the other side, ask in how many days the card should
/// come back, feed the answer to the scheduler, repeat.
///
/// Input is any buffered async reader, stdin in production, so the loop
/// is scriptable in tests. Cancellation and end of input both end the
/// session cleanly between review steps; a failed read is an error.
pub struct ReviewSession<'s, 'a, R> {
    scheduler: &'s mut Scheduler<'a>,
    input: Lines<R>,
    cancel: CancelToken,
    reverse: bool,
}

impl<'s, 'a, R: AsyncBufRead + Unpin> ReviewSession<'s, 'a, R> {
    pub fn new(
        scheduler: &'s mut Scheduler<'a>,
        input: R,
        cancel: CancelToken,
        reverse: bool,
    ) -> Self {
        Self {
            scheduler,
            input: input.lines(),
            cancel,
            reverse,
        }
    }

    pub async fn run(&mut self) -> Fallible<()> {
        if self.scheduler.due_count() == 0 {
            println!("No cards due today.");
            return Ok(());
        }
        println!("Press Enter to show the first card.");
        if !self.wait_for_enter().await? {
            return Ok(());
        }
        loop {
            if self.cancel.is_cancelled() {
                return Ok(());
            }
            let Some(handle) = self.scheduler.pick_new_card() else {
                println!("No more cards to review!");
                return Ok(());
            };
            match self.show_card(handle.card()).await? {
                Some(days) => self.scheduler.putback_card(handle, days),
                // Cancelled or out of input mid-card. The handle is
                // dropped without a putback, so the card stays at the
                // head for the next run.
                None => return Ok(()),
            }
        }
    }

    /// Show one card and ask for its next interval. `None` means the
    /// session should end without a putback.
    async fn show_card(&mut self, card: &Card) -> Fallible<Option<i32>> {
        let (first, second) = if self.reverse {
            (card.back(), card.front())
        } else {
            (card.front(), card.back())
        };
        println!("{CLEAR_SCREEN}{first}");
        if !self.wait_for_enter().await? {
            return Ok(None);
        }
        println!("{second}\n");
        self.ask_interval().await
    }

    /// Wait for the user to press Enter. Any input line counts. False on
    /// cancellation or end of input.
    async fn wait_for_enter(&mut self) -> Fallible<bool> {
        select! {
            _ = self.cancel.cancelled() => Ok(false),
            line = self.input.next_line() => Ok(line?.is_some()),
        }
    }

    /// Ask until the user supplies a whole, non-negative number of days.
    /// `None` on cancellation or end of input.
    async fn ask_interval(&mut self) -> Fallible<Option<i32>> {
        loop {
            println!("In how many days should the card be shown again?");
            let line = select! {
                _ = self.cancel.cancelled() => return Ok(None),
                line = self.input.next_line() => match line? {
                    Some(line) => line,
                    None => return Ok(None),
                },
            };
            match line.trim().parse::<i32>() {
                Ok(days) if days >= 0 => return Ok(Some(days)),
                _ => {}
            }
        }
    }
}
