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

use tokio::signal;
use tokio::sync::watch;

/// Cooperative cancellation flag for the review loop.
///
/// The session checks the token between complete review cycles, so a
/// cancelled run never leaves the scheduler mid-mutation.
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub(crate) fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the token is cancelled. Also resolves if the sender
    /// is gone, so a dead watcher cannot wedge the session.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// A token that is cancelled the first time the process receives Ctrl+C.
pub fn ctrl_c_token() -> CancelToken {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        let _ = tx.send(true);
    });
    CancelToken::new(rx)
}
