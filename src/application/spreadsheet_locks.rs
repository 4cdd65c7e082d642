use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per spreadsheet id. Submissions holding the guard for a
/// spreadsheet run their read-reconcile-write sequence without interleaving.
/// Entries nobody holds or waits on are dropped on the next `acquire`, so the map
/// only tracks spreadsheets with submissions in flight.
#[derive(Debug, Default)]
pub struct SpreadsheetLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SpreadsheetLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, spreadsheet_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            // -- MUTEX --
            let mut guard = self.locks.lock().await;
            guard.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(guard.entry(spreadsheet_id.to_string()).or_default())
            // -- END MUTEX --
        };

        lock.lock_owned().await
    }

    pub async fn tracked_spreadsheets(&self) -> usize {
        self.locks.lock().await.len()
    }
}
