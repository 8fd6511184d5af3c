use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::anyhow;
use command_executor::command::Command;

use crate::merge_sort::merge_sort_records;
use crate::record::Record;
use crate::sort_key::SortKey;

/// Sorts a shared record sequence when executed on a pool thread.
pub(crate) struct SortCommand {
    records: Arc<Mutex<Vec<Record>>>,
    key: SortKey,
}

impl SortCommand {
    pub(crate) fn new(records: Arc<Mutex<Vec<Record>>>, key: SortKey) -> SortCommand {
        SortCommand {
            records,
            key,
        }
    }
}

impl Command for SortCommand {
    fn execute(&self) -> Result<(), anyhow::Error> {
        let mut records = self.records
            .lock()
            .map_err(|e| anyhow!("Failed to lock records: {}", e))?;
        log::info!(
            "Start sorting {} records, thread: {}",
            records.len(),
            thread::current().name().unwrap_or("unnamed")
        );
        merge_sort_records(records.as_mut_slice(), &self.key);
        log::info!(
            "Finish sorting {} records, thread: {}",
            records.len(),
            thread::current().name().unwrap_or("unnamed")
        );
        Ok(())
    }
}
