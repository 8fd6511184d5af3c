use std::path::PathBuf;

use crate::malformed_rows::MalformedRows;
use crate::sort_key::SortKey;

#[derive(Clone)]
pub(crate) struct Config {
    input: PathBuf,
    key: SortKey,
    malformed_rows: MalformedRows,
    worker: bool,
    worker_name: String,
    queue_size: usize,
}

impl Config {
    pub(crate) fn new(
        input: PathBuf,
        key: SortKey,
        malformed_rows: MalformedRows,
        worker: bool,
    ) -> Config {
        let worker_name = "sorting".to_string();
        let queue_size = 1;
        Config {
            input,
            key,
            malformed_rows,
            worker,
            worker_name,
            queue_size,
        }
    }

    pub(crate) fn input(&self) -> &PathBuf {
        &self.input
    }

    pub(crate) fn key(&self) -> &SortKey {
        &self.key
    }

    pub(crate) fn malformed_rows(&self) -> MalformedRows {
        self.malformed_rows
    }

    pub(crate) fn worker(&self) -> bool {
        self.worker
    }

    pub(crate) fn worker_name(&self) -> &String {
        &self.worker_name
    }

    pub(crate) fn queue_size(&self) -> usize {
        self.queue_size
    }
}
