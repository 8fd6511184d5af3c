use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context};
use command_executor::shutdown_mode::ShutdownMode;
use command_executor::thread_pool_builder::ThreadPoolBuilder;

use crate::config::Config;
use crate::loader::Loader;
use crate::malformed_rows::MalformedRows;
use crate::merge_sort::{is_sorted_by, merge_sort_records};
use crate::order::Order;
use crate::record::Record;
use crate::record_field::RecordField;
use crate::sort_command::SortCommand;
use crate::sort_key::SortKey;

/// Load a CSV file of organization records and sort it
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use org_record_sort::order::Order;
/// use org_record_sort::record::Record;
/// use org_record_sort::sort::Sort;
///
/// fn sort_descending(input: PathBuf) -> Result<Vec<Record>, anyhow::Error> {
///     let mut sort = Sort::new(input);
///     // the default order is Asc
///     sort.with_order(Order::Desc);
///     // sort on the calling thread instead of the worker thread
///     sort.with_worker(false);
///     sort.sort()
/// }
/// ```
pub struct Sort {
    input: PathBuf,
    field: RecordField,
    order: Order,
    malformed_rows: MalformedRows,
    worker: bool,
}

impl Sort {
    /// Create a default Sort definition.
    ///
    /// * records are sorted by the name field
    /// * default Order is Asc
    /// * reading stops at the first malformed row, see [MalformedRows]
    /// * the sort runs on a single worker thread and the caller waits for it
    pub fn new(input: PathBuf) -> Sort {
        Sort {
            input,
            field: RecordField::Name,
            order: Order::Asc,
            malformed_rows: MalformedRows::Truncate,
            worker: true,
        }
    }

    /// Set the field to sort by. The default is [RecordField::Name]
    pub fn with_field(&mut self, field: RecordField) {
        self.field = field;
    }

    /// Set [Order]
    pub fn with_order(&mut self, order: Order) {
        self.order = order;
    }

    /// Set the [MalformedRows] policy. The default is [MalformedRows::Truncate]
    pub fn with_malformed_rows(&mut self, malformed_rows: MalformedRows) {
        self.malformed_rows = malformed_rows;
    }

    /// Run the sort on a dedicated worker thread and wait for it, or on the calling thread.
    /// The result is the same either way. The default is true
    pub fn with_worker(&mut self, worker: bool) {
        self.worker = worker;
    }

    /// Load the input file and return its records sorted
    pub fn sort(&self) -> Result<Vec<Record>, anyhow::Error> {
        let config = self.create_config();
        let mut records = Self::load(&config)?;
        if config.worker() {
            records = Self::sort_on_worker(records, &config)?;
        } else {
            log::info!("Start sorting {} records on the calling thread", records.len());
            merge_sort_records(records.as_mut_slice(), config.key());
            log::info!("Finish sorting {} records on the calling thread", records.len());
        }
        Ok(records)
    }

    /// Check whether the input file is already ordered by the configured field and order
    pub fn check(&self) -> Result<bool, anyhow::Error> {
        let config = self.create_config();
        let records = Self::load(&config)?;
        let key = config.key();
        Ok(is_sorted_by(&records, |left, right| key.compare(left, right)))
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.input.clone(),
            SortKey::new(self.field, self.order),
            self.malformed_rows,
            self.worker,
        )
    }

    fn load(config: &Config) -> Result<Vec<Record>, anyhow::Error> {
        let loader = Loader::new(config.input().clone())
            .with_malformed_rows(config.malformed_rows());
        let records = loader.load()?;
        Ok(records)
    }

    fn sort_on_worker(records: Vec<Record>, config: &Config) -> Result<Vec<Record>, anyhow::Error> {
        let shared = Arc::new(Mutex::new(records));
        let mut thread_pool_builder = ThreadPoolBuilder::new();
        let mut sorting_pool = thread_pool_builder
            .with_name(config.worker_name().clone())
            .with_tasks(1)
            .with_queue_size(config.queue_size())
            .with_shutdown_mode(ShutdownMode::CompletePending)
            .build()
            .with_context(|| "Failed to build the sorting pool")?;

        let sort_command = Box::new(SortCommand::new(shared.clone(), *config.key()));
        sorting_pool.submit(sort_command);

        log::info!("Waiting for the sorting worker");
        sorting_pool.shutdown();
        sorting_pool.join()?;

        let mut guard = shared
            .lock()
            .map_err(|e| anyhow!("Failed to collect sorted records: {}", e))?;
        Ok(std::mem::take(&mut *guard))
    }
}
