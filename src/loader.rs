use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::thread;

use csv::{ByteRecord, ReaderBuilder};

use crate::error::LoadError;
use crate::malformed_rows::MalformedRows;
use crate::record::{Record, FIELD_COUNT};

/// Reads organization records from a CSV file.
///
/// The first line is a header and is skipped without looking at its shape. Every following
/// row must have exactly nine fields. Rows that do not are handled according to
/// [MalformedRows], by default the read stops at the first such row and the records parsed
/// before it are returned.
///
/// # Examples
/// ```
/// use org_record_sort::loader::Loader;
/// use org_record_sort::malformed_rows::MalformedRows;
///
/// let data = "idx,orgid,name,site,country,desc,founded,industry,emp\n\
///             1,a1,Charlie,c.com,US,d,1999,Tech,10\n\
///             2,a2,Alice\n\
///             3,a3,Bob,b.com,US,d,2001,Tech,50\n";
/// let loader = Loader::new("in-memory".into()).with_malformed_rows(MalformedRows::Skip);
/// let records = loader.load_from_reader(data.as_bytes()).unwrap();
/// assert_eq!(records.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Loader {
    path: PathBuf,
    malformed_rows: MalformedRows,
}

enum Row {
    Valid(Record),
    Malformed { line: u64, reason: String },
    Unreadable(csv::Error),
}

impl Loader {
    /// Create a [Loader] for `path` that truncates at the first malformed row.
    pub fn new(path: PathBuf) -> Loader {
        Loader {
            path,
            malformed_rows: MalformedRows::Truncate,
        }
    }

    /// Set the [MalformedRows] policy.
    pub fn with_malformed_rows(mut self, malformed_rows: MalformedRows) -> Loader {
        self.malformed_rows = malformed_rows;
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn malformed_rows(&self) -> MalformedRows {
        self.malformed_rows
    }

    /// Open the file and read all records from it.
    pub fn load(&self) -> Result<Vec<Record>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;
        self.load_from_reader(file)
    }

    /// Read all records from `reader` using the same rules as [Loader::load].
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Vec<Record>, LoadError> {
        log::info!(
            "Start loading records from {}, thread: {}",
            self.path.to_string_lossy(),
            thread::current().name().unwrap_or("unnamed")
        );
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut skipped: usize = 0;
        for result in csv_reader.byte_records() {
            match Self::classify(result) {
                Row::Valid(record) => {
                    records.push(record);
                }
                Row::Malformed { line, reason } => match self.malformed_rows {
                    MalformedRows::Truncate => {
                        log::debug!("Stop loading at malformed row, line: {}, reason: {}", line, reason);
                        break;
                    }
                    MalformedRows::Skip => {
                        log::warn!("Skipping malformed row, line: {}, reason: {}", line, reason);
                        skipped += 1;
                    }
                    MalformedRows::Fail => {
                        return Err(LoadError::Malformed { line, reason });
                    }
                },
                Row::Unreadable(e) => match self.malformed_rows {
                    MalformedRows::Fail => {
                        return Err(LoadError::Read { source: e });
                    }
                    MalformedRows::Truncate | MalformedRows::Skip => {
                        log::warn!("Stop loading, input is unreadable: {}", e);
                        break;
                    }
                },
            }
        }

        log::info!(
            "Finish loading records from {}, loaded: {}, skipped: {}",
            self.path.to_string_lossy(),
            records.len(),
            skipped
        );
        Ok(records)
    }

    fn classify(result: Result<ByteRecord, csv::Error>) -> Row {
        match result {
            Ok(row) => {
                let line = row.position().map(|p| p.line()).unwrap_or(0);
                match Record::from_csv(&row) {
                    Some(record) => Row::Valid(record),
                    None => Row::Malformed {
                        line,
                        reason: format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
                    },
                }
            }
            // reading can not resume after an I/O error
            Err(e) if e.is_io_error() => Row::Unreadable(e),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                Row::Malformed {
                    line,
                    reason: e.to_string(),
                }
            }
        }
    }
}
