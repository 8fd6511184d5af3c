//! This crate sorts a CSV file of organization records by name and prints the sorted list.
//!
//! Each data row of the input file is an organization record of nine text fields: index,
//! organization id, name, website, country, description, founding year, industry and employee
//! count. The first line of the file is a header and is skipped. Records are sorted in memory
//! with a stable top-down merge sort, so records sharing a name keep their file order.
//!
//! By default the sort runs on a single worker thread and the caller waits for it to finish.
//! The sort key field, the order, and the handling of malformed rows can be configured.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use org_record_sort::output::write_sorted;
//! use org_record_sort::sort::Sort;
//!
//! fn print_sorted(input: PathBuf) -> Result<(), anyhow::Error> {
//!     let sort = Sort::new(input);
//!     let records = sort.sort()?;
//!     write_sorted(&mut std::io::stdout().lock(), &records)?;
//!     Ok(())
//! }
//! ```
//!

pub(crate) mod config;
pub(crate) mod sort_command;

pub mod error;
pub mod loader;
pub mod malformed_rows;
pub mod merge_sort;
pub mod order;
pub mod output;
pub mod record;
pub mod record_field;
pub mod sort;
pub mod sort_key;
