use std::io::Write;

use crate::record::Record;

/// Header line written before the sorted records.
pub const SORTED_HEADER: &str = "Sorted records:";

/// Write the [SORTED_HEADER] line and then every record on its own line, in slice order.
///
/// # Examples
/// ```
/// use org_record_sort::output::write_sorted;
/// use org_record_sort::record::Record;
///
/// let records = vec![Record::new("1", "a1", "Alice", "a.com", "US", "d", "1999", "Tech", "10")];
/// let mut out = Vec::new();
/// write_sorted(&mut out, &records).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("Sorted records:\nIndex: 1, OrgID: a1, Name: Alice"));
/// ```
pub fn write_sorted<W: Write>(writer: &mut W, records: &[Record]) -> Result<(), std::io::Error> {
    writeln!(writer, "{}", SORTED_HEADER)?;
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()
}
