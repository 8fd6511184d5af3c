use std::fmt::{Display, Formatter};

use crate::record_field::RecordField;

/// Number of fields in every organization record.
pub const FIELD_COUNT: usize = 9;

/// One organization entry as read from the input file.
///
/// All fields are kept verbatim as text. A record is never modified after it is created, the
/// sort only moves records around.
///
/// # Examples
/// ```
/// use org_record_sort::record::Record;
/// let record = Record::new(
///     "1", "FAB0d41d5b5d22c", "Ferrell LLC", "https://price.net/", "Papua New Guinea",
///     "Horizontal empowering knowledgebase", "1990", "Plastics", "3498",
/// );
/// assert_eq!(record.name(), "Ferrell LLC");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    index: String,
    org_id: String,
    name: String,
    website: String,
    country: String,
    description: String,
    founded: String,
    industry: String,
    num_employees: String,
}

impl Record {
    /// Create a new [Record] from its nine fields, in file order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: &str,
        org_id: &str,
        name: &str,
        website: &str,
        country: &str,
        description: &str,
        founded: &str,
        industry: &str,
        num_employees: &str,
    ) -> Record {
        Record {
            index: index.to_string(),
            org_id: org_id.to_string(),
            name: name.to_string(),
            website: website.to_string(),
            country: country.to_string(),
            description: description.to_string(),
            founded: founded.to_string(),
            industry: industry.to_string(),
            num_employees: num_employees.to_string(),
        }
    }

    /// Build a record from a parsed CSV row. Returns None unless the row has exactly
    /// [FIELD_COUNT] fields. Bytes that are not valid UTF-8 are replaced with U+FFFD, the row
    /// is kept.
    pub(crate) fn from_csv(row: &csv::ByteRecord) -> Option<Record> {
        if row.len() != FIELD_COUNT {
            return None;
        }
        let field = |i: usize| String::from_utf8_lossy(&row[i]);
        Some(
            Record::new(
                &field(0),
                &field(1),
                &field(2),
                &field(3),
                &field(4),
                &field(5),
                &field(6),
                &field(7),
                &field(8),
            )
        )
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn founded(&self) -> &str {
        &self.founded
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn num_employees(&self) -> &str {
        &self.num_employees
    }

    /// Get the value of `field` for this record.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Index => &self.index,
            RecordField::OrgId => &self.org_id,
            RecordField::Name => &self.name,
            RecordField::Website => &self.website,
            RecordField::Country => &self.country,
            RecordField::Description => &self.description,
            RecordField::Founded => &self.founded,
            RecordField::Industry => &self.industry,
            RecordField::NumEmployees => &self.num_employees,
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Index: {}, OrgID: {}, Name: {}, Website: {}, Country: {}, Description: {}, Founded: {}, Industry: {}, NumEmployees: {}",
            self.index,
            self.org_id,
            self.name,
            self.website,
            self.country,
            self.description,
            self.founded,
            self.industry,
            self.num_employees,
        )
    }
}
