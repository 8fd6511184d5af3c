use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

/// Names one of the nine fields of a [Record](crate::record::Record).
///
/// The field is used to select the sort key. The default is [RecordField::Name].
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use org_record_sort::record_field::RecordField;
/// let field = RecordField::from_str("country").unwrap();
/// assert_eq!(field, RecordField::Country);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordField {
    /// Row index as written in the file
    Index,
    /// Organization id
    OrgId,
    /// Organization name
    #[default]
    Name,
    /// Website
    Website,
    /// Country
    Country,
    /// Description
    Description,
    /// Founding year, kept as text
    Founded,
    /// Industry
    Industry,
    /// Employee count bucket, kept as text
    NumEmployees,
}

impl RecordField {
    pub fn all() -> [RecordField; 9] {
        [
            RecordField::Index,
            RecordField::OrgId,
            RecordField::Name,
            RecordField::Website,
            RecordField::Country,
            RecordField::Description,
            RecordField::Founded,
            RecordField::Industry,
            RecordField::NumEmployees,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RecordField::Index => "index",
            RecordField::OrgId => "org_id",
            RecordField::Name => "name",
            RecordField::Website => "website",
            RecordField::Country => "country",
            RecordField::Description => "description",
            RecordField::Founded => "founded",
            RecordField::Industry => "industry",
            RecordField::NumEmployees => "num_employees",
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        RecordField::all()
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = RecordField::all().iter().map(|f| f.as_str()).collect();
                anyhow!("Unknown record field: {}, expected one of: {}", s, names.join(", "))
            })
    }
}
