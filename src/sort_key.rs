use std::cmp::Ordering;

use crate::order::Order;
use crate::record::Record;
use crate::record_field::RecordField;

/// Defines how two records compare: by the raw text of one field, in the given [Order].
///
/// Comparison is byte-wise, with no case folding or locale rules. The default key sorts by
/// name in ascending order.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use org_record_sort::order::Order;
/// use org_record_sort::record::Record;
/// use org_record_sort::record_field::RecordField;
/// use org_record_sort::sort_key::SortKey;
///
/// let a = Record::new("1", "a", "Alice", "", "", "", "", "", "");
/// let b = Record::new("2", "b", "Bob", "", "", "", "", "", "");
/// let key = SortKey::new(RecordField::Name, Order::Desc);
/// assert_eq!(key.compare(&a, &b), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortKey {
    field: RecordField,
    order: Order,
}

impl SortKey {
    pub fn new(field: RecordField, order: Order) -> SortKey {
        SortKey {
            field,
            order,
        }
    }

    pub fn field(&self) -> RecordField {
        self.field
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn compare(&self, left: &Record, right: &Record) -> Ordering {
        let ordering = left.field(self.field).cmp(right.field(self.field));
        self.order.apply(ordering)
    }
}
