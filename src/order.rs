use std::cmp::Ordering;
use std::str::FromStr;

use anyhow::anyhow;

/// Sort order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl Order {
    /// Apply this order to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for Order {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(anyhow!("Unknown sort order: {}, expected asc or desc", s)),
        }
    }
}
