use std::cmp::Ordering;

use crate::record::Record;
use crate::sort_key::SortKey;

/// Sort `items` in place with a top-down recursive merge sort.
///
/// The sort is stable: when `compare` reports two elements as equal, the one that came first
/// stays first. Every merge copies both halves into temporary buffers, so the sort needs O(n)
/// extra space.
///
/// # Examples
/// ```
/// use org_record_sort::merge_sort::merge_sort_by;
/// let mut values = vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')];
/// merge_sort_by(&mut values, |l, r| l.0.cmp(&r.0));
/// assert_eq!(values, vec![(1, 'b'), (2, 'd'), (3, 'a'), (3, 'c')]);
/// ```
pub fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
{
    if items.len() > 1 {
        sort_range(items, 0, items.len() - 1, &mut compare);
    }
}

/// Sort records in place by `key`. See [merge_sort_by].
pub fn merge_sort_records(records: &mut [Record], key: &SortKey) {
    merge_sort_by(records, |left, right| key.compare(left, right));
}

// sorts the inclusive range [low, high]
fn sort_range<T, F>(items: &mut [T], low: usize, high: usize, compare: &mut F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
{
    if low < high {
        let mid = low + (high - low) / 2;
        sort_range(items, low, mid, compare);
        sort_range(items, mid + 1, high, compare);
        merge(items, low, mid, high, compare);
    }
}

fn merge<T, F>(items: &mut [T], low: usize, mid: usize, high: usize, compare: &mut F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
{
    let mut left = items[low..=mid].to_vec().into_iter().peekable();
    let mut right = items[mid + 1..=high].to_vec().into_iter().peekable();

    for slot in items[low..=high].iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            // left wins ties to keep the sort stable
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, _) => false,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(item) = next {
            *slot = item;
        }
    }
}

/// Check that `items` is ordered according to `compare`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}
