use std::cmp::Ordering;

/// Stable bottom-up merge sort with a fallible comparator.
///
/// Sorts a permutation of indices so that a failing comparator leaves no
/// element half-moved, then moves the elements into their final order.
pub(crate) fn stable_sorted<T, F, X>(items: Vec<T>, mut compare: F) -> Result<Vec<T>, X>
where
    F: FnMut(&T, &T) -> Result<Ordering, X>,
{
    let len = items.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let middle = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(
                &items,
                &order[start..middle],
                &order[middle..end],
                &mut scratch[start..end],
                &mut compare,
            )?;
            start = end;
        }
        std::mem::swap(&mut order, &mut scratch);
        width *= 2;
    }
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    Ok(order.into_iter().filter_map(|i| slots[i].take()).collect())
}

fn merge<T, F, X>(
    items: &[T],
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
    compare: &mut F,
) -> Result<(), X>
where
    F: FnMut(&T, &T) -> Result<Ordering, X>,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // ties go left, which keeps equal elements in input order
        let take_left = if i == left.len() {
            false
        } else if j == right.len() {
            true
        } else {
            compare(&items[right[j]], &items[left[i]])? != Ordering::Less
        };
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
    Ok(())
}
