//! Stable two-way partition.

/// Split `items` by `predicate`, preserving relative order on both sides.
///
/// Returns `(rejected, accepted)`: elements for which the predicate is false
/// come first, matching the order the loader registers them in.
///
/// # Example
///
/// ```rust
/// use loadstate::loader::partition_stable;
///
/// let (even, odd) = partition_stable(vec![1, 2, 3, 4, 5], |n| n % 2 == 1);
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition_stable<T, I, F>(items: I, predicate: F) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> bool,
{
    let mut rejected = Vec::new();
    let mut accepted = Vec::new();

    for item in items {
        if predicate(&item) {
            accepted.push(item);
        } else {
            rejected.push(item);
        }
    }

    (rejected, accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_groups() {
        let (left, right) = partition_stable(Vec::<u8>::new(), |_| true);
        assert!(left.is_empty());
        assert!(right.is_empty());
    }

    #[test]
    fn preserves_order_within_groups() {
        let items = vec!["b1", "p1", "b2", "p2", "b3"];
        let (plain, patterns) = partition_stable(items, |s| s.starts_with('p'));

        assert_eq!(plain, vec!["b1", "b2", "b3"]);
        assert_eq!(patterns, vec!["p1", "p2"]);
    }

    #[test]
    fn all_matching_lands_in_second_group() {
        let (left, right) = partition_stable(vec![1, 2, 3], |_| true);
        assert!(left.is_empty());
        assert_eq!(right, vec![1, 2, 3]);
    }

    #[test]
    fn works_on_borrowed_items() {
        let owned = vec![String::from("x"), String::from("yy")];
        let (short, long) = partition_stable(owned.iter(), |s| s.len() > 1);

        assert_eq!(short, vec![&owned[0]]);
        assert_eq!(long, vec![&owned[1]]);
    }
}
