use indexmap::IndexSet;
use std::hash::Hash;

/// Returns the distinct values of `accessor` over `items`, in first-occurrence order.
pub fn distinct<'a, T, K, I, F>(items: I, accessor: F) -> IndexSet<K>
where
    T: 'a,
    K: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> K,
{
    items.into_iter().map(accessor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_first_occurrence_not_sorted() {
        let years = ["2021", "2019", "2021", "2020", "2019"];
        let domain = distinct(&years, |y| *y);
        let ordered: Vec<_> = domain.into_iter().collect();
        assert_eq!(ordered, vec!["2021", "2019", "2020"]);
    }

    #[test]
    fn test_distinct_empty() {
        let empty: [&str; 0] = [];
        assert!(distinct(&empty, |y| *y).is_empty());
    }

    #[test]
    fn test_distinct_is_exact_match() {
        let brands = ["Apple", "apple", "Apple"];
        assert_eq!(distinct(&brands, |b| *b).len(), 2);
    }
}
