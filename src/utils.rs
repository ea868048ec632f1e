//! Utility functions and traits for `DoubleHashTable`

use crate::DoubleHashTable;

/// Extension trait for tables that provides owned snapshots of their contents
pub trait TableExtensions<V> {
    /// Returns the keys of the table as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the table as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the key-value pairs of the table as a Vec
    fn entries(&self) -> Vec<(String, V)>;
}

impl<V: Clone> TableExtensions<V> for DoubleHashTable<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }
}

/// Creates a `DoubleHashTable` from an iterator of key-value pairs.
///
/// The table starts at the smallest capacity and grows as the pairs are inserted; a
/// repeated key keeps its last value.
pub fn from_pairs<K, V, I>(iter: I) -> DoubleHashTable<V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    iter.into_iter().map(|(key, value)| (key.into(), value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let table = from_pairs([("a", 1), ("b", 2), ("c", 3), ("a", 4)]);

        assert_eq!(table.get("a").ok(), Some(&4));
        assert_eq!(table.get("b").ok(), Some(&2));
        assert_eq!(table.get("c").ok(), Some(&3));
        assert_eq!(table.size(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let table = from_pairs([("a", 1), ("b", 2), ("c", 3)]);

        let mut keys = table.keys();
        keys.sort(); // Slot order is not insertion order

        let mut values = table.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_entries() {
        let table = from_pairs([(String::from("x"), 'x'), (String::from("y"), 'y')]);

        let mut entries = table.entries();
        entries.sort();

        assert_eq!(entries, vec![("x".to_string(), 'x'), ("y".to_string(), 'y')]);
    }
}
