use std::collections::HashMap;
use std::hash::Hash;

/// Builds a key -> position lookup over `records`.
///
/// A later record with the same key replaces the earlier position.
pub fn build_index<R, K, F>(records: &[R], key_of: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        index.insert(key_of(record), position);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_every_record_by_position() {
        let services = ["bilibili.com_cn", "iqiyi.com", "netflix.com"];
        let index = build_index(&services, |s| (*s).to_string());

        assert_eq!(index.len(), 3);
        assert_eq!(index["bilibili.com_cn"], 0);
        assert_eq!(index["netflix.com"], 2);
    }

    #[test]
    fn duplicate_keys_keep_the_last_position() {
        let episodes = [(541_642, "a"), (541_643, "b"), (541_642, "c")];
        let index = build_index(&episodes, |e| e.0);

        assert_eq!(index.len(), 2);
        assert_eq!(index[&541_642], 2);
        assert_eq!(episodes[index[&541_642]].1, "c");
    }

    #[test]
    fn empty_input_gives_empty_index() {
        let index = build_index::<i32, i32, _>(&[], |v| *v);
        assert!(index.is_empty());
    }
}
