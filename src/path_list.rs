use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{PathsError, Result};

/// Separator between entries of a `PATH`-style variable
pub const DELIMITER: char = ':';

/// Ordered list of path strings, e.g. the entries of `$PATH`.
///
/// Order is significant and duplicates are kept until [`PathList::deduplicate`]
/// is called. Index arguments are clamped instead of rejected: `insert` and
/// `remove` redirect an out-of-range index to the nearest end of the list,
/// `replace` and `move_entry` ignore it. Only `remove` on an empty list and
/// `swap` with an index outside the list report [`PathsError::Bounds`].
///
/// Nothing here checks that an entry exists on disk or is a well-formed path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a `:`-delimited string
    pub fn from_delimited(s: &str) -> Self {
        let mut list = Self::new();
        list.load_from_delimited(s);
        list
    }

    /// Build a list from a JSON array of strings
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let mut list = Self::new();
        list.load_from_json(bytes)?;
        Ok(list)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Insert `path` so it ends up at `index`.
    ///
    /// Negative indices insert at the front, indices at or past the end append.
    pub fn insert(&mut self, path: impl Into<String>, index: i64) {
        let at = clamp(index, self.len());
        self.entries.insert(at, path.into());
    }

    /// Remove and return the entry at `index`.
    ///
    /// Negative indices remove the first entry, indices at or past the end
    /// remove the last one. Fails only when the list is empty.
    pub fn remove(&mut self, index: i64) -> Result<String> {
        let Some(last) = self.len().checked_sub(1) else {
            return Err(PathsError::Bounds { index, len: 0 });
        };
        let at = clamp(index, last);
        Ok(self.entries.remove(at))
    }

    /// Move the entry at `src` so it ends up at `dst`.
    ///
    /// Does nothing when `src` is outside the list or equals `dst`. `dst` is
    /// clamped against the list as it is after the entry has been taken out.
    pub fn move_entry(&mut self, src: i64, dst: i64) {
        if self.position(src).is_none() || src == dst {
            return;
        }

        let Ok(path) = self.remove(src) else {
            return;
        };
        self.insert(path, dst);
    }

    /// Overwrite the entry at `target`; ignored when `target` is outside the list.
    pub fn replace(&mut self, target: i64, path: impl Into<String>) {
        if let Some(at) = self.position(target) {
            self.entries[at] = path.into();
        }
    }

    /// Exchange the entries at `a` and `b`.
    pub fn swap(&mut self, a: i64, b: i64) -> Result<()> {
        if a == b {
            return Ok(());
        }

        let len = self.len();
        let first = self
            .position(a)
            .ok_or(PathsError::Bounds { index: a, len })?;
        let second = self
            .position(b)
            .ok_or(PathsError::Bounds { index: b, len })?;
        self.entries.swap(first, second);
        Ok(())
    }

    /// Keep only the first occurrence of every entry, preserving order.
    pub fn deduplicate(&mut self) {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries.retain(|entry| seen.insert(entry.clone()));
    }

    /// Replace the entries with the `:`-separated fields of `s`.
    ///
    /// Empty fields are kept, so `"a::c"` yields `["a", "", "c"]` and the
    /// empty string yields a single empty entry.
    pub fn load_from_delimited(&mut self, s: &str) {
        self.entries = s.split(DELIMITER).map(String::from).collect();
    }

    /// Replace the entries with a decoded JSON array of strings.
    ///
    /// The list is left untouched when decoding fails.
    pub fn load_from_json(&mut self, bytes: &[u8]) -> Result<()> {
        self.entries = serde_json::from_slice(bytes).map_err(PathsError::Decode)?;
        Ok(())
    }

    /// Encode the entries as a compact JSON array.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.entries).map_err(PathsError::Encode)
    }

    /// The entries joined back into a `:`-delimited string
    pub fn join(&self) -> String {
        self.entries.join(&DELIMITER.to_string())
    }

    fn position(&self, index: i64) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.len())
    }
}

/// Clamp `index` into `0..=max`
fn clamp(index: i64, max: usize) -> usize {
    if index < 0 {
        0
    } else {
        usize::try_from(index).map_or(max, |i| i.min(max))
    }
}

impl From<Vec<String>> for PathList {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl<S: Into<String>> FromIterator<S> for PathList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn abc() -> PathList {
        PathList::from_iter(["a", "b", "c"])
    }

    #[rstest]
    #[case(-5, 0)]
    #[case(-1, 0)]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(4, 3)]
    #[case(i64::MAX, 3)]
    fn test_insert_clamps_index(#[case] index: i64, #[case] expected: usize) {
        let mut list = abc();
        list.insert("x", index);

        assert_eq!(list.len(), 4);
        assert_eq!(list.get(expected), Some("x"));
    }

    #[test]
    fn test_insert_into_empty_list() {
        let mut list = PathList::new();
        list.insert("/bin", 7);
        assert_eq!(list.entries(), ["/bin"]);
    }

    #[rstest]
    #[case(-3, "a", &["b", "c"])]
    #[case(0, "a", &["b", "c"])]
    #[case(1, "b", &["a", "c"])]
    #[case(2, "c", &["a", "b"])]
    #[case(3, "c", &["a", "b"])]
    #[case(100, "c", &["a", "b"])]
    fn test_remove_clamps_index(
        #[case] index: i64,
        #[case] removed: &str,
        #[case] remaining: &[&str],
    ) {
        let mut list = abc();
        assert_eq!(list.remove(index).unwrap(), removed);
        assert_eq!(list.entries(), remaining);
    }

    #[rstest]
    #[case(-1)]
    #[case(0)]
    #[case(1)]
    #[case(i64::MAX)]
    fn test_remove_single_entry_always_empties(#[case] index: i64) {
        let mut list = PathList::from_iter(["/bin"]);
        assert_eq!(list.remove(index).unwrap(), "/bin");
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_from_empty_list_is_bounds_error() {
        let mut list = PathList::new();
        let err = list.remove(0).unwrap_err();
        assert!(matches!(err, PathsError::Bounds { index: 0, len: 0 }));
        assert!(list.is_empty());
    }

    #[rstest]
    #[case(0, 2, &["b", "c", "a"])]
    #[case(2, 0, &["c", "a", "b"])]
    #[case(0, 1, &["b", "a", "c"])]
    #[case(1, -4, &["b", "a", "c"])]
    #[case(0, 99, &["b", "c", "a"])]
    #[case(1, 1, &["a", "b", "c"])]
    #[case(3, 0, &["a", "b", "c"])]
    #[case(-1, 0, &["a", "b", "c"])]
    fn test_move_entry(#[case] src: i64, #[case] dst: i64, #[case] expected: &[&str]) {
        let mut list = abc();
        list.move_entry(src, dst);
        assert_eq!(list.entries(), expected);
    }

    #[test]
    fn test_replace_in_range() {
        let mut list = abc();
        list.replace(1, "/opt/bin");
        assert_eq!(list.entries(), ["a", "/opt/bin", "c"]);
    }

    #[rstest]
    #[case(-1)]
    #[case(3)]
    #[case(i64::MIN)]
    fn test_replace_out_of_range_is_ignored(#[case] target: i64) {
        let mut list = abc();
        list.replace(target, "x");
        assert_eq!(list, abc());
    }

    #[test]
    fn test_swap() {
        let mut list = abc();
        list.swap(0, 2).unwrap();
        assert_eq!(list.entries(), ["c", "b", "a"]);
    }

    #[test]
    fn test_swap_same_index_is_noop_even_out_of_range() {
        let mut list = abc();
        list.swap(9, 9).unwrap();
        assert_eq!(list, abc());
    }

    #[test]
    fn test_swap_out_of_range_is_bounds_error() {
        let mut list = abc();
        let err = list.swap(0, 3).unwrap_err();
        assert!(matches!(err, PathsError::Bounds { index: 3, len: 3 }));
        assert_eq!(list, abc());
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        let mut list = PathList::from_iter(["/bin", "/usr/bin", "/bin", "", "/usr/bin", ""]);
        list.deduplicate();
        assert_eq!(list.entries(), ["/bin", "/usr/bin", ""]);
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let mut once = PathList::from_iter(["c", "a", "c", "b", "a"]);
        once.deduplicate();
        let mut twice = once.clone();
        twice.deduplicate();
        assert_eq!(once, twice);
        assert_eq!(once.entries(), ["c", "a", "b"]);
    }

    #[rstest]
    #[case("a:b:c", &["a", "b", "c"])]
    #[case("a::c", &["a", "", "c"])]
    #[case(":a:", &["", "a", ""])]
    #[case("", &[""])]
    fn test_load_from_delimited(#[case] input: &str, #[case] expected: &[&str]) {
        let mut list = abc();
        list.load_from_delimited(input);
        assert_eq!(list.entries(), expected);
    }

    #[test]
    fn test_json_round_trip_preserves_entries() {
        let list = PathList::from_iter(["/usr/bin", "", "/bin", "/usr/bin", "it's \"quoted\""]);
        let bytes = list.to_json().unwrap();
        assert_eq!(PathList::from_json(&bytes).unwrap(), list);
    }

    #[test]
    fn test_empty_list_serializes_to_empty_array() {
        assert_eq!(PathList::new().to_json().unwrap(), b"[]");
    }

    #[test]
    fn test_load_from_json_rejects_non_string_array() {
        let mut list = abc();
        let inputs: [&[u8]; 4] = [b"{\"a\": 1}", b"[1, 2]", b"not json", b"[\"a\""];
        for bad in inputs {
            let err = list.load_from_json(bad).unwrap_err();
            assert!(matches!(err, PathsError::Decode(_)));
        }
        assert_eq!(list, abc());
    }

    #[test]
    fn test_join() {
        assert_eq!(abc().join(), "a:b:c");
    }
}
