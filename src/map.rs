use std::fmt;

use crate::{
    tree::{Iter, Key, Value},
    BinaryTree, MapConfig, MapError, NodeStoreVec, RootErase,
};

/// Ordered map from integer keys to integer values, backed by a plain binary
/// search tree.
///
/// The tree is never rebalanced, inserting keys in sorted order builds a
/// list. Erase splices nodes out without searching a successor and may drop
/// whole subtrees, see [`OrderedMap::erase`].
#[derive(Clone, Default)]
pub struct OrderedMap {
    inner: BinaryTree<NodeStoreVec>,
}

impl OrderedMap {
    /// Create a new OrderedMap
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.size(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    /// Create a new OrderedMap with config
    pub fn with_config(config: MapConfig) -> Self {
        let node_store = NodeStoreVec::with_capacity(config.capacity);
        let inner = BinaryTree::new(node_store).with_root_erase(config.root_erase);

        Self { inner }
    }

    /// What erasing a root without children does for this map
    pub fn root_erase(&self) -> RootErase {
        self.inner.root_erase()
    }

    /// Returns the number of entries, counted by walking the tree
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 2);
    /// map.insert(2, 4);
    /// map.insert(1, 3);
    ///
    /// assert_eq!(map.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns true if the map contains no item
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of nodes on the longest root to leaf path
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = (0..10).map(|i| (i, i)).collect::<OrderedMap>();
    ///
    /// // sorted input is never rebalanced
    /// assert_eq!(map.height(), 10);
    /// ```
    #[inline]
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Insert a key-value pair into the map. An existing key keeps its node
    /// and gets the new value, the previous value is returned.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(1, 2), None);
    /// assert_eq!(map.insert(1, 3), Some(2));
    ///
    /// assert_eq!(map.get(1), Some(&3));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.inner.insert(key, value)
    }

    /// Erase `key` from the map, returns the erased value.
    ///
    /// The erased node's subtrees are handed to its parent without searching
    /// a successor:
    ///
    /// - the root is replaced by its left child, its right subtree is
    ///   dropped. Without a left child the right child takes over. A root
    ///   without children stays in place unless the map was configured with
    ///   [`RootErase::Clear`]
    /// - a node with two children is replaced by its left subtree on its own
    ///   side of the parent, its right subtree replaces the parent's other
    ///   child
    /// - a node with one child is replaced by that child
    ///
    /// Erasing a missing key, or erasing from an empty map, does nothing.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(10, 1);
    /// map.insert(5, 2);
    ///
    /// assert_eq!(map.erase(5), Some(2));
    /// assert_eq!(map.erase(5), None);
    /// assert!(!map.contains(5));
    /// ```
    #[inline]
    pub fn erase(&mut self, key: Key) -> Option<Value> {
        self.inner.remove(key)
    }

    /// Like [`OrderedMap::erase`], but reports erasing from an empty map as an
    /// error
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::{MapError, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.try_erase(1), Err(MapError::EmptyMap { op: "erase" }));
    ///
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// assert_eq!(map.try_erase(2), Ok(Some(2)));
    /// ```
    pub fn try_erase(&mut self, key: Key) -> Result<Option<Value>, MapError> {
        self.ensure_not_empty("erase")?;
        Ok(self.erase(key))
    }

    /// Returns true if the key is in the map. An empty map contains nothing.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(!map.contains(1));
    ///
    /// map.insert(1, 2);
    /// assert!(map.contains(1));
    /// ```
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.inner.contains(key)
    }

    /// Like [`OrderedMap::contains`], but reports querying an empty map as an
    /// error
    pub fn try_contains(&self, key: Key) -> Result<bool, MapError> {
        self.ensure_not_empty("contains")?;
        Ok(self.contains(key))
    }

    fn ensure_not_empty(&self, op: &'static str) -> Result<(), MapError> {
        if self.is_empty() {
            log::debug!("{op} on an empty map");
            return Err(MapError::EmptyMap { op });
        }
        Ok(())
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 2);
    ///
    /// assert_eq!(map.get(1), Some(&2));
    /// assert!(map.get(2).is_none());
    /// ```
    #[inline]
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Returns a mut reference to the value corresponding to the key.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 2);
    /// *map.get_mut(1).unwrap() += 1;
    /// assert_eq!(map.get(1), Some(&3));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, key: Key) -> Option<&mut Value> {
        self.inner.get_mut(key)
    }

    /// Returns the leftmost entry, the smallest key while the ordering holds
    #[inline]
    pub fn first(&self) -> Option<(Key, &Value)> {
        self.inner.first()
    }

    /// Returns the rightmost entry
    #[inline]
    pub fn last(&self) -> Option<(Key, &Value)> {
        self.inner.last()
    }

    /// Calls `action` with every key and value, in ascending key order.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, 20);
    /// map.insert(1, 10);
    ///
    /// let mut sum = 0;
    /// map.for_each(|k, v| sum += k * v);
    /// assert_eq!(sum, 50);
    /// ```
    #[inline]
    pub fn for_each(&self, action: impl FnMut(Key, Value)) {
        self.inner.for_each(action)
    }

    /// Returns an in-order iterator over the map.
    ///
    /// # Examples
    /// ```rust
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, 3);
    /// map.insert(1, 2);
    ///
    /// let kvs = map.iter().map(|(k, v)| (k, *v)).collect::<Vec<_>>();
    /// assert_eq!(kvs, vec![(1, 2), (2, 3)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, NodeStoreVec> {
        self.inner.iter()
    }

    /// Returns an in-order iterator over the keys
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Remove every entry
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Erase counters, see [`crate::tree::Statistic`]
    pub fn statistic(&self) -> &crate::tree::Statistic {
        self.inner.statistic()
    }
}

impl fmt::Debug for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(Key, Value)> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Extend<(Key, Value)> for OrderedMap {
    fn extend<T: IntoIterator<Item = (Key, Value)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (Key, &'a Value);
    type IntoIter = Iter<'a, NodeStoreVec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sample_map() -> OrderedMap {
        let mut map = OrderedMap::new();
        for k in [10, 5, 15, 2, 4, 12, 14] {
            map.insert(k, k);
        }
        map
    }

    #[test]
    fn test_insert_then_erase_scenario() {
        let mut map = OrderedMap::new();
        assert_eq!(map.size(), 0);

        for k in [10, 5, 15, 2, 4, 12, 14] {
            map.insert(k, k);
        }

        assert_eq!(map.size(), 7);
        assert!(map.contains(4));
        assert!(map.contains(12));
        assert!(!map.contains(3));
        assert!(!map.contains(13));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![2, 4, 5, 10, 12, 14, 15]);

        map.erase(15);
        map.erase(14);
        map.erase(2);

        assert_eq!(map.size(), 4);
        assert!(map.contains(4));
        assert!(map.contains(12));
        assert!(!map.contains(2));
        assert!(!map.contains(14));

        let mut keys = vec![];
        map.for_each(|k, _| keys.push(k));
        assert_eq!(keys, vec![4, 5, 10, 12]);

        map.inner.validate();
    }

    #[test]
    fn test_for_each_is_repeatable() {
        let map = sample_map();

        let mut first = vec![];
        map.for_each(|k, v| first.push((k, v)));
        let mut second = vec![];
        map.for_each(|k, v| second.push((k, v)));

        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[rstest]
    #[case::leaf(14, vec![2, 4, 5, 10, 12, 15])]
    #[case::right_child_with_left_only(15, vec![2, 4, 5, 10, 12, 14])]
    #[case::left_child_with_left_only(5, vec![2, 4, 10, 12, 14, 15])]
    #[case::left_child_with_right_only(2, vec![4, 5, 10, 12, 14, 15])]
    #[case::root_drops_right_subtree(10, vec![2, 4, 5])]
    #[case::missing(3, vec![2, 4, 5, 10, 12, 14, 15])]
    fn test_erase_cases(#[case] key: i64, #[case] expected: Vec<i64>) {
        let mut map = sample_map();
        map.erase(key);

        assert_eq!(map.keys().collect::<Vec<_>>(), expected);
        assert_eq!(map.size(), expected.len());
        assert!(!map.contains(key));
        map.inner.validate();
    }

    #[rstest]
    #[case::retain(RootErase::Retain, 1)]
    #[case::clear(RootErase::Clear, 0)]
    fn test_erase_lone_root(#[case] root_erase: RootErase, #[case] size: usize) {
        let mut map = OrderedMap::with_config(MapConfig::default().with_root_erase(root_erase));
        assert_eq!(map.root_erase(), root_erase);

        map.insert(7, 70);
        map.erase(7);

        assert_eq!(map.size(), size);
        assert_eq!(map.contains(7), size == 1);
        assert_eq!(map.is_empty(), size == 0);
    }

    #[test]
    fn test_empty_map_hardened() {
        let mut map = OrderedMap::new();
        assert!(!map.contains(1));
        assert_eq!(map.erase(1), None);
        assert!(map.is_empty());
        assert!(map.first().is_none());
        assert!(map.last().is_none());
    }

    #[test]
    fn test_empty_map_checked() {
        let mut map = OrderedMap::new();
        assert_eq!(
            map.try_contains(1),
            Err(MapError::EmptyMap { op: "contains" })
        );
        assert_eq!(map.try_erase(1), Err(MapError::EmptyMap { op: "erase" }));

        map.insert(1, 10);
        assert_eq!(map.try_contains(1), Ok(true));
        assert_eq!(map.try_contains(2), Ok(false));
        // a lone root is retained by default, the map never becomes empty
        assert_eq!(map.try_erase(1), Ok(None));
        assert_eq!(map.try_contains(1), Ok(true));
    }

    #[test]
    fn test_debug_and_collect() {
        let map = [(3, 30), (1, 10), (2, 20)].into_iter().collect::<OrderedMap>();
        assert_eq!(format!("{map:?}"), "{1: 10, 2: 20, 3: 30}");

        let mut cloned = map.clone();
        cloned.extend([(4, 40), (1, 11)]);
        assert_eq!(format!("{cloned:?}"), "{1: 11, 2: 20, 3: 30, 4: 40}");
        assert_eq!(map.size(), 3);

        let pairs = (&cloned).into_iter().count();
        assert_eq!(pairs, 4);
    }

    #[test]
    fn test_clear() {
        let mut map = sample_map();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.size(), 0);
        map.insert(1, 1);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_statistic() {
        let mut map = sample_map();
        map.erase(10);
        map.erase(100);

        let st = map.statistic();
        assert_eq!(st.erased, 1);
        assert_eq!(st.detached_subtrees, 1);
        // 15, 12, 14
        assert_eq!(st.detached_nodes, 3);
    }
}
