/// What erasing a root without children does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootErase {
    /// Leave the root in place, the map keeps its only entry.
    #[default]
    Retain,
    /// Release the root, the map becomes empty.
    Clear,
}

/// Construction options for `OrderedMap`
///
/// # Examples
/// ```rust
/// use ordered_bst::{MapConfig, OrderedMap, RootErase};
///
/// let config = MapConfig::default()
///     .with_capacity(128)
///     .with_root_erase(RootErase::Clear);
///
/// let mut map = OrderedMap::with_config(config);
/// map.insert(1, 1);
/// map.erase(1);
/// assert!(map.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapConfig {
    /// Node slots to pre-allocate
    pub capacity: usize,
    pub root_erase: RootErase,
}

impl MapConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_root_erase(mut self, root_erase: RootErase) -> Self {
        self.root_erase = root_erase;
        self
    }
}
