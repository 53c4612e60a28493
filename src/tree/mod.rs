mod node;
pub use node::*;
mod node_id;
pub use node_id::*;
mod iterator;
pub use iterator::*;
mod node_stores;
pub use node_stores::*;

mod tree_remove;

use self::visit_stack::VisitStack;
mod visit_stack;

use crate::RootErase;

/// Key type of the tree
pub type Key = i64;
/// Value type of the tree
pub type Value = i64;

/// Plain binary search tree, with following considerations:
///
/// 1. No balancing, the shape is decided by insertion order alone
/// 2. Nodes live in a `NodeStore` and link to each other by `NodeId`
/// 3. Every walk is a loop or uses an explicit stack, a degenerated tree
///    can't overflow the call stack
///
/// # Example
/// ```rust
/// use ordered_bst::{BinaryTree, NodeStoreVec};
///
/// let node_store = NodeStoreVec::new();
/// let mut tree = BinaryTree::new(node_store);
///
/// // insert new value
/// assert!(tree.insert(3, 30).is_none());
///
/// // update by insert again
/// assert_eq!(tree.insert(3, 31).unwrap(), 30);
///
/// assert!(tree.contains(3));
/// assert_eq!(tree.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryTree<S: NodeStore> {
    root: Option<NodeId>,
    node_store: S,
    root_erase: RootErase,
    st: Statistic,
}

impl<S> BinaryTree<S>
where
    S: NodeStore,
{
    /// Create a new `BinaryTree` with the given `NodeStore`.
    pub fn new(node_store: S) -> Self {
        Self {
            root: None,
            node_store,
            root_erase: RootErase::default(),
            st: Statistic::default(),
        }
    }

    /// Set what erasing a root without children does
    pub fn with_root_erase(mut self, root_erase: RootErase) -> Self {
        self.root_erase = root_erase;
        self
    }

    /// Gets a reference to the `NodeStore` that this `BinaryTree` was created with.
    pub fn node_store(&self) -> &S {
        &self.node_store
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_erase(&self) -> RootErase {
        self.root_erase
    }

    /// Returns true if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Count the entries reachable from the root.
    ///
    /// Every present child counts as one, plus one for the root itself. The
    /// count is recomputed on each call, it always matches what a traversal
    /// visits.
    pub fn size(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut count = 1;
        let mut stack = VisitStack::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            let node = self.node_store.get_node(id);
            for child in [node.left(), node.right()].into_iter().flatten() {
                count += 1;
                stack.push(child);
            }
        }
        count
    }

    /// Number of nodes on the longest path from root to a leaf
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut height = 0;
        let mut stack = vec![(root, 1)];
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node_store.get_node(id);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Insert a new key-value pair into the tree. If the key exists, its value
    /// is overwritten in place and the previous value returned.
    pub fn insert(&mut self, k: Key, v: Value) -> Option<Value> {
        let Some(mut id) = self.root else {
            self.root = Some(self.node_store.add_node(Node::new(k, v)));
            return None;
        };

        loop {
            let node = self.node_store.get_mut_node(id);
            if node.key() == k {
                return Some(node.set_value(v));
            }

            let side = node.route(k);
            match node.child(side) {
                Some(child) => id = child,
                None => {
                    let child = self.node_store.add_node(Node::new(k, v));
                    self.node_store.get_mut_node(id).set_child(side, Some(child));
                    break;
                }
            }
        }

        None
    }

    /// Find the node holding `k`
    fn locate(&self, k: Key) -> Option<NodeId> {
        let mut id = self.root?;
        loop {
            let node = self.node_store.get_node(id);
            if node.key() == k {
                return Some(id);
            }
            id = node.child(node.route(k))?;
        }
    }

    /// Returns true if `k` is reachable from the root. An empty tree contains
    /// nothing.
    pub fn contains(&self, k: Key) -> bool {
        self.locate(k).is_some()
    }

    /// Get reference to value identified by key.
    pub fn get(&self, k: Key) -> Option<&Value> {
        let id = self.locate(k)?;
        Some(self.node_store.get_node(id).value())
    }

    /// Get mutable reference to value identified by key.
    pub fn get_mut(&mut self, k: Key) -> Option<&mut Value> {
        let id = self.locate(k)?;
        Some(self.node_store.get_mut_node(id).value_mut())
    }

    /// Returns the leftmost entry
    pub fn first(&self) -> Option<(Key, &Value)> {
        self.edge(Side::Left)
    }

    /// Returns the rightmost entry
    pub fn last(&self) -> Option<(Key, &Value)> {
        self.edge(Side::Right)
    }

    fn edge(&self, side: Side) -> Option<(Key, &Value)> {
        let mut node = self.node_store.get_node(self.root?);
        while let Some(child) = node.child(side) {
            node = self.node_store.get_node(child);
        }
        Some((node.key(), node.value()))
    }

    /// Create an in-order iterator on (K, &V) pairs
    pub fn iter(&self) -> Iter<S> {
        Iter::new(self)
    }

    /// Call `action` on every entry, in order
    pub fn for_each(&self, mut action: impl FnMut(Key, Value)) {
        for (k, v) in self.iter() {
            action(k, *v);
        }
    }

    /// Clear the tree
    pub fn clear(&mut self) {
        self.node_store.clear();
        self.root = None;
    }

    pub fn statistic(&self) -> &Statistic {
        &self.st
    }

    /// Ensures every live node in the store is reachable from the root
    /// exactly once.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        let mut seen = std::collections::HashSet::new();
        let mut stack = VisitStack::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            assert!(seen.insert(id), "node {id:?} reachable twice");
            let node = self.node_store.get_node(id);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push(child);
            }
        }

        if seen.len() != self.node_store.len() {
            self.node_store.debug();
        }
        assert_eq!(seen.len(), self.node_store.len());
        assert_eq!(seen.len(), self.size());
    }

    /// Ensures the in-order sequence is strictly ascending. Only holds for
    /// trees built by inserts, erase may break it.
    #[cfg(test)]
    pub(crate) fn validate_order(&self) {
        let keys = self.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "{keys:?}");
    }
}

impl<S: NodeStore> Default for BinaryTree<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Counters of what erase did, used to observe how lossy the erase policy is
#[derive(Default, Debug, Clone)]
pub struct Statistic {
    /// entries removed by erase
    pub erased: u64,
    /// erase hit a root without children and kept it
    pub root_retained: u64,
    /// subtrees cut loose by erase
    pub detached_subtrees: u64,
    /// nodes released together with those subtrees
    pub detached_nodes: u64,
}

/// NodeStore is the node storage for tree, responsible for
/// managing node memory and providing node access
pub trait NodeStore: Default {
    /// Add the node to the store and returns its id
    fn add_node(&mut self, node: Node) -> NodeId;

    /// Get the node
    /// # Panics
    /// if id is invalid or the node is already released, panic
    fn get_node(&self, id: NodeId) -> &Node;

    /// Get the node
    /// if id is invalid or the node is already released, returns None
    fn try_get_node(&self, id: NodeId) -> Option<&Node>;

    /// Get a mut reference to the node
    /// # Panics
    /// if id is invalid or the node is already released, panic
    fn get_mut_node(&mut self, id: NodeId) -> &mut Node;

    /// Take the node out of the store, its slot may be reused
    fn release_node(&mut self, id: NodeId) -> Option<Node>;

    /// Number of live nodes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release all nodes
    fn clear(&mut self);

    #[cfg(test)]
    fn debug(&self);
}

/// ensure BinaryTree is send
fn _ensure_send() {
    fn _assert_send<T: Send>() {}
    _assert_send::<BinaryTree<NodeStoreVec>>();
}
