use super::{Key, NodeId, Side, Value};

/// A single tree entry. Children are referenced by id, the node store owns
/// the memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: Key,
    value: Value,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    /// Create a leaf node
    pub fn new(key: Key, value: Value) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn key(&self) -> Key {
        self.key
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Overwrite the value, returns the previous one
    pub fn set_value(&mut self, value: Value) -> Value {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Replace the child link on `side`, returns the previous link
    pub fn set_child(&mut self, side: Side, child: Option<NodeId>) -> Option<NodeId> {
        match side {
            Side::Left => std::mem::replace(&mut self.left, child),
            Side::Right => std::mem::replace(&mut self.right, child),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The side a search for `k` continues on. Keys equal to or greater than
    /// this node's key are routed right.
    #[inline]
    pub fn route(&self, k: Key) -> Side {
        if self.key <= k {
            Side::Right
        } else {
            Side::Left
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route() {
        let node = Node::new(10, 0);
        assert_eq!(node.route(3), Side::Left);
        assert_eq!(node.route(10), Side::Right);
        assert_eq!(node.route(11), Side::Right);
    }

    #[test]
    fn test_set_child() {
        let mut node = Node::new(10, 0);
        assert!(node.is_leaf());

        assert_eq!(node.set_child(Side::Left, Some(NodeId(3))), None);
        assert_eq!(node.child(Side::Left), Some(NodeId(3)));
        assert_eq!(node.set_child(Side::Left, None), Some(NodeId(3)));
        assert!(node.is_leaf());

        assert_eq!(node.set_value(7), 0);
        assert_eq!(*node.value(), 7);
    }
}
