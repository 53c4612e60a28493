use std::iter::FusedIterator;

use super::*;

/// A borrowed in-order iterator for BinaryTree
///
/// The stack holds the nodes whose left subtree is being visited, the top
/// is always the next entry to yield.
pub struct Iter<'a, S: NodeStore> {
    tree: &'a BinaryTree<S>,
    stack: VisitStack,
}

impl<'a, S: NodeStore> Iter<'a, S> {
    pub(crate) fn new(tree: &'a BinaryTree<S>) -> Self {
        let mut me = Self {
            tree,
            stack: VisitStack::new(),
        };
        me.push_left_spine(tree.root);
        me
    }

    fn push_left_spine(&mut self, mut id: Option<NodeId>) {
        while let Some(node_id) = id {
            self.stack.push(node_id);
            id = self.tree.node_store.get_node(node_id).left();
        }
    }
}

impl<'a, S: NodeStore> Iterator for Iter<'a, S> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node_store.get_node(id);
        self.push_left_spine(node.right());
        Some((node.key(), node.value()))
    }
}

impl<'a, S: NodeStore> FusedIterator for Iter<'a, S> {}

#[cfg(test)]
mod tests {
    use super::super::tests::create_test_tree;
    use super::*;

    #[test]
    fn test_iter() {
        let (tree, mut keys) = create_test_tree::<100>();
        keys.sort();

        let kvs = tree.iter().map(|(k, v)| (k, *v)).collect::<Vec<_>>();
        assert_eq!(
            kvs,
            keys.iter().map(|k| (*k, k % 13)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_iter_empty() {
        let tree = BinaryTree::new(NodeStoreVec::new());
        let mut iter = tree.iter();
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_matches_for_each() {
        let (tree, _) = create_test_tree::<50>();

        let mut visited = vec![];
        tree.for_each(|k, v| visited.push((k, v)));

        let iterated = tree.iter().map(|(k, v)| (k, *v)).collect::<Vec<_>>();
        assert_eq!(visited, iterated);
    }
}
