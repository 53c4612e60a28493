use super::{BinaryTree, Key, NodeId, NodeStore, Side, Value, VisitStack};
use crate::RootErase;

impl<S: NodeStore> BinaryTree<S> {
    /// Erase the entry identified by `k`, returns its value if an entry was
    /// taken out of the tree.
    ///
    /// The removed node's children are handed up to its parent as is, no
    /// successor is searched. That is cheap but lossy:
    ///
    /// - erasing the root keeps only its left subtree when it has one
    /// - erasing a node with two children overwrites the parent's other
    ///   link, the subtree hanging there is dropped
    /// - a right child's left subtree is attached to the parent's right link,
    ///   so ordering may break for later lookups
    ///
    /// Dropped subtrees are released from the node store right away.
    pub fn remove(&mut self, k: Key) -> Option<Value> {
        let root_id = self.root?;
        let result = if self.node_store.get_node(root_id).key() == k {
            self.remove_root(root_id)
        } else {
            self.remove_descend(root_id, k)
        };

        if result.is_some() {
            self.st.erased += 1;
        }

        #[cfg(test)]
        self.validate();

        result
    }

    fn remove_root(&mut self, root_id: NodeId) -> Option<Value> {
        let root = self.node_store.get_node(root_id);
        let (left, right) = (root.left(), root.right());

        match (left, right) {
            (Some(left), right) => {
                self.root = Some(left);
                if let Some(right) = right {
                    log::debug!("erase root {}: right subtree detached", root.key());
                    self.release_subtree(right);
                }
            }
            (None, Some(right)) => {
                self.root = Some(right);
            }
            (None, None) => match self.root_erase {
                RootErase::Retain => {
                    log::debug!("erase root {}: no children, root retained", root.key());
                    self.st.root_retained += 1;
                    return None;
                }
                RootErase::Clear => {
                    self.root = None;
                }
            },
        }

        let removed = self.node_store.release_node(root_id)?;
        Some(*removed.value())
    }

    /// Walk down looking for a node whose direct child holds `k`
    fn remove_descend(&mut self, mut id: NodeId, k: Key) -> Option<Value> {
        loop {
            let node = self.node_store.get_node(id);
            let next = node.child(node.route(k));

            let matched = [Side::Left, Side::Right].into_iter().find_map(|side| {
                let child = node.child(side)?;
                (self.node_store.get_node(child).key() == k).then_some((side, child))
            });

            if let Some((side, child)) = matched {
                return self.splice_out(id, side, child);
            }

            log::trace!("erase {k}: passing {}", node.key());
            id = next?;
        }
    }

    /// Unlink `child` from `parent`'s `side` and hand its subtrees to `parent`
    fn splice_out(&mut self, parent: NodeId, side: Side, child: NodeId) -> Option<Value> {
        let removed = self.node_store.release_node(child)?;
        log::trace!("erase {}: unlinked from {side:?} link", removed.key());

        let parent_node = self.node_store.get_mut_node(parent);
        let detached = match (removed.left(), removed.right()) {
            (Some(l), Some(r)) => {
                parent_node.set_child(side, Some(l));
                parent_node.set_child(side.opposite(), Some(r))
            }
            (Some(only), None) | (None, Some(only)) => {
                parent_node.set_child(side, Some(only));
                None
            }
            (None, None) => {
                parent_node.set_child(side, None);
                None
            }
        };

        if let Some(detached) = detached {
            log::debug!(
                "erase {}: {:?} subtree of parent detached",
                removed.key(),
                side.opposite()
            );
            self.release_subtree(detached);
        }

        Some(*removed.value())
    }

    /// Release `id` and everything below it, returns the released count
    fn release_subtree(&mut self, id: NodeId) -> usize {
        let mut released = 0;
        let mut stack = VisitStack::new();
        stack.push(id);
        while let Some(id) = stack.pop() {
            let Some(node) = self.node_store.release_node(id) else {
                continue;
            };
            released += 1;
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push(child);
            }
        }

        self.st.detached_subtrees += 1;
        self.st.detached_nodes += released as u64;
        released
    }
}
