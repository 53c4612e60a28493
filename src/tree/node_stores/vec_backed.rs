use crate::tree::{Node, NodeId, NodeStore};

/// Node store backed by a `Vec`. Released slots are kept in a free list and
/// handed out again by `add_node`.
#[derive(Debug, Clone, Default)]
pub struct NodeStoreVec {
    nodes: Vec<Option<Node>>,
    free: Vec<NodeId>,
    len: usize,
}

impl NodeStoreVec {
    /// Create a new `NodeStoreVec`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `NodeStoreVec` with capacity
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
            ..Self::default()
        }
    }

    /// Number of slots, live or free
    pub fn slots(&self) -> usize {
        self.nodes.len()
    }

    /// Print nodes, used in test only
    #[cfg(test)]
    pub fn print(&self) {
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Some(node) => println!(
                    "node: {idx} key: {} l: {} r: {}",
                    node.key(),
                    node.left()
                        .map(|l| l.as_usize().to_string())
                        .unwrap_or("-".to_string()),
                    node.right()
                        .map(|r| r.as_usize().to_string())
                        .unwrap_or("-".to_string()),
                ),
                None => println!("node: {idx} <free>"),
            }
        }
    }
}

impl NodeStore for NodeStoreVec {
    fn add_node(&mut self, node: Node) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.as_usize()] = Some(node);
                id
            }
            None => {
                let id = NodeId::from_usize(self.nodes.len());
                self.nodes.push(Some(node));
                id
            }
        }
    }

    #[inline(always)]
    fn get_node(&self, id: NodeId) -> &Node {
        match self.nodes.get(id.as_usize()) {
            Some(Some(node)) => node,
            _ => panic!("invalid node id {}", id.as_usize()),
        }
    }

    fn try_get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_usize())?.as_ref()
    }

    #[inline(always)]
    fn get_mut_node(&mut self, id: NodeId) -> &mut Node {
        match self.nodes.get_mut(id.as_usize()) {
            Some(Some(node)) => node,
            _ => panic!("invalid node id {}", id.as_usize()),
        }
    }

    fn release_node(&mut self, id: NodeId) -> Option<Node> {
        let node = self.nodes.get_mut(id.as_usize())?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some(node)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.len = 0;
    }

    #[cfg(test)]
    fn debug(&self) {
        self.print()
    }
}

/// ensure NodeStoreVec is send and sync
fn _ensure_send_sync() {
    fn _assert_send_sync<T: Send + Sync>() {}
    _assert_send_sync::<NodeStoreVec>();
}
