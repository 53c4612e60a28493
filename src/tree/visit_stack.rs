use super::NodeId;

/// Keeps breadcrumbs of a tree walk. The tree is not balanced, so the depth
/// is unbounded and the stack grows on the heap.
#[derive(Debug, Clone, Default)]
pub struct VisitStack {
    nodes: Vec<NodeId>,
}

impl VisitStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.nodes.pop()
    }
}
