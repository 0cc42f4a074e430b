use crate::search::{NodeId, SearchSpace};

/// LIFO frontier, used by depth first search.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<NodeId>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self { stack: vec![] }
    }

    pub fn push(&mut self, node_id: NodeId) {
        self.stack.push(node_id);
    }

    /// Remove and return the most recently pushed node.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    /// Whether a node with the given state is on the stack. Linear in the
    /// stack size.
    pub fn contains<S: PartialEq, A>(&self, state: &S, space: &SearchSpace<S, A>) -> bool {
        self.stack
            .iter()
            .any(|&node_id| space.get_state(node_id) == state)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
