use crate::search::{HeuristicValue, NodeId};
use std::hash::{Hash, Hasher};

/// A [`SearchNode`] is a node in the search tree. It records the state it
/// reaches, how it was reached and the costs the search orders it by.
///
/// Node identity is the identity of its state: two nodes compare equal
/// whenever their states do, regardless of parent, action or cost. This lets
/// visited sets and frontier membership tests ignore how a state was reached.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Position of the node in its [`SearchSpace`](crate::search::SearchSpace)
    node_id: NodeId,
    /// Parent node, `None` only for the root
    parent_id: Option<NodeId>,
    /// Action that led from the parent to this node, `None` only for the root
    action: Option<A>,
    /// The state reached by this node
    state: S,
    /// G-value of the node, i.e. the accumulated path cost to reach it
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Zero for uninformed search.
    h: HeuristicValue,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node of a search tree. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId, state: S, h: HeuristicValue) -> Self {
        Self {
            node_id,
            parent_id: None,
            action: None,
            state,
            g: HeuristicValue::from(0.),
            h,
        }
    }

    pub fn new_with_parent(
        node_id: NodeId,
        parent_id: NodeId,
        action: A,
        state: S,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            parent_id: Some(parent_id),
            action: Some(action),
            state,
            g,
            h,
        }
    }

    #[inline(always)]
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline(always)]
    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    #[inline(always)]
    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    #[inline(always)]
    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    /// F-value of the node, `g + h`.
    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl<S: PartialEq, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for SearchNode<S, A> {}

impl<S: Hash, A> Hash for SearchNode<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}
