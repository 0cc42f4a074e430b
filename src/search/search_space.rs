use crate::search::{HeuristicValue, Plan, SearchNode};
use segvec::{Linear, SegVec};

/// Index of a node in a [`SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A [`SearchSpace`] is the arena holding every node created during one
/// search. Nodes refer to their parent by [`NodeId`] and are never modified
/// after insertion, so the tree can only be walked backwards from a leaf.
///
/// Unlike a state registry the arena does not deduplicate: tree search may
/// hold many nodes for the same state.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> SearchSpace<S, A> {
    pub fn new(initial_state: S, h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state, h));

        Self {
            root_node_id,
            nodes,
        }
    }

    pub fn insert_node(
        &mut self,
        parent_id: NodeId,
        action: A,
        state: S,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::new_with_parent(
            node_id, parent_id, action, state, g, h,
        ));
        node_id
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S, A> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A: Clone> SearchSpace<S, A> {
    /// Walk the parent links from `goal_id` back to the root and return the
    /// actions along the way in execution order. The root contributes no
    /// action, so a goal at the root yields the empty plan.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }
}
