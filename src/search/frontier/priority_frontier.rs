use crate::search::{HeuristicValue, NodeId, SearchError, SearchSpace};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::fmt::Debug;

/// Min-priority frontier. Every queued node has its own entry, so the same
/// state may be queued several times through different nodes (as tree search
/// requires).
///
/// The order in which nodes of equal priority are popped is unspecified.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<HeuristicValue>>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    pub fn push(&mut self, priority: HeuristicValue, node_id: NodeId) {
        self.queue.push(node_id, Reverse(priority));
    }

    /// Remove and return the node with the smallest priority.
    pub fn pop(&mut self) -> Result<NodeId, SearchError> {
        self.queue
            .pop()
            .map(|(node_id, _)| node_id)
            .ok_or(SearchError::EmptyFrontier)
    }

    /// Whether a node with the given state is queued.
    pub fn contains<S: PartialEq, A>(&self, state: &S, space: &SearchSpace<S, A>) -> bool {
        self.find(state, space).is_some()
    }

    /// The priority of a queued node with the given state.
    pub fn get_priority<S: PartialEq + Debug, A>(
        &self,
        state: &S,
        space: &SearchSpace<S, A>,
    ) -> Result<HeuristicValue, SearchError> {
        self.find(state, space)
            .map(|(_, priority)| priority)
            .ok_or_else(|| SearchError::NotQueued(format!("{:?}", state)))
    }

    /// Replace the queued entry whose state matches the state of `node_id`
    /// with `node_id` at the new priority. The stale entry is located with a
    /// linear scan, then the new entry is pushed.
    pub fn update<S: PartialEq + Debug, A>(
        &mut self,
        priority: HeuristicValue,
        node_id: NodeId,
        space: &SearchSpace<S, A>,
    ) -> Result<(), SearchError> {
        let state = space.get_state(node_id);
        let (stale_id, _) = self
            .find(state, space)
            .ok_or_else(|| SearchError::NotQueued(format!("{:?}", state)))?;
        self.queue.remove(&stale_id);
        self.push(priority, node_id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn find<S: PartialEq, A>(
        &self,
        state: &S,
        space: &SearchSpace<S, A>,
    ) -> Option<(NodeId, HeuristicValue)> {
        self.queue
            .iter()
            .find(|&(&node_id, _)| space.get_state(node_id) == state)
            .map(|(&node_id, &Reverse(priority))| (node_id, priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space_with_states(states: &[char]) -> (SearchSpace<char, ()>, Vec<NodeId>) {
        let mut space = SearchSpace::new('r', (0.).into());
        let root = space.get_root_node().get_node_id();
        let ids = states
            .iter()
            .map(|&state| space.insert_node(root, (), state, (1.).into(), (0.).into()))
            .collect();
        (space, ids)
    }

    #[test]
    fn pops_smallest_priority_first() {
        let (_, ids) = space_with_states(&['a', 'b', 'c']);
        let mut frontier = PriorityFrontier::new();
        frontier.push((3.).into(), ids[0]);
        frontier.push((1.).into(), ids[1]);
        frontier.push((2.).into(), ids[2]);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop().unwrap(), ids[1]);
        assert_eq!(frontier.pop().unwrap(), ids[2]);
        assert_eq!(frontier.pop().unwrap(), ids[0]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn pop_on_empty_fails() {
        let mut frontier = PriorityFrontier::new();
        assert!(matches!(frontier.pop(), Err(SearchError::EmptyFrontier)));
    }

    #[test]
    fn ties_are_all_popped() {
        // The order among equal priorities is unspecified, only check that
        // every tied node comes out before the larger priority.
        let (_, ids) = space_with_states(&['a', 'b', 'c']);
        let mut frontier = PriorityFrontier::new();
        frontier.push((5.).into(), ids[2]);
        frontier.push((1.).into(), ids[0]);
        frontier.push((1.).into(), ids[1]);

        let mut first_two = vec![frontier.pop().unwrap(), frontier.pop().unwrap()];
        first_two.sort();
        assert_eq!(first_two, vec![ids[0], ids[1]]);
        assert_eq!(frontier.pop().unwrap(), ids[2]);
    }

    #[test]
    fn membership_is_by_state() {
        // Two different nodes for state 'a'
        let (space, ids) = space_with_states(&['a', 'a', 'b']);
        let mut frontier = PriorityFrontier::new();
        frontier.push((4.).into(), ids[0]);

        assert!(frontier.contains(&'a', &space));
        assert!(!frontier.contains(&'b', &space));
        assert_eq!(
            frontier.get_priority(&'a', &space).unwrap(),
            HeuristicValue::from(4.)
        );
        assert!(matches!(
            frontier.get_priority(&'b', &space),
            Err(SearchError::NotQueued(_))
        ));
    }

    #[test]
    fn update_replaces_entry_with_same_state() {
        let (space, ids) = space_with_states(&['a', 'a', 'b']);
        let mut frontier = PriorityFrontier::new();
        frontier.push((4.).into(), ids[0]);
        frontier.push((2.).into(), ids[2]);

        frontier.update((1.).into(), ids[1], &space).unwrap();
        assert_eq!(frontier.len(), 2);
        assert_eq!(
            frontier.get_priority(&'a', &space).unwrap(),
            HeuristicValue::from(1.)
        );
        assert_eq!(frontier.pop().unwrap(), ids[1]);
        assert_eq!(frontier.pop().unwrap(), ids[2]);
    }

    #[test]
    fn update_of_absent_state_fails() {
        let (space, ids) = space_with_states(&['a', 'b']);
        let mut frontier = PriorityFrontier::new();
        frontier.push((4.).into(), ids[0]);

        assert!(matches!(
            frontier.update((1.).into(), ids[1], &space),
            Err(SearchError::NotQueued(_))
        ));
        assert_eq!(frontier.len(), 1);
    }
}
