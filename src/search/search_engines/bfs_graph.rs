//! Breadth first graph search

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{generate_successors, SearchEngine, SearchResult},
    HeuristicValue, Problem, SearchError, SearchSpace, SearchStatistics,
};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Breadth first graph search. Same frontier ordering as
/// [`BfsTreeSearch`](crate::search::search_engines::BfsTreeSearch), but a
/// successor is discarded when its state has already been expanded or is
/// already queued. Every state is expanded at most once.
///
/// Expanded and queued states together are exactly the states ever pushed, so
/// both checks go through one set of reached states.
#[derive(Debug, Default)]
pub struct BfsGraphSearch {
    statistics: SearchStatistics,
}

impl BfsGraphSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchEngine for BfsGraphSearch {
    fn search<P: Problem>(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::Action>, SearchError> {
        self.statistics.start_search("bfs-graph");
        let mut search_space =
            SearchSpace::new(problem.initial_state().clone(), HeuristicValue::from(0.));
        let mut frontier = PriorityFrontier::new();
        let mut reached: HashSet<P::State> = HashSet::new();
        let root_node = search_space.get_root_node();
        reached.insert(root_node.get_state().clone());
        frontier.push(root_node.get_g(), root_node.get_node_id());

        while !frontier.is_empty() {
            let node_id = frontier.pop()?;
            let node = search_space.get_node(node_id);
            let state = node.get_state().clone();
            let g_value = node.get_g();

            if problem.is_goal(&state) {
                debug!(cost = g_value.into_inner(), "goal found");
                self.statistics.finalise_search();
                return Ok(SearchResult::Success(search_space.extract_plan(node_id)));
            }

            trace!(?state, "expanding");
            self.statistics.increment_expanded_nodes();
            for successor in generate_successors(problem, &state, g_value, &mut self.statistics)? {
                if !reached.insert(successor.state.clone()) {
                    self.statistics.increment_pruned_nodes();
                    continue;
                }
                let child_id = search_space.insert_node(
                    node_id,
                    successor.action,
                    successor.state,
                    successor.g,
                    HeuristicValue::from(0.),
                );
                frontier.push(successor.g, child_id);
                self.statistics.increment_generated_nodes();
            }
            self.statistics.register_frontier_size(frontier.len());
        }

        debug!("frontier exhausted");
        self.statistics.finalise_search();
        Ok(SearchResult::ProvablyUnsolvable)
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}
