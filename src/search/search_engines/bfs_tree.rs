//! Breadth first tree search

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{generate_successors, SearchEngine, SearchResult},
    HeuristicValue, Problem, SearchError, SearchSpace, SearchStatistics,
};
use tracing::{debug, trace};

/// Breadth first tree search. The frontier is ordered by path cost, which for
/// unit step costs means by depth. States are not deduplicated, so the same
/// state may be expanded many times through different paths.
#[derive(Debug, Default)]
pub struct BfsTreeSearch {
    statistics: SearchStatistics,
}

impl BfsTreeSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchEngine for BfsTreeSearch {
    fn search<P: Problem>(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::Action>, SearchError> {
        self.statistics.start_search("bfs-tree");
        let mut search_space =
            SearchSpace::new(problem.initial_state().clone(), HeuristicValue::from(0.));
        let mut frontier = PriorityFrontier::new();
        let root_node = search_space.get_root_node();
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
