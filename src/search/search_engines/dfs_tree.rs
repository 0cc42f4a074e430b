//! Depth first tree search

use crate::search::{
    frontier::StackFrontier,
    search_engines::{generate_successors, SearchEngine, SearchResult},
    HeuristicValue, Problem, SearchError, SearchSpace, SearchStatistics,
};
use tracing::{debug, trace};

/// Depth first tree search. Children are pushed in the problem's action order,
/// so the last enumerated action is explored first. Without duplicate
/// detection this only terminates on problems whose search tree is finite;
/// it returns some plan, not necessarily a shortest one.
#[derive(Debug, Default)]
pub struct DfsTreeSearch {
    statistics: SearchStatistics,
}

impl DfsTreeSearch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchEngine for DfsTreeSearch {
    fn search<P: Problem>(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::Action>, SearchError> {
        self.statistics.start_search("dfs-tree");
        let mut search_space =
            SearchSpace::new(problem.initial_state().clone(), HeuristicValue::from(0.));
        let mut stack = StackFrontier::new();
        stack.push(search_space.get_root_node().get_node_id());

        while let Some(node_id) = stack.pop() {
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
                stack.push(child_id);
                self.statistics.increment_generated_nodes();
            }
            self.statistics.register_frontier_size(stack.len());
        }

        debug!("stack exhausted");
        self.statistics.finalise_search();
        Ok(SearchResult::ProvablyUnsolvable)
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn initial_goal_gives_empty_plan() {
        let problem = LineProblem::new(4, 4);
        let result = DfsTreeSearch::new().search(&problem).unwrap();
        assert_eq!(result.plan().map(|plan| plan.len()), Some(0));
    }

    #[test]
    fn finds_a_valid_plan() {
        let problem = LineProblem::new(0, 5);
        let result = DfsTreeSearch::new().search(&problem).unwrap();
        let plan = result.plan().expect("plan should exist");
        assert_eq!(plan.iter().sum::<u32>(), 5);
    }

    #[test]
    fn explores_last_action_first() {
        // Largest step is enumerated last, so it is tried first: 2 + 2 + 1
        let problem = LineProblem::new(0, 5);
        let result = DfsTreeSearch::new().search(&problem).unwrap();
        assert_eq!(result.plan().unwrap().steps(), &[2, 2, 1]);
    }

    #[test]
    fn exhausted_stack_is_unsolvable() {
        let problem = LineProblem::new(0, 7).with_limit(4);
        let mut engine = DfsTreeSearch::new();
        let result = engine.search(&problem).unwrap();
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert!(engine.statistics().expanded_nodes() > 0);
    }

    #[test]
    fn illegal_action_propagates() {
        let result = DfsTreeSearch::new().search(&BrokenProblem);
        assert!(matches!(result, Err(SearchError::IllegalAction { .. })));
    }
}
