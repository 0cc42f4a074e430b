//! A* search

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{generate_successors, SearchEngine, SearchResult},
    HeuristicValue, Problem, SearchError, SearchSpace, SearchStatistics,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace};

/// A* search, ordering the frontier by `f = g + h` with `h` taken from
/// [`Problem::heuristic`].
///
/// Expanded states are closed for good: a cheaper path to a closed state found
/// later is ignored rather than reopened. A state may be queued several times
/// through different paths, but only if each new path is cheaper than every
/// earlier one; stale entries are skipped when popped. The goal test is
/// applied when a node is popped, so the returned plan has the cost of the
/// node actually expanded. Admissibility of the heuristic is left to the
/// problem.
#[derive(Debug, Default)]
pub struct AStar {
    statistics: SearchStatistics,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchEngine for AStar {
    fn search<P: Problem>(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::Action>, SearchError> {
        self.statistics.start_search("astar");
        let initial_state = problem.initial_state().clone();
        let initial_h = evaluate(problem, &initial_state);
        info!(initial_heuristic_value = initial_h.into_inner());

        let mut search_space = SearchSpace::new(initial_state, initial_h);
        let mut frontier = PriorityFrontier::new();
        let mut visited: HashSet<P::State> = HashSet::new();
        let mut best_g: HashMap<P::State, HeuristicValue> = HashMap::new();
        let root_node = search_space.get_root_node();
        best_g.insert(root_node.get_state().clone(), root_node.get_g());
        frontier.push(root_node.get_f(), root_node.get_node_id());

        while !frontier.is_empty() {
            let node_id = frontier.pop()?;
            let node = search_space.get_node(node_id);
            let state = node.get_state().clone();
            let g_value = node.get_g();

            if visited.contains(&state) {
                continue;
            }

            if problem.is_goal(&state) {
                debug!(cost = g_value.into_inner(), "goal found");
                self.statistics.finalise_search();
                return Ok(SearchResult::Success(search_space.extract_plan(node_id)));
            }

            trace!(?state, f = node.get_f().into_inner(), "expanding");
            visited.insert(state.clone());
            self.statistics.increment_expanded_nodes();
            for successor in generate_successors(problem, &state, g_value, &mut self.statistics)? {
                if visited.contains(&successor.state) {
                    self.statistics.increment_pruned_nodes();
                    continue;
                }

                if best_g
                    .get(&successor.state)
                    .is_some_and(|&g| g <= successor.g)
                {
                    self.statistics.increment_pruned_nodes();
                    continue;
                }
                best_g.insert(successor.state.clone(), successor.g);

                let h_value = evaluate(problem, &successor.state);
                let f_value = successor.g + h_value;
                let child_id = search_space.insert_node(
                    node_id,
                    successor.action,
                    successor.state,
                    successor.g,
                    h_value,
                );
                frontier.push(f_value, child_id);
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

fn evaluate<P: Problem>(problem: &P, state: &P::State) -> HeuristicValue {
    let h_value = problem.heuristic(state);
    debug_assert!(
        h_value >= HeuristicValue::from(0.),
        "heuristic must be non-negative"
    );
    h_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn initial_goal_gives_empty_plan() {
        let problem = LineProblem::new(1, 1);
        let result = AStar::new().search(&problem).unwrap();
        assert_eq!(result.plan().map(|plan| plan.len()), Some(0));
    }

    #[test]
    fn zero_heuristic_acts_as_uniform_cost_search() {
        let problem = LineProblem::new(0, 5);
        let result = AStar::new().search(&problem).unwrap();
        assert_eq!(result.plan().unwrap().len(), 3);
    }

    #[test]
    fn respects_step_costs() {
        // Stepping by 2 costs 3 here, so five steps of 1 (cost 5) beat any plan
        // using the long step (2 + 2 + 1 costs 7).
        let problem = LineProblem::new(0, 5).with_long_step_cost(3.);
        let result = AStar::new().search(&problem).unwrap();
        let plan = result.plan().unwrap();
        assert_eq!(plan.steps(), &[1, 1, 1, 1, 1]);
        assert_eq!(validate(&problem, plan).cost, HeuristicValue::from(5.));
    }

    #[test]
    fn never_expands_a_state_twice() {
        let problem = RecordingProblem::new(CycleProblem::new(9, 5));
        let result = AStar::new().search(&problem).unwrap();
        assert_eq!(result.plan().unwrap().len(), 4);
        assert_no_duplicate_expansions(&problem);
    }

    #[test]
    fn exhausts_cyclic_unsolvable_problem() {
        let problem = RecordingProblem::new(CycleProblem::new(5, 8));
        let result = AStar::new().search(&problem).unwrap();
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(problem.expanded_states().len(), 5);
    }

    #[test]
    fn illegal_action_propagates() {
        let result = AStar::new().search(&BrokenProblem);
        assert!(matches!(result, Err(SearchError::IllegalAction { .. })));
    }
}
