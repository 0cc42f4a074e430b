use crate::search::{
    search_engines::{AStar, BfsGraphSearch, BfsTreeSearch, DfsTreeSearch},
    HeuristicValue, Plan, Problem, SearchError, SearchStatistics,
};
use clap;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful. The plan is empty if the initial state
    /// already satisfies the goal.
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal
    ProvablyUnsolvable,
}

impl<A> SearchResult<A> {
    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::ProvablyUnsolvable => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}

/// A search engine explores the state space of any [`Problem`]. Engines hold
/// no state between calls apart from the statistics of the last search.
///
/// No engine bounds its own running time: on infinite state spaces (or cyclic
/// ones for tree search) a search may never return.
pub trait SearchEngine: Debug {
    fn search<P: Problem>(&mut self, problem: &P)
        -> Result<SearchResult<P::Action>, SearchError>;

    /// Statistics of the most recent call to [`SearchEngine::search`].
    fn statistics(&self) -> &SearchStatistics;
}

/// One generated successor of an expanded state.
pub(super) struct Successor<S, A> {
    pub action: A,
    pub state: S,
    pub g: HeuristicValue,
}

/// Apply every applicable action of `state`, in the problem's order. An
/// illegal action reported by the transition function is propagated.
pub(super) fn generate_successors<P: Problem>(
    problem: &P,
    state: &P::State,
    g: HeuristicValue,
    statistics: &mut SearchStatistics,
) -> Result<Vec<Successor<P::State, P::Action>>, SearchError> {
    let actions = problem.actions(state);
    statistics.increment_generated_actions(actions.len());
    actions
        .into_iter()
        .map(|action| {
            let next = problem.result(state, &action)?;
            let next_g = problem.path_cost(g, state, &action, &next);
            Ok(Successor {
                action,
                state: next,
                g: next_g,
            })
        })
        .collect()
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth first tree search, no duplicate detection.")]
    BfsTree,
    #[clap(help = "Depth first tree search, may not terminate on cyclic problems.")]
    DfsTree,
    #[clap(help = "Breadth first graph search, never expands a state twice.")]
    BfsGraph,
    #[clap(name = "astar", help = "A* search guided by the problem's heuristic.")]
    AStar,
}

impl SearchEngineName {
    pub fn search<P: Problem>(
        &self,
        problem: &P,
    ) -> Result<SearchResult<P::Action>, SearchError> {
        match self {
            SearchEngineName::BfsTree => BfsTreeSearch::new().search(problem),
            SearchEngineName::DfsTree => DfsTreeSearch::new().search(problem),
            SearchEngineName::BfsGraph => BfsGraphSearch::new().search(problem),
            SearchEngineName::AStar => AStar::new().search(problem),
        }
    }
}
