use crate::search::{HeuristicValue, SearchError};
use std::fmt::Debug;
use std::hash::Hash;

/// The capability set a search problem exposes to the search engines. The
/// engines are written purely against this trait and never inspect the
/// concrete state or action representation.
pub trait Problem {
    /// A complete snapshot of the problem configuration. Equality and hashing
    /// must be derived from the full contents of the state.
    type State: Clone + Eq + Hash + Debug;
    /// A transition label.
    type Action: Clone + Eq + Debug;

    fn initial_state(&self) -> &Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// The actions applicable in `state`, in a fixed order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state that results from executing `action` in `state`. Fails with
    /// [`SearchError::IllegalAction`] if `action` is not one of
    /// [`Problem::actions`] for `state`.
    fn result(&self, state: &Self::State, action: &Self::Action)
        -> Result<Self::State, SearchError>;

    /// The cost of a path that arrives at `next` from `state` via `action`,
    /// given cost `cost` to reach `state`. Unit cost by default.
    fn path_cost(
        &self,
        cost: HeuristicValue,
        _state: &Self::State,
        _action: &Self::Action,
        _next: &Self::State,
    ) -> HeuristicValue {
        cost + 1.
    }

    /// A non-negative estimate of the remaining cost from `state` to a goal.
    /// Zero by default, which turns A* into uniform cost search.
    fn heuristic(&self, _state: &Self::State) -> HeuristicValue {
        HeuristicValue::from(0.)
    }
}
