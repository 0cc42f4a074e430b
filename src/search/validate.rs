use crate::search::{HeuristicValue, Problem, SearchError};
use tracing::debug;

/// Outcome of replaying a plan from the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    /// Whether the final state satisfies the goal
    pub goal_reached: bool,
    /// Accumulated path cost, zero if some action was not applicable
    pub cost: HeuristicValue,
}

impl Verification {
    fn rejected() -> Self {
        Self {
            goal_reached: false,
            cost: HeuristicValue::from(0.),
        }
    }

    /// The plan cost, or [`SearchError::InvalidPlan`] if the goal was not
    /// reached.
    pub fn into_cost(self) -> Result<HeuristicValue, SearchError> {
        if self.goal_reached {
            Ok(self.cost)
        } else {
            Err(SearchError::InvalidPlan)
        }
    }
}

/// Replay `plan` from the initial state of `problem`. An action that is not
/// applicable at its point in the sequence rejects the whole plan with zero
/// cost; otherwise the verification reports whether the goal was reached and
/// the total cost.
pub fn validate<P: Problem>(problem: &P, plan: &[P::Action]) -> Verification {
    let mut cur_state = problem.initial_state().clone();
    let mut cost = HeuristicValue::from(0.);
    for action in plan {
        if !problem.actions(&cur_state).contains(action) {
            debug!(?action, state = ?cur_state, "action is not applicable");
            return Verification::rejected();
        }
        let next_state = match problem.result(&cur_state, action) {
            Ok(state) => state,
            Err(err) => {
                debug!(%err, "transition failed");
                return Verification::rejected();
            }
        };
        cost = problem.path_cost(cost, &cur_state, action, &next_state);
        cur_state = next_state;
    }

    Verification {
        goal_reached: problem.is_goal(&cur_state),
        cost,
    }
}
