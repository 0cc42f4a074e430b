use crate::search::{HeuristicValue, Problem, SearchError};
use std::cell::RefCell;
use std::collections::HashSet;

pub const CUBE_SOLVED_TEXT: &str = r#"{
    "initial": {"shape": [3, 3], "layout": ["N", "U", "S", "N", "U", "S", "N", "U", "S"]},
    "goal": {"shape": [3, 3], "layout": ["N", "U", "S", "N", "U", "S", "N", "U", "S"]}
}"#;

pub const CUBE_COLUMNS_TO_ROWS_TEXT: &str = r#"{
    "initial": {"shape": [3, 3], "layout": ["S", "O", "C", "S", "O", "C", "S", "O", "C"]},
    "goal": {"shape": [3, 3], "layout": ["S", "S", "S", "O", "O", "O", "C", "C", "C"]}
}"#;

pub const CUBE_NUMBERED_3X4_TEXT: &str = r#"{
    "initial": {"shape": [3, 4], "layout": [1, 1, 9, 0, 2, 2, 0, 2, 9, 0, 1, 9]},
    "goal": {"shape": [3, 4], "layout": [2, 1, 0, 9, 2, 1, 0, 9, 2, 1, 0, 9]}
}"#;

/// A single row can only be rotated cyclically, so swapping two cells is
/// unreachable.
pub const CUBE_UNREACHABLE_TEXT: &str = r#"{
    "initial": {"shape": [1, 3], "layout": ["A", "B", "C"]},
    "goal": {"shape": [1, 3], "layout": ["B", "A", "C"]}
}"#;

pub const CUBE_COLUMNS_TO_ROWS_TOML: &str = r#"
[initial]
shape = [3, 3]
layout = ["S", "O", "C", "S", "O", "C", "S", "O", "C"]

[[goal]]
shape = [3, 3]
layout = ["C", "C", "C", "O", "O", "O", "S", "S", "S"]

[[goal]]
shape = [3, 3]
layout = ["S", "S", "S", "O", "O", "O", "C", "C", "C"]
"#;

/// Walk along the number line from `start` to `target` in steps of 1 or 2,
/// never passing `limit`. The search tree is finite, so every engine
/// terminates on it.
#[derive(Debug)]
pub struct LineProblem {
    start: u32,
    target: u32,
    limit: u32,
    long_step_cost: f64,
}

impl LineProblem {
    pub fn new(start: u32, target: u32) -> Self {
        Self {
            start,
            target,
            limit: target.max(start),
            long_step_cost: 1.,
        }
    }

    pub fn with_limit(self, limit: u32) -> Self {
        Self { limit, ..self }
    }

    pub fn with_long_step_cost(self, long_step_cost: f64) -> Self {
        Self {
            long_step_cost,
            ..self
        }
    }
}

impl Problem for LineProblem {
    type State = u32;
    type Action = u32;

    fn initial_state(&self) -> &u32 {
        &self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.target
    }

    fn actions(&self, state: &u32) -> Vec<u32> {
        [1, 2]
            .into_iter()
            .filter(|step| state + step <= self.limit)
            .collect()
    }

    fn result(&self, state: &u32, action: &u32) -> Result<u32, SearchError> {
        if !self.actions(state).contains(action) {
            return Err(SearchError::illegal_action(action, state));
        }
        Ok(state + action)
    }

    fn path_cost(
        &self,
        cost: HeuristicValue,
        _state: &u32,
        action: &u32,
        _next: &u32,
    ) -> HeuristicValue {
        if *action == 2 {
            cost + self.long_step_cost
        } else {
            cost + 1.
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Forward,
    Backward,
}

/// States `0..size` arranged in a ring, every state reachable from every
/// other one in both directions.
#[derive(Debug)]
pub struct CycleProblem {
    size: u32,
    target: u32,
    start: u32,
}

impl CycleProblem {
    pub fn new(size: u32, target: u32) -> Self {
        Self {
            size,
            target,
            start: 0,
        }
    }
}

impl Problem for CycleProblem {
    type State = u32;
    type Action = Turn;

    fn initial_state(&self) -> &u32 {
        &self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.target
    }

    fn actions(&self, _state: &u32) -> Vec<Turn> {
        vec![Turn::Forward, Turn::Backward]
    }

    fn result(&self, state: &u32, action: &Turn) -> Result<u32, SearchError> {
        Ok(match action {
            Turn::Forward => (state + 1) % self.size,
            Turn::Backward => (state + self.size - 1) % self.size,
        })
    }
}

/// Enumerates an action its transition function rejects.
#[derive(Debug)]
pub struct BrokenProblem;

impl Problem for BrokenProblem {
    type State = u32;
    type Action = u32;

    fn initial_state(&self) -> &u32 {
        &0
    }

    fn is_goal(&self, _state: &u32) -> bool {
        false
    }

    fn actions(&self, _state: &u32) -> Vec<u32> {
        vec![1]
    }

    fn result(&self, state: &u32, action: &u32) -> Result<u32, SearchError> {
        Err(SearchError::illegal_action(action, state))
    }
}

/// Wraps a problem and records every state whose actions are requested, i.e.
/// every state an engine expands.
#[derive(Debug)]
pub struct RecordingProblem<P: Problem> {
    inner: P,
    expanded: RefCell<Vec<P::State>>,
}

impl<P: Problem> RecordingProblem<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            expanded: RefCell::new(vec![]),
        }
    }

    pub fn expanded_states(&self) -> Vec<P::State> {
        self.expanded.borrow().clone()
    }
}

impl<P: Problem> Problem for RecordingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> &P::State {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.inner.is_goal(state)
    }

    fn actions(&self, state: &P::State) -> Vec<P::Action> {
        self.expanded.borrow_mut().push(state.clone());
        self.inner.actions(state)
    }

    fn result(&self, state: &P::State, action: &P::Action) -> Result<P::State, SearchError> {
        self.inner.result(state, action)
    }

    fn path_cost(
        &self,
        cost: HeuristicValue,
        state: &P::State,
        action: &P::Action,
        next: &P::State,
    ) -> HeuristicValue {
        self.inner.path_cost(cost, state, action, next)
    }

    fn heuristic(&self, state: &P::State) -> HeuristicValue {
        self.inner.heuristic(state)
    }
}

pub fn assert_no_duplicate_expansions<P: Problem>(problem: &RecordingProblem<P>) {
    let expanded = problem.expanded_states();
    let unique: HashSet<&P::State> = expanded.iter().collect();
    assert_eq!(
        unique.len(),
        expanded.len(),
        "some state was expanded twice: {:?}",
        expanded
    );
}
