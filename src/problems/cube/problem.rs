use crate::problems::cube::{CubeAction, CubeDescription, CubeState, Direction, Shape};
use crate::search::{validate, Goal, HeuristicValue, Problem, SearchError, Verification};
use std::path::Path;
use tracing::info;

/// The tile-cube puzzle: reach a goal layout by rotating rows and columns of
/// the initial layout one cell at a time. Every move costs 1.
#[derive(Debug, Clone)]
pub struct Cube {
    initial: CubeState,
    goal: Goal<CubeState>,
    actions: Vec<CubeAction>,
}

impl Cube {
    /// Fails if the goal set is empty or some goal has a different shape from
    /// the initial state.
    pub fn new(initial: CubeState, goal: Goal<CubeState>) -> Result<Self, SearchError> {
        let shape = initial.shape();
        if goal.targets().next().is_none() {
            return Err(SearchError::MalformedProblem(
                "goal set is empty".to_string(),
            ));
        }
        if let Some(target) = goal.targets().find(|target| target.shape() != shape) {
            let other = target.shape();
            return Err(SearchError::MalformedProblem(format!(
                "goal shape {}x{} differs from initial shape {}x{}",
                other.rows, other.cols, shape.rows, shape.cols
            )));
        }

        Ok(Self {
            actions: Self::all_actions(shape),
            initial,
            goal,
        })
    }

    pub fn from_description(description: CubeDescription) -> Result<Self, SearchError> {
        let initial = CubeState::try_from(description.initial)?;
        let goal = Goal::try_from(description.goal)?;
        Self::new(initial, goal)
    }

    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        Self::from_description(CubeDescription::from_json(text)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, SearchError> {
        Self::from_description(CubeDescription::from_toml(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        info!(path = %path.display(), "loading cube problem");
        Self::from_description(CubeDescription::from_path(path)?)
    }

    pub fn initial(&self) -> &CubeState {
        &self.initial
    }

    pub fn goal(&self) -> &Goal<CubeState> {
        &self.goal
    }

    /// Replay `solution` from the initial state, see [`validate`].
    pub fn verify_solution(&self, solution: &[CubeAction]) -> Verification {
        validate(self, solution)
    }

    /// Row moves first (left, right per row), then column moves (up, down
    /// per column).
    fn all_actions(shape: Shape) -> Vec<CubeAction> {
        let row_moves = (0..shape.rows).flat_map(|row| {
            [Direction::Left, Direction::Right]
                .into_iter()
                .map(move |direction| CubeAction::new(row, direction))
        });
        let col_moves = (0..shape.cols).flat_map(|col| {
            [Direction::Up, Direction::Down]
                .into_iter()
                .map(move |direction| CubeAction::new(col, direction))
        });
        row_moves.chain(col_moves).collect()
    }
}

impl Problem for Cube {
    type State = CubeState;
    type Action = CubeAction;

    fn initial_state(&self) -> &CubeState {
        &self.initial
    }

    fn is_goal(&self, state: &CubeState) -> bool {
        self.goal.is_satisfied(state)
    }

    fn actions(&self, _state: &CubeState) -> Vec<CubeAction> {
        self.actions.clone()
    }

    fn result(&self, state: &CubeState, action: &CubeAction) -> Result<CubeState, SearchError> {
        if state.shape() != self.initial.shape() || !self.actions.contains(action) {
            return Err(SearchError::illegal_action(action, state));
        }
        Ok(match action.direction {
            Direction::Left => state.left(action.index),
            Direction::Right => state.right(action.index),
            Direction::Up => state.up(action.index),
            Direction::Down => state.down(action.index),
        })
    }

    /// Misplaced cells divided by `max(rows, cols)`, as one move displaces at
    /// most that many cells. With several goals the closest one counts.
    fn heuristic(&self, state: &CubeState) -> HeuristicValue {
        let max_dimension = state.shape().max_dimension() as f64;
        self.goal
            .targets()
            .map(|target| {
                HeuristicValue::from(state.misplaced_cells(target) as f64 / max_dimension)
            })
            .min()
            .unwrap_or_else(|| HeuristicValue::from(0.))
    }
}
