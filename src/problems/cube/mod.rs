mod action;
mod description;
mod problem;
mod state;

pub use action::{CubeAction, Direction};
pub use description::{CubeDescription, GoalDescription, StateDescription};
pub use problem::Cube;
pub use state::{CubeState, Label, Shape};
