//! Serialisable cube problem descriptions, read from JSON or TOML.

use crate::problems::cube::{CubeState, Label, Shape};
use crate::search::{Goal, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescription {
    /// `[rows, cols]`
    pub shape: [usize; 2],
    /// Row-major cell labels
    pub layout: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalDescription {
    Single(StateDescription),
    AnyOf(Vec<StateDescription>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeDescription {
    pub initial: StateDescription,
    pub goal: GoalDescription,
}

impl CubeDescription {
    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, SearchError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a description from a file, as TOML if the extension is `toml` and
    /// as JSON otherwise.
    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_json(&contents),
        }
    }
}

impl TryFrom<StateDescription> for CubeState {
    type Error = SearchError;

    fn try_from(description: StateDescription) -> Result<Self, Self::Error> {
        let [rows, cols] = description.shape;
        CubeState::new(Shape::new(rows, cols), description.layout)
    }
}

impl TryFrom<GoalDescription> for Goal<CubeState> {
    type Error = SearchError;

    fn try_from(description: GoalDescription) -> Result<Self, Self::Error> {
        match description {
            GoalDescription::Single(state) => Ok(Goal::Single(state.try_into()?)),
            GoalDescription::AnyOf(states) => Ok(Goal::AnyOf(
                states
                    .into_iter()
                    .map(CubeState::try_from)
                    .collect::<Result<_, _>>()?,
            )),
        }
    }
}
