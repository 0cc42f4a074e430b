use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString};

/// Direction of a row (`Left`, `Right`) or column (`Up`, `Down`) rotation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Whether this direction rotates a row, as opposed to a column.
    pub fn moves_row(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Rotate row or column `index` by one cell in `direction`. Serialised as an
/// `[index, direction]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, Direction)", into = "(usize, Direction)")]
pub struct CubeAction {
    pub index: usize,
    pub direction: Direction,
}

impl CubeAction {
    pub fn new(index: usize, direction: Direction) -> Self {
        Self { index, direction }
    }
}

impl From<(usize, Direction)> for CubeAction {
    fn from((index, direction): (usize, Direction)) -> Self {
        Self::new(index, direction)
    }
}

impl From<CubeAction> for (usize, Direction) {
    fn from(action: CubeAction) -> Self {
        (action.index, action.direction)
    }
}

impl Display for CubeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.index, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn direction_names_are_lowercase() {
        let names: Vec<String> = Direction::iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["left", "right", "up", "down"]);
        assert_eq!(Direction::from_str("down").unwrap(), Direction::Down);
        assert!(Direction::from_str("sideways").is_err());
    }

    #[test]
    fn action_serialises_as_pair() {
        let action = CubeAction::new(2, Direction::Right);
        assert_eq!(serde_json::to_string(&action).unwrap(), r#"[2,"right"]"#);
        let parsed: CubeAction = serde_json::from_str(r#"[1, "up"]"#).unwrap();
        assert_eq!(parsed, CubeAction::new(1, Direction::Up));
        assert_eq!(parsed.to_string(), "[1, up]");
    }
}
