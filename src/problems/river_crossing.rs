//! Missionaries and cannibals crossing a river in a two-seat boat.

use crate::search::{HeuristicValue, Problem, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use strum_macros::Display as StrumDisplay;

pub const BOAT_CAPACITY: u32 = 2;

/// Every load the boat can carry, in the order actions are enumerated.
pub const BOAT_LOADS: [BoatLoad; 5] = [
    BoatLoad::new(0, 1),
    BoatLoad::new(0, 2),
    BoatLoad::new(1, 0),
    BoatLoad::new(2, 0),
    BoatLoad::new(1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum BankSide {
    Start,
    Far,
}

impl BankSide {
    pub fn opposite(&self) -> Self {
        match self {
            BankSide::Start => BankSide::Far,
            BankSide::Far => BankSide::Start,
        }
    }
}

/// People left on the start bank and the side the boat is moored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiverState {
    pub missionaries: u32,
    pub cannibals: u32,
    pub boat: BankSide,
}

impl RiverState {
    pub fn new(missionaries: u32, cannibals: u32, boat: BankSide) -> Self {
        Self {
            missionaries,
            cannibals,
            boat,
        }
    }
}

impl Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.missionaries, self.cannibals, self.boat
        )
    }
}

/// The people in the boat for one crossing. Serialised as a
/// `[missionaries, cannibals]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct BoatLoad {
    pub missionaries: u32,
    pub cannibals: u32,
}

impl BoatLoad {
    pub const fn new(missionaries: u32, cannibals: u32) -> Self {
        Self {
            missionaries,
            cannibals,
        }
    }

    pub fn occupants(&self) -> u32 {
        self.missionaries.saturating_add(self.cannibals)
    }
}

impl From<(u32, u32)> for BoatLoad {
    fn from((missionaries, cannibals): (u32, u32)) -> Self {
        Self::new(missionaries, cannibals)
    }
}

impl From<BoatLoad> for (u32, u32) {
    fn from(load: BoatLoad) -> Self {
        (load.missionaries, load.cannibals)
    }
}

impl Display for BoatLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.missionaries, self.cannibals)
    }
}

/// Move everyone from the start bank to the far bank. Missionaries may never
/// be outnumbered by cannibals on a bank they are on.
#[derive(Debug, Clone)]
pub struct RiverCrossing {
    missionaries: u32,
    cannibals: u32,
    initial: RiverState,
    goal: RiverState,
}

impl RiverCrossing {
    pub fn new(missionaries: u32, cannibals: u32) -> Self {
        Self {
            missionaries,
            cannibals,
            initial: RiverState::new(missionaries, cannibals, BankSide::Start),
            goal: RiverState::new(0, 0, BankSide::Far),
        }
    }

    pub fn goal(&self) -> &RiverState {
        &self.goal
    }

    /// The state after the boat crosses with `load`, or `None` if the crossing
    /// is not allowed.
    pub fn cross(&self, state: &RiverState, load: &BoatLoad) -> Option<RiverState> {
        if load.occupants() == 0 || load.occupants() > BOAT_CAPACITY {
            return None;
        }
        let (missionaries, cannibals) = match state.boat {
            BankSide::Start => (
                state.missionaries.checked_sub(load.missionaries)?,
                state.cannibals.checked_sub(load.cannibals)?,
            ),
            BankSide::Far => (
                state.missionaries.checked_add(load.missionaries)?,
                state.cannibals.checked_add(load.cannibals)?,
            ),
        };
        if missionaries > self.missionaries || cannibals > self.cannibals {
            return None;
        }
        let far_missionaries = self.missionaries - missionaries;
        let far_cannibals = self.cannibals - cannibals;
        if !is_safe(missionaries, cannibals) || !is_safe(far_missionaries, far_cannibals) {
            return None;
        }
        Some(RiverState::new(
            missionaries,
            cannibals,
            state.boat.opposite(),
        ))
    }
}

fn is_safe(missionaries: u32, cannibals: u32) -> bool {
    missionaries == 0 || missionaries >= cannibals
}

impl Problem for RiverCrossing {
    type State = RiverState;
    type Action = BoatLoad;

    fn initial_state(&self) -> &RiverState {
        &self.initial
    }

    fn is_goal(&self, state: &RiverState) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &RiverState) -> Vec<BoatLoad> {
        BOAT_LOADS
            .into_iter()
            .filter(|load| self.cross(state, load).is_some())
            .collect()
    }

    fn result(&self, state: &RiverState, action: &BoatLoad) -> Result<RiverState, SearchError> {
        self.cross(state, action)
            .ok_or_else(|| SearchError::illegal_action(action, state))
    }

    /// Each crossing takes at most two people off the start bank.
    fn heuristic(&self, state: &RiverState) -> HeuristicValue {
        let people = f64::from(state.missionaries) + f64::from(state.cannibals);
        HeuristicValue::from(people / BOAT_CAPACITY as f64)
    }
}
