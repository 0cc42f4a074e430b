//! The search engine: nodes, frontiers, the [`Problem`] abstraction and the
//! search algorithms written against it.

mod error;
pub mod frontier;
mod goal;
mod plan;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use error::SearchError;
pub use goal::Goal;
pub use plan::Plan;
pub use problem::Problem;
pub use search_node::SearchNode;
pub use search_space::{NodeId, SearchSpace};
pub use search_statistics::SearchStatistics;
pub use validate::{validate, Verification};
pub use verbosity::Verbosity;

use ordered_float::OrderedFloat;

/// Path costs and heuristic estimates.
pub type HeuristicValue = OrderedFloat<f64>;
