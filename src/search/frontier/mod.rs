//! Frontiers order the nodes that are waiting to be expanded. Both frontiers
//! only store [`NodeId`](crate::search::NodeId)s; membership tests resolve
//! the ids against the [`SearchSpace`](crate::search::SearchSpace) and
//! compare states, never node identity.

mod priority_frontier;
mod stack_frontier;

pub use priority_frontier::PriorityFrontier;
pub use stack_frontier::StackFrontier;
