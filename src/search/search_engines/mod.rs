mod astar;
mod bfs_graph;
mod bfs_tree;
mod dfs_tree;
mod search_engine;

pub use astar::AStar;
pub use bfs_graph::BfsGraphSearch;
pub use bfs_tree::BfsTreeSearch;
pub use dfs_tree::DfsTreeSearch;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};

use search_engine::generate_successors;
