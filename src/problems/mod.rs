pub mod cube;
pub mod river_crossing;
