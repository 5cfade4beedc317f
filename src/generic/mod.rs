//! Generic structures, not specific to ordered graphs.

pub mod cancel;
pub mod index_heap;
pub mod luby;
pub mod subsets;
