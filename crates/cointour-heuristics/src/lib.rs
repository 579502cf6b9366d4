pub mod greedy;
pub mod random;

pub use greedy::NearestNeighbor;
pub use random::RandomShuffle;
