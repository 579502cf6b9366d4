pub mod error;
pub mod matrix;
pub mod strategy;
pub mod tour;

pub use error::PathError;
pub use matrix::CostMatrix;
pub use strategy::PathStrategy;
pub use tour::Tour;
