//! Reward domain entities.

pub mod model;

pub use model::{CreateReward, Reward};
