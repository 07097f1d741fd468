//! Activity domain entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::ActivityType;
pub use model::{Activity, CreateActivity};
pub use status::ActivityStatus;
