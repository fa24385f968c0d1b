#![forbid(unsafe_code)]

pub mod model;
pub mod progress;
pub mod recommender;

pub use progress::WorkingList;
pub use recommender::{Recommendation, recommend};
