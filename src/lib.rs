pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod pipeline;
pub mod shapes;
pub mod tags;
pub mod topology;

pub use error::{Result, TagmeshError};
pub use model::Model;
