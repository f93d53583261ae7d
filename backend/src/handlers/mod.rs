//! HTTP handlers for the Climate Observation API

pub mod climate;
pub mod health;
pub mod index;

pub use climate::*;
pub use health::*;
pub use index::*;
