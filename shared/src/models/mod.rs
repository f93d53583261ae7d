//! Domain models for the Climate Observation API

mod observation;
mod records;

pub use observation::*;
pub use records::*;
