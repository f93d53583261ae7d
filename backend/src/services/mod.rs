//! Query services for the Climate Observation API

pub mod climate;

pub use climate::ClimateService;
